use std::fmt::{Debug, Display};

use num_traits::{Bounded, Zero};
use ordered_float::OrderedFloat;

/// Arc cost and path distance type.
///
/// Every weight type carries its own "infinity" sentinel. A shortest path uses
/// at most `n - 1` arcs, so capping each arc at [`Weight::max_arc_cost`] keeps
/// every achievable path cost strictly below the sentinel. Integers use their
/// maximum value as the sentinel; floats use positive infinity.
pub trait Weight: Copy + Ord + Debug + Display + Zero + Send + Sync {
    /// Distance reported for nodes the traversal never reached.
    fn infinity() -> Self;

    /// Largest arc cost for which `n - 1` such arcs sum to less than
    /// [`Weight::infinity`] in a graph of `node_count` nodes.
    fn max_arc_cost(node_count: usize) -> Self;

    /// Addition that never wraps past the sentinel.
    ///
    /// Under the [`Weight::max_arc_cost`] bound this is exact addition; the
    /// saturation only matters for unchecked negative costs.
    fn saturating_add(self, rhs: Self) -> Self;

    fn is_infinite(self) -> bool {
        self == Self::infinity()
    }

    fn is_negative(self) -> bool {
        self < Self::zero()
    }
}

/// Arcs on the longest simple path of a graph with `node_count` nodes, at least 1
fn max_hops(node_count: usize) -> usize {
    node_count.saturating_sub(1).max(1)
}

macro_rules! integer_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            fn infinity() -> Self {
                <$t as Bounded>::max_value()
            }

            fn max_arc_cost(node_count: usize) -> Self {
                // A hop count outside the type's range leaves no budget per arc
                match <$t>::try_from(max_hops(node_count)) {
                    Ok(hops) => (Self::infinity() - 1) / hops,
                    Err(_) => 0,
                }
            }

            fn saturating_add(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }
        }
    )*};
}

integer_weight!(u32, u64, usize, i32, i64);

macro_rules! float_weight {
    ($($t:ident),*) => {$(
        impl Weight for OrderedFloat<$t> {
            fn infinity() -> Self {
                OrderedFloat($t::INFINITY)
            }

            // Half of MAX per hop leaves room for rounding in the running sum.
            // NaN sorts above infinity in OrderedFloat, so it never fits.
            fn max_arc_cost(node_count: usize) -> Self {
                OrderedFloat($t::MAX / (2.0 * max_hops(node_count) as $t))
            }

            // IEEE addition already saturates at +inf for non-negative operands
            fn saturating_add(self, rhs: Self) -> Self {
                self + rhs
            }
        }
    )*};
}

float_weight!(f32, f64);
