//! Integer measures for edge weights, distances and potentials.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// A signed integer measure for edge weights, distances and potentials.
///
/// `MAX` doubles as the "unreachable" sentinel in distance vectors. The
/// shortest-path primitives never add to an unreachable entry, so finite
/// arithmetic stays clear of the sentinel.
pub trait Measure:
    Copy
    + Debug
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    /// Largest representable value, used to mean "unreachable".
    const MAX: Self;

    fn from_usize(value: usize) -> Self;
}

macro_rules! impl_measure_integer {
    ( $( $t:ident ),* ) => {
        $(
            impl Measure for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = $t::MAX;

                fn from_usize(value: usize) -> Self {
                    value as $t
                }
            }
        )*
    };
}

// The narrower signed types are left out: the scaling driver multiplies
// weights by 4N, which i8/i16 cannot accommodate for any useful graph.
impl_measure_integer!(i32, i64, i128, isize);

/// Ceiling division, compatible with the truncating semantics of integer `/`.
///
/// `b` must be positive.
pub fn div_ceil<W: Measure>(a: W, b: W) -> W {
    if a >= W::ZERO {
        (a + b - W::ONE) / b
    } else {
        -((-a) / b)
    }
}

#[cfg(test)]
mod tests {
    use super::div_ceil;

    #[test]
    fn div_ceil_rounds_toward_positive_infinity() {
        assert_eq!(div_ceil(7i64, 3), 3);
        assert_eq!(div_ceil(6i64, 3), 2);
        assert_eq!(div_ceil(-7i64, 3), -2);
        assert_eq!(div_ceil(-6i64, 3), -2);
        assert_eq!(div_ceil(0i64, 5), 0);
        assert_eq!(div_ceil(-1i64, 5), 0);
    }
}
