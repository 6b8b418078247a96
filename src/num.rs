//! Numbers and numerics.

use num_traits as nt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Gathers traits needed for types that can serve as vector elements.
///
/// Implemented automatically for every type satisfying the bounds, which
/// includes the built-in integer and floating-point types. Overflow,
/// division-by-zero and precision behavior of vector operations are
/// inherited directly from the element type's own arithmetic.
pub trait Element:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + nt::One
    + nt::FromPrimitive
{
}

impl<T> Element for T where
    T: Copy
        + Default
        + PartialEq
        + PartialOrd
        + Add<Output = T>
        + AddAssign
        + Sub<Output = T>
        + SubAssign
        + Mul<Output = T>
        + MulAssign
        + Div<Output = T>
        + DivAssign
        + nt::One
        + nt::FromPrimitive
{
}

/// A type with a square root operation.
///
/// The floating-point implementations use the IEEE square root. The integer
/// implementations truncate to the integer square root, and panic for
/// negative values.
pub trait Sqrt {
    /// Computes the square root of the value.
    fn sqrt(self) -> Self;
}

macro_rules! impl_sqrt_float {
    ($f:tt) => {
        impl Sqrt for $f {
            #[inline]
            fn sqrt(self) -> Self {
                <$f>::sqrt(self)
            }
        }
    };
}

macro_rules! impl_sqrt_int {
    ($t:tt) => {
        impl Sqrt for $t {
            #[inline]
            fn sqrt(self) -> Self {
                self.isqrt()
            }
        }
    };
}

impl_sqrt_float!(f32);
impl_sqrt_float!(f64);

impl_sqrt_int!(i8);
impl_sqrt_int!(i16);
impl_sqrt_int!(i32);
impl_sqrt_int!(i64);
impl_sqrt_int!(i128);
impl_sqrt_int!(isize);
impl_sqrt_int!(u8);
impl_sqrt_int!(u16);
impl_sqrt_int!(u32);
impl_sqrt_int!(u64);
impl_sqrt_int!(u128);
impl_sqrt_int!(usize);
