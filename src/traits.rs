use std::ops;

use crate::scalar;

/// Types that support the trigonometric functions.
///
/// Only implemented for [`f32`]: the implementations delegate to the
/// Taylor-series approximations in [`scalar`], and the kernel is
/// single-precision only.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
}

/// Types that support computing their square root.
///
/// Only implemented for [`f32`], in terms of [`scalar::sqrt`]. All vector and
/// quaternion lengths in this library go through that approximation,
/// including its edge cases.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

macro_rules! int_zero_one {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_zero_one!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl Zero for f32 {
    const ZERO: Self = 0.0;
}
impl One for f32 {
    const ONE: Self = 1.0;
}

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        scalar::sqrt(self)
    }
}

impl Trig for f32 {
    fn sin(self) -> Self {
        scalar::sin(self)
    }

    fn cos(self) -> Self {
        scalar::cos(self)
    }

    fn tan(self) -> Self {
        scalar::tan(self)
    }
}
