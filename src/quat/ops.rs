//! Implementations of `std::ops` and the `approx` comparison traits.

use std::fmt;
use std::ops::{Add, Mul};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::traits::Number;

use super::Quat;

/// Quaternion multiplication (the Hamilton product).
///
/// Composes rotations: `a * b` applies `b` first, then `a`. The product is
/// associative but *not* commutative.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [ax, ay, az, aw] = self.vec.into_array();
        let [bx, by, bz, bw] = rhs.vec.into_array();
        Self::from_components(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }
}

/// Quaternion-Scalar multiplication (componentwise scaling).
impl<T> Mul<T> for Quat<T>
where
    T: Mul + Copy,
{
    type Output = Quat<T::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Quat {
            vec: self.vec * rhs,
        }
    }
}

/// Componentwise addition.
impl<T: Add> Add for Quat<T> {
    type Output = Quat<T::Output>;

    fn add(self, rhs: Self) -> Self::Output {
        Quat {
            vec: self.vec + rhs.vec,
        }
    }
}

impl<T: PartialEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.vec, f)
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vec, f)
    }
}

impl<T> AbsDiffEq for Quat<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.vec.abs_diff_eq(&other.vec, epsilon)
    }
}

impl<T> RelativeEq for Quat<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.vec.relative_eq(&other.vec, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quat<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.vec.ulps_eq(&other.vec, epsilon, max_ulps)
    }
}
