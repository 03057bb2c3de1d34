mod ops;
mod view;

use crate::traits::{Number, One, Sqrt, Trig, Zero};
use crate::vector::{vec3, vec4, Vec3, Vector};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component; `w` is the real (scalar) part and is stored last. The type does not enforce unit
/// length: rotation operations are only meaningful on normalized quaternions, and callers are
/// expected to call [`Quat::normalize`] themselves when needed.
#[derive(Clone, Copy, Hash, Default)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: [x, y, z, w].into(),
        }
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion rotating by `radians` around `axis`.
    ///
    /// `axis` must already be normalized; it is used as-is. Passing a non-unit
    /// axis produces a quaternion that scales as well as rotates.
    pub fn from_angle_axis(radians: T, axis: Vec3<T>) -> Self
    where
        T: Number + Trig,
    {
        let half = radians * Self::one_half();
        let sin = half.sin();
        Self::from_components(axis.x * sin, axis.y * sin, axis.z * sin, half.cos())
    }

    /// Creates a quaternion rotating by `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_angle_axis(radians, Vec3::X)
    }

    /// Creates a quaternion rotating by `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_angle_axis(radians, Vec3::Y)
    }

    /// Creates a quaternion rotating by `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_angle_axis(radians, Vec3::Z)
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it. When using quaternions to model rotations, it
    /// is advisable to ensure that quaternions are always of length one.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// The zero quaternion has no direction to preserve; it is returned
    /// unchanged instead of dividing by zero.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Returns the conjugate of this quaternion: the imaginary parts negated, the real part kept.
    ///
    /// For unit quaternions the conjugate equals the inverse, which makes it the cheap way to
    /// express "the opposite rotation".
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        let [x, y, z, w] = self.vec.into_array();
        Self::from_components(-x, -y, -z, w)
    }

    /// Returns the multiplicative inverse of this quaternion.
    ///
    /// Computed as the conjugate with every component divided by the squared
    /// length, the real part included. The zero quaternion has no inverse and
    /// is returned unchanged.
    pub fn inverse(self) -> Self
    where
        T: Number,
    {
        let length2 = self.length2();
        if length2 == T::ZERO {
            return Self {
                vec: Vector::ZERO,
            };
        }
        let [x, y, z, w] = self.vec.into_array();
        Self::from_components(-x / length2, -y / length2, -z / length2, w / length2)
    }

    /// Rotates `v` by this quaternion.
    ///
    /// `v` is lifted into the pure quaternion `(v.x, v.y, v.z, 0)` and conjugated:
    /// `q · v · q⁻¹`. The scalar part of the product is discarded.
    ///
    /// The result is only a pure rotation of `v` when `self` has unit length; this operation does
    /// not normalize `self`.
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T>
    where
        T: Number,
    {
        let [vx, vy, vz] = v.into_array();
        let pure = Self::from_components(vx, vy, vz, T::ZERO);
        let rotated = self * pure * self.inverse();
        vec3(rotated.x, rotated.y, rotated.z)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::scalar;

    use super::*;

    fn quat(x: f32, y: f32, z: f32, w: f32) -> Quatf {
        Quat::from_components(x, y, z, w)
    }

    #[test]
    fn hamilton_product_of_basis_elements() {
        let i = quat(1.0, 0.0, 0.0, 0.0);
        let j = quat(0.0, 1.0, 0.0, 0.0);
        let k = quat(0.0, 0.0, 1.0, 0.0);

        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, quat(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn multiplication_is_not_commutative() {
        let i = quat(1.0, 0.0, 0.0, 0.0);
        let j = quat(0.0, 1.0, 0.0, 0.0);

        assert_eq!(i * j, quat(0.0, 0.0, 1.0, 0.0));
        assert_eq!(j * i, quat(0.0, 0.0, -1.0, 0.0));
    }

    #[test]
    fn multiplication_is_associative() {
        let p = quat(0.1, 0.2, 0.3, 0.9273618);
        let q = quat(0.5, 0.5, 0.5, 0.5);
        let r = quat(0.0, 0.6, 0.0, 0.8);

        let lhs = (p * q) * r;
        let rhs = p * (q * r);
        assert_relative_eq!(lhs, rhs, epsilon = 1e-5);
    }

    #[test]
    fn identity_leaves_vectors_alone() {
        let v = vec3(1.0, -2.0, 3.0);
        assert_relative_eq!(Quatf::IDENTITY.rotate(v), v, epsilon = 1e-5);
    }

    #[test]
    fn rotate_quarter_turn_around_z() {
        let q = Quatf::from_angle_axis(scalar::PI / 2.0, Vec3::Z);
        let rotated = q.rotate(vec3(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(rotated, vec3(0.0, 1.0, 0.0), epsilon = 1e-3);
    }

    #[test]
    fn rotate_composes_in_application_order() {
        // Two quarter turns around Z are a half turn.
        let quarter = Quatf::from_rotation_z(scalar::PI / 2.0);
        let half = quarter * quarter;
        let rotated = half.rotate(vec3(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(rotated, vec3(-1.0, 0.0, 0.0), epsilon = 1e-3);
    }

    #[test]
    fn angle_axis_is_nearly_unit() {
        let q = Quatf::from_angle_axis(scalar::degrees_to_radians(73.0), Vec3::Y);
        assert_abs_diff_eq!(q.length2(), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn inverse_times_self_is_identity() {
        for q in [
            quat(0.0, 0.0, 0.7071, 0.7071),
            quat(0.1, 0.2, 0.3, 0.9273618),
            quat(1.0, 2.0, 3.0, 4.0), // non-unit on purpose
        ] {
            assert_relative_eq!(q.inverse() * q, Quatf::IDENTITY, epsilon = 1e-4);
        }
    }

    #[test]
    fn inverse_of_zero_is_zero() {
        let zero = quat(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.inverse(), zero);
    }

    #[test]
    fn conjugate_negates_imaginary_parts() {
        let q = quat(1.0, -2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), quat(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn normalize() {
        let q = quat(0.0, 0.0, 3.0, 4.0).normalize();
        assert_relative_eq!(q, quat(0.0, 0.0, 0.6, 0.8), epsilon = 1e-3);

        let zero = quat(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalize(), zero);
    }

    #[test]
    fn componentwise_arithmetic() {
        let a = quat(1.0, 2.0, 3.0, 4.0);
        let b = quat(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a + b, quat(11.0, 22.0, 33.0, 44.0));
        assert_eq!(a * 2.0, quat(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn raw_access() {
        let mut q = quat(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.as_array(), &[1.0, 2.0, 3.0, 4.0]);
        q.as_mut_slice()[3] = 9.0;
        assert_eq!(q.w, 9.0);
        assert_eq!(Quat::from_vec(vec4(1.0, 2.0, 3.0, 4.0)).into_array()[2], 3.0);
    }
}
