//! Named component access and raw storage views.
//!
//! A quaternion derefs to the same `XYZW` view its backing 4-vector uses, so
//! `q.x`/`q.y`/`q.z`/`q.w` alias the quaternion's own storage. The slice
//! accessors expose all four components contiguously in `x, y, z, w` order for
//! handing off to a rendering buffer.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::vector::view::XYZW;

use super::Quat;

impl<T> Quat<T> {
    /// Returns a reference to the components as an array, in `x, y, z, w` order.
    #[inline]
    pub const fn as_array(&self) -> &[T; 4] {
        self.vec.as_array()
    }

    /// Returns a mutable reference to the components as an array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; 4] {
        self.vec.as_mut_array()
    }

    /// Returns a reference to the components as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        self.vec.as_slice()
    }

    /// Returns a mutable reference to the components as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.vec.as_mut_slice()
    }

    /// Converts this quaternion into an array of its components.
    #[inline]
    pub fn into_array(self) -> [T; 4] {
        self.vec.into_array()
    }
}

impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // `Quat` is a transparent wrapper around `Vector<T, 4>`, which shares
        // its layout with the view.
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
