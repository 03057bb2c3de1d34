//! Named component access.
//!
//! Vectors deref to `#[repr(C)]` view structs whose fields alias the vector's
//! own storage, so `v.x`/`v.y`/`v.z`/`v.w` read and write the underlying
//! elements directly. The views cannot be constructed on their own and never
//! outlive the vector they borrow from.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use super::Vector;

/// View of a 2-dimensional vector's components.
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

/// View of a 3-dimensional vector's components.
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

/// View of the components of a 4-dimensional vector or a quaternion.
#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

macro_rules! component_view {
    ($($dim:literal => $view:ident),+ $(,)?) => {
        $(
            impl<T> Deref for Vector<T, $dim> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // `Vector` is a transparent wrapper around `[T; N]` and
                    // the view is a `repr(C)` struct of N `T`s, so the layouts
                    // match exactly.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $dim> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

component_view! {
    2 => XY,
    3 => XYZ,
    4 => XYZW,
}
