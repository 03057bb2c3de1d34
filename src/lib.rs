//! Scalar math and linear algebra primitives for 3D rendering and simulation
//! applications.
//!
//! # Motivation
//!
//! A rendering application needs a small set of numeric types it can pass
//! around freely and hand to the GPU: 2/3/4-dimensional vectors, a quaternion
//! for rotations, and the scalar routines underneath them. This library was
//! created to provide exactly that set and nothing more.
//!
//! Two properties set it apart from the general-purpose linear algebra
//! libraries on crates.io:
//!
//! - The scalar kernel is self-contained: square roots and trigonometry are
//!   computed by the iterative approximations in the [`scalar`] module
//!   (Newton-Raphson iteration, Taylor series) rather than the platform math
//!   library, so results are identical on every target.
//! - Degenerate numeric input is never an error. Negative radicands,
//!   zero-length normalization and friends produce a defined zero result
//!   instead of NaNs or panics; callers never have to unwrap a vector.
//!
//! # Goals & Non-Goals
//!
//! - Fixed-arity types only, with dimensions checked at compile time via const
//!   generics. No dynamically-sized vectors.
//! - A single, unpadded data layout, so every type can be handed to a
//!   rendering buffer as a plain slice of its elements (see
//!   [`Vector::as_slice`] and the [`bytemuck`] impls).
//! - Generic over the element type for the structural operations, but the
//!   numeric kernel is single-precision: [`Sqrt`] and [`Trig`] exist for
//!   [`f32`] only. No double-precision paths.
//! - No matrix types, no SIMD, no arbitrary precision.

pub mod scalar;

mod quat;
mod traits;
mod vector;

pub use quat::*;
pub use traits::*;
pub use vector::*;
