//! Dense linear algebra over contiguous row-major buffers.
//!
//! `matrix` holds the [`Matrix`] engine itself, `format` the value-to-text
//! helper and display policy it renders with, and `vector` the fixed-arity
//! [`Vec2`](vector::Vec2)/[`Vec3`](vector::Vec3) value types.
pub mod format;
pub mod matrix;
pub mod vector;

pub use matrix::{Matrix, MatrixError};
