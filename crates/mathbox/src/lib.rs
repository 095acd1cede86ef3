//! mathbox: a small dense-matrix linear-algebra engine and friends.
//!
//! The heart of the crate is [`linalg::Matrix`], an immutable 2-D matrix of
//! `f64` values backed by a single contiguous row-major buffer, with shape
//! validation, arithmetic and structural operations, and a column-aligned
//! text renderer that truncates large matrices.
//!
//! Around it live a few independent utilities that share no state with the
//! matrix engine: fixed-arity vector values ([`linalg::vector`]),
//! solid-geometry surface areas ([`geometry`]), a without-replacement
//! integer sampler ([`sampling`]), and scalar statistics helpers
//! ([`stats`]).
pub mod geometry;
pub mod linalg;
pub mod sampling;
pub mod stats;

pub use linalg::{Matrix, MatrixError};
