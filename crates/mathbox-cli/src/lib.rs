//! Library side of the `mathbox` binary: the bench configuration and
//! runner, kept out of `main.rs` so integration tests can drive them
//! directly.
pub mod bench;
