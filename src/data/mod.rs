//! Synthetic catalog generation.

pub mod sample;

pub use sample::*;
