//! Longest-chain search.
//!
//! Responsibilities:
//!
//! - group the catalog by exact rise value (`index`)
//! - greedily extend a chain for one `(start_rise, step)` candidate (`builder`)
//! - enumerate candidates and keep the first-found longest chain (`driver`)

pub mod builder;
pub mod driver;
pub mod index;

pub use builder::*;
pub use driver::*;
pub use index::*;
