//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - catalog records ([`DelayEntry`])
//! - search inputs ([`SearchParams`], [`SearchConfig`])
//! - search outputs ([`SequenceStep`], [`BestChain`], [`SearchOutcome`])

pub mod types;

pub use types::*;
