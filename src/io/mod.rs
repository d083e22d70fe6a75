//! Input/output: catalog ingest and sequence exports.

pub mod export;
pub mod ingest;
pub mod sequence;
