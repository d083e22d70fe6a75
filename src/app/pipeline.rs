//! Search-pipeline stages.
//!
//! The workflow is catalog ingest -> candidate search -> best chain. The two
//! stages are separate functions: the CLI front-end prints its progress lines
//! between them, and library callers can compose them without any console
//! output.

use crate::domain::{SearchConfig, SearchOutcome};
use crate::error::AppError;
use crate::io::ingest::{self, CatalogData};
use crate::search::find_longest_sequence;

/// Load and validate the catalog named by the config.
pub fn load_catalog(config: &SearchConfig) -> Result<CatalogData, AppError> {
    ingest::load_catalog(&config.catalog)
}

/// Exhaustive candidate search over `(start_rise, step)` pairs.
pub fn run_search(catalog: &CatalogData, config: &SearchConfig) -> SearchOutcome {
    find_longest_sequence(&catalog.entries, config.params())
}
