//! Episode catalog: the curated list of known episodes.
//!
//! The catalog is loaded once from a CSV file with a header row and is
//! read-only afterwards. Episodes found on disk without a catalog row are
//! given a synthesized record by the reconciler.

mod loader;
mod types;

pub use loader::{load_catalog, parse_catalog};
pub use types::*;
