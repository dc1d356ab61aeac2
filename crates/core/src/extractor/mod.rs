//! Filename pattern extractors.
//!
//! Each source collection has its own naming convention, so each gets a
//! dedicated extractor. An extractor turns a bare file name into a
//! [`ParsedName`] or returns `None`; unrecognized names are never errors.

mod primary;
mod secondary;
mod types;

pub use primary::PrimaryExtractor;
pub use secondary::SecondaryExtractor;
pub use types::*;

use crate::registry::Collection;

/// Parses file names of one source collection.
pub trait Extractor: Send + Sync {
    /// The collection this extractor reads.
    fn collection(&self) -> Collection;

    /// Extracts identity fields from a file name (no directory part).
    fn extract(&self, file_name: &str) -> Option<ParsedName>;
}

/// Regex alternation matching any of the accepted extensions literally.
pub(crate) fn extension_alternation(extensions: &[String]) -> String {
    extensions
        .iter()
        .map(|ext| regex_lite::escape(ext.trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join("|")
}
