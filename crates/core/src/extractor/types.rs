//! Types for the filename extractors.

use thiserror::Error;

/// Identity fields recovered from a file name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedName {
    /// Episode number (the referenced episode for bonus items).
    pub episode_number: u32,
    /// Lowercased container extension.
    pub extension: String,
    /// Special / deleted scene variant.
    pub is_bonus: bool,
    /// Internal, restricted distribution variant.
    pub is_restricted: bool,
    /// Bonus index, only set for bonus items.
    pub bonus_sequence: Option<u32>,
    /// Age embedded in the release name.
    pub age_tag: Option<u32>,
    /// Trimmed descriptive suffix (primary names only).
    pub free_tag: String,
    /// Quality token such as `720p`, may be empty.
    pub quality_tag: String,
}

/// Errors building extractor patterns.
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("Invalid filename pattern: {0}")]
    Pattern(#[from] regex_lite::Error),
}
