//! Types produced by the namer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::registry::{Collection, SourceFileRecord};

/// Target name, destination-relative path and metadata for one placement.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTarget {
    /// File name including extension.
    pub target_name: String,
    /// Path relative to the destination root.
    pub relative_path: PathBuf,
    pub metadata: EpisodeMetadata,
}

/// Flat metadata record. Absent data is omitted, never null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeMetadata {
    /// Episode number; negative for bonus items.
    pub episode: i64,
    pub title: String,
    pub studio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cheater_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub has_bonus_content: bool,
    pub has_extra_content: bool,
    pub source: Collection,
    pub source_file: String,
    /// Uppercased container extension.
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    pub size_bytes: u64,
}

impl EpisodeMetadata {
    /// File-derived fields; catalog-derived fields left empty.
    pub(crate) fn for_file(file: &SourceFileRecord) -> Self {
        Self {
            episode: i64::from(file.episode_number),
            title: String::new(),
            studio: String::new(),
            performer: None,
            tags: Vec::new(),
            cheater_type: None,
            age: None,
            has_bonus_content: false,
            has_extra_content: false,
            source: file.collection,
            source_file: file.file_name(),
            format: file.extension.to_uppercase(),
            quality: (!file.quality_tag.is_empty()).then(|| file.quality_tag.clone()),
            size_bytes: file.size_bytes,
        }
    }
}
