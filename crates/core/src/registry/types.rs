//! Types for scanned source files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::extractor::ParsedName;

/// The two independently named source collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Primary,
    Secondary,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Primary => write!(f, "primary"),
            Collection::Secondary => write!(f, "secondary"),
        }
    }
}

/// A recognized media file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFileRecord {
    /// Full path of the file (unique per scan).
    pub path: PathBuf,
    pub collection: Collection,
    /// Episode number; for bonus items the referenced episode.
    pub episode_number: u32,
    /// Lowercased container extension.
    pub extension: String,
    pub is_bonus: bool,
    pub is_restricted: bool,
    /// Only set when `is_bonus`.
    pub bonus_sequence: Option<u32>,
    pub age_tag: Option<u32>,
    pub free_tag: String,
    pub size_bytes: u64,
    pub quality_tag: String,
}

impl SourceFileRecord {
    /// Combines a parsed file name with its location and size.
    pub fn new(path: PathBuf, collection: Collection, parsed: ParsedName, size_bytes: u64) -> Self {
        Self {
            path,
            collection,
            episode_number: parsed.episode_number,
            extension: parsed.extension,
            is_bonus: parsed.is_bonus,
            is_restricted: parsed.is_restricted,
            bonus_sequence: parsed.bonus_sequence.filter(|_| parsed.is_bonus),
            age_tag: parsed.age_tag,
            free_tag: parsed.free_tag,
            size_bytes,
            quality_tag: parsed.quality_tag,
        }
    }

    /// The file name without its directory.
    pub fn file_name(&self) -> String {
        basename(&self.path)
    }
}

pub(crate) fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// The regular records sharing one episode number. Never empty.
#[derive(Debug, Clone, Copy)]
pub struct SelectionGroup<'a> {
    episode_number: u32,
    head: &'a SourceFileRecord,
    tail: &'a [SourceFileRecord],
}

impl<'a> SelectionGroup<'a> {
    /// Returns `None` for an empty member list.
    pub fn new(episode_number: u32, members: &'a [SourceFileRecord]) -> Option<Self> {
        let (head, tail) = members.split_first()?;
        Some(Self {
            episode_number,
            head,
            tail,
        })
    }

    pub fn episode_number(&self) -> u32 {
        self.episode_number
    }

    /// The first member in scan order.
    pub fn first(&self) -> &'a SourceFileRecord {
        self.head
    }

    /// Members after the first, in scan order.
    pub fn rest(&self) -> &'a [SourceFileRecord] {
        self.tail
    }

    /// All members in scan order.
    pub fn members(&self) -> impl Iterator<Item = &'a SourceFileRecord> {
        std::iter::once(self.head).chain(self.tail.iter())
    }

    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always false; groups are built from at least one record.
    pub fn is_empty(&self) -> bool {
        false
    }
}
