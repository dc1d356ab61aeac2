//! Types for the episode catalog.

use std::collections::btree_map;
use std::collections::BTreeMap;
use thiserror::Error;

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogRecord {
    /// Episode number (unique key).
    pub number: u32,
    /// Performer or episode name, may be empty.
    pub display_name: String,
    /// Comma separated special tags, may be empty.
    pub special_tags: String,
    /// Free text note, may be empty.
    pub cheater_flag: String,
    /// Episode is marked as possessed.
    pub have_flag: bool,
    /// Episode has bonus (behind the scenes) content.
    pub bonus_content_flag: bool,
    /// Episode has extra content.
    pub extra_flag: bool,
}

impl CatalogRecord {
    /// Record for an episode with no catalog row: every optional field empty.
    pub fn synthesized(number: u32) -> Self {
        Self {
            number,
            ..Default::default()
        }
    }

    /// Trimmed, non-empty special tags in catalog order.
    pub fn tags(&self) -> Vec<&str> {
        self.special_tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// All catalog records keyed by episode number.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: BTreeMap<u32, CatalogRecord>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing an earlier row with the same number.
    pub fn insert(&mut self, record: CatalogRecord) {
        self.records.insert(record.number, record);
    }

    pub fn get(&self, number: u32) -> Option<&CatalogRecord> {
        self.records.get(&number)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ascending episode order.
    pub fn iter(&self) -> btree_map::Values<'_, u32, CatalogRecord> {
        self.records.values()
    }

    /// Episode numbers marked as possessed, ascending.
    pub fn marked_have(&self) -> impl Iterator<Item = u32> + '_ {
        self.records
            .values()
            .filter(|r| r.have_flag)
            .map(|r| r.number)
    }
}

impl FromIterator<CatalogRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogRecord>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}

/// Errors for catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    NotFound(String),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    Csv(#[from] csv::Error),
}
