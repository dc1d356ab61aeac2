//! Types produced by reconciliation.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::CatalogRecord;
use crate::namer::{EpisodeMetadata, NamedTarget};
use crate::registry::SourceFileRecord;

/// Identifies a placement. Bonus items live in their own key space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlacementKey {
    Episode(u32),
    Bonus(u32),
}

impl PlacementKey {
    /// Numeric identifier: the episode number, or the negated bonus sequence.
    pub fn id(&self) -> i64 {
        match self {
            PlacementKey::Episode(n) => i64::from(*n),
            PlacementKey::Bonus(n) => -i64::from(*n),
        }
    }
}

impl fmt::Display for PlacementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementKey::Episode(n) => write!(f, "E{:03}", n),
            PlacementKey::Bonus(n) => write!(f, "B{:02}", n),
        }
    }
}

/// One reconciled decision.
#[derive(Debug, Clone)]
pub struct Placement<'a> {
    pub key: PlacementKey,
    /// Catalog row, or a synthesized one when the catalog has none.
    pub catalog_record: Cow<'a, CatalogRecord>,
    pub selected_file: &'a SourceFileRecord,
    pub target: NamedTarget,
    /// Number of files the selection was made from.
    pub candidate_count: usize,
}

/// A group with several candidates and the one chosen from it.
#[derive(Debug, Clone)]
pub struct DuplicateResolution<'a> {
    pub episode_number: u32,
    pub selected: &'a SourceFileRecord,
    /// All candidates in scan order, the selected one included.
    pub candidates: Vec<&'a SourceFileRecord>,
}

/// Coverage analytics over the catalog and the placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub total_episodes_in_catalog: usize,
    pub catalog_marked_have: usize,
    pub unique_episodes_with_files: usize,
    pub bonus_items: usize,
    pub primary_files: usize,
    pub secondary_files: usize,
    /// Episodes with regular files in both collections.
    pub overlap_episodes: Vec<u32>,
    /// Special tag frequency across the whole catalog.
    pub specials_breakdown: BTreeMap<String, usize>,
    /// Episodes marked as possessed without a placement, capped preview.
    pub have_without_file: Vec<u32>,
    /// Uncapped size of the gap.
    pub total_missing_count: usize,
    pub coverage_pct: f64,
}

/// Full reconciliation output.
#[derive(Debug, Clone)]
pub struct ReconciliationPlan<'a> {
    /// Regular placements in ascending episode order, then bonus placements.
    pub placements: Vec<Placement<'a>>,
    pub duplicates: Vec<DuplicateResolution<'a>>,
    pub summary: CoverageSummary,
}

impl<'a> ReconciliationPlan<'a> {
    pub fn placement(&self, key: PlacementKey) -> Option<&Placement<'a>> {
        self.placements.iter().find(|p| p.key == key)
    }

    /// Metadata of regular episodes keyed by episode number.
    pub fn episode_metadata(&self) -> BTreeMap<u32, &EpisodeMetadata> {
        self.placements
            .iter()
            .filter_map(|p| match p.key {
                PlacementKey::Episode(n) => Some((n, &p.target.metadata)),
                PlacementKey::Bonus(_) => None,
            })
            .collect()
    }
}
