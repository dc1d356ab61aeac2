//! Source registry: every recognized file from both collections.
//!
//! Bonus records are kept apart from regular ones. Regular records are
//! grouped by episode number, each group holding the duplicates the
//! selector chooses between.

mod scan;
mod types;

pub use scan::scan_collection;
pub use types::*;

use std::collections::{BTreeMap, BTreeSet};

/// Partitioned and grouped scan results.
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    regular: BTreeMap<u32, Vec<SourceFileRecord>>,
    bonus: Vec<SourceFileRecord>,
}

impl SourceRegistry {
    /// Builds the registry. Records keep their scan order within a group.
    pub fn new(records: impl IntoIterator<Item = SourceFileRecord>) -> Self {
        let mut regular: BTreeMap<u32, Vec<SourceFileRecord>> = BTreeMap::new();
        let mut bonus = Vec::new();

        for record in records {
            if record.is_bonus {
                bonus.push(record);
            } else {
                regular.entry(record.episode_number).or_default().push(record);
            }
        }

        // Stable: equal sequences from both collections keep scan order.
        bonus.sort_by_key(|r| r.bonus_sequence);

        Self { regular, bonus }
    }

    /// Selection groups in ascending episode order.
    pub fn groups(&self) -> impl Iterator<Item = SelectionGroup<'_>> {
        self.regular
            .iter()
            .filter_map(|(&number, members)| SelectionGroup::new(number, members))
    }

    /// The selection group for one episode, if any file was found.
    pub fn group(&self, episode_number: u32) -> Option<SelectionGroup<'_>> {
        self.regular
            .get(&episode_number)
            .and_then(|members| SelectionGroup::new(episode_number, members))
    }

    /// Bonus records ordered by bonus sequence.
    pub fn bonus(&self) -> &[SourceFileRecord] {
        &self.bonus
    }

    /// Number of episodes with at least one regular file.
    pub fn episode_count(&self) -> usize {
        self.regular.len()
    }

    /// Number of regular records from one collection.
    pub fn regular_count(&self, collection: Collection) -> usize {
        self.regular
            .values()
            .flatten()
            .filter(|r| r.collection == collection)
            .count()
    }

    /// Episodes with regular files in both collections, ascending.
    pub fn overlap(&self) -> Vec<u32> {
        let in_collection = |collection: Collection| -> BTreeSet<u32> {
            self.regular
                .iter()
                .filter(|(_, members)| members.iter().any(|r| r.collection == collection))
                .map(|(&n, _)| n)
                .collect()
        };

        in_collection(Collection::Primary)
            .intersection(&in_collection(Collection::Secondary))
            .copied()
            .collect()
    }
}
