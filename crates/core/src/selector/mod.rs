//! Canonical file selection among duplicates.
//!
//! Candidates are ranked by, in priority order:
//!
//! 1. unrestricted before restricted (`INTERNAL`) releases
//! 2. the preferred container before any other
//! 3. larger files
//! 4. the primary collection before the secondary one
//!
//! On a full tie the earliest candidate in scan order wins.

use crate::registry::{Collection, SelectionGroup, SourceFileRecord};

/// Ranking key; a greater rank is a better candidate.
///
/// Field order is the comparison priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SelectionRank {
    pub unrestricted: bool,
    pub preferred_container: bool,
    pub size_bytes: u64,
    pub primary: bool,
}

/// Picks one file per selection group.
#[derive(Debug, Clone)]
pub struct Selector {
    preferred_extension: String,
}

impl Selector {
    pub fn new(preferred_extension: impl Into<String>) -> Self {
        Self {
            preferred_extension: preferred_extension.into().to_lowercase(),
        }
    }

    /// Ranking key for one candidate.
    pub fn rank(&self, record: &SourceFileRecord) -> SelectionRank {
        SelectionRank {
            unrestricted: !record.is_restricted,
            preferred_container: record.extension.eq_ignore_ascii_case(&self.preferred_extension),
            size_bytes: record.size_bytes,
            primary: record.collection == Collection::Primary,
        }
    }

    /// Returns the best member of the group.
    pub fn select<'a>(&self, group: &SelectionGroup<'a>) -> &'a SourceFileRecord {
        let first = group.first();
        group
            .rest()
            .iter()
            .fold((first, self.rank(first)), |(best, best_rank), candidate| {
                let rank = self.rank(candidate);
                if rank > best_rank {
                    (candidate, rank)
                } else {
                    (best, best_rank)
                }
            })
            .0
    }
}
