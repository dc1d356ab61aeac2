//! Reconciliation of the catalog against scanned files.
//!
//! Every episode with at least one regular file gets exactly one placement,
//! whether or not the catalog knows it. Every bonus file gets its own
//! placement keyed by a negative identifier. Catalog rows without files only
//! show up in the coverage summary.

mod summary;
mod types;

pub use types::*;

use std::borrow::Cow;
use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogRecord};
use crate::config::Config;
use crate::namer::Namer;
use crate::registry::SourceRegistry;
use crate::selector::Selector;

/// Drives selection and naming over the full scan.
#[derive(Debug, Clone)]
pub struct Reconciler {
    selector: Selector,
    namer: Namer,
    gap_preview_limit: usize,
}

impl Reconciler {
    pub fn new(config: &Config) -> Self {
        Self {
            selector: Selector::new(config.naming.preferred_extension.as_str()),
            namer: Namer::new(&config.naming),
            gap_preview_limit: config.output.gap_preview_limit,
        }
    }

    /// Builds the placement plan and coverage summary.
    pub fn reconcile<'a>(
        &self,
        catalog: &'a Catalog,
        registry: &'a SourceRegistry,
    ) -> ReconciliationPlan<'a> {
        let mut placements = Vec::new();
        let mut duplicates = Vec::new();

        for group in registry.groups() {
            let number = group.episode_number();
            let selected = self.selector.select(&group);

            let catalog_record = match catalog.get(number) {
                Some(record) => Cow::Borrowed(record),
                None => {
                    debug!("E{:03} has files but no catalog row", number);
                    Cow::Owned(CatalogRecord::synthesized(number))
                }
            };

            if group.len() > 1 {
                duplicates.push(DuplicateResolution {
                    episode_number: number,
                    selected,
                    candidates: group.members().collect(),
                });
            }

            let target = self.namer.name(&catalog_record, selected);
            placements.push(Placement {
                key: PlacementKey::Episode(number),
                catalog_record,
                selected_file: selected,
                target,
                candidate_count: group.len(),
            });
        }

        for file in registry.bonus() {
            let sequence = file.bonus_sequence.unwrap_or(file.episode_number);
            let target = self.namer.name_bonus(file);
            placements.push(Placement {
                key: PlacementKey::Bonus(sequence),
                catalog_record: Cow::Owned(CatalogRecord {
                    display_name: format!("Deleted Scene {}", sequence),
                    ..CatalogRecord::synthesized(sequence)
                }),
                selected_file: file,
                target,
                candidate_count: 1,
            });
        }

        let placed: BTreeSet<u32> = placements
            .iter()
            .filter_map(|p| match p.key {
                PlacementKey::Episode(n) => Some(n),
                PlacementKey::Bonus(_) => None,
            })
            .collect();
        let summary = CoverageSummary::compute(catalog, registry, &placed, self.gap_preview_limit);

        info!(
            "Reconciled {} placements ({} episodes, {} bonus, {} resolved duplicates)",
            placements.len(),
            placed.len(),
            registry.bonus().len(),
            duplicates.len()
        );

        ReconciliationPlan {
            placements,
            duplicates,
            summary,
        }
    }
}
