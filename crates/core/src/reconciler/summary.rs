//! Coverage summary computation.

use std::collections::{BTreeMap, BTreeSet};

use super::types::CoverageSummary;
use crate::catalog::Catalog;
use crate::registry::{Collection, SourceRegistry};

impl CoverageSummary {
    /// Computes coverage for one run. `placed` holds the episode numbers
    /// that received a regular placement.
    pub fn compute(
        catalog: &Catalog,
        registry: &SourceRegistry,
        placed: &BTreeSet<u32>,
        gap_preview_limit: usize,
    ) -> Self {
        let mut specials_breakdown: BTreeMap<String, usize> = BTreeMap::new();
        for record in catalog.iter() {
            for tag in record.tags() {
                *specials_breakdown.entry(tag.to_string()).or_default() += 1;
            }
        }

        let missing: Vec<u32> = catalog
            .marked_have()
            .filter(|n| !placed.contains(n))
            .collect();

        let total = catalog.len();
        let with_files = placed.len();
        let coverage_pct = if total == 0 {
            0.0
        } else {
            (with_files as f64 / total as f64 * 1000.0).round() / 10.0
        };

        Self {
            total_episodes_in_catalog: total,
            catalog_marked_have: catalog.marked_have().count(),
            unique_episodes_with_files: with_files,
            bonus_items: registry.bonus().len(),
            primary_files: registry.regular_count(Collection::Primary),
            secondary_files: registry.regular_count(Collection::Secondary),
            overlap_episodes: registry.overlap(),
            specials_breakdown,
            have_without_file: missing.iter().copied().take(gap_preview_limit).collect(),
            total_missing_count: missing.len(),
            coverage_pct,
        }
    }
}
