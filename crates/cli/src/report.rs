//! Human-readable reports printed to stdout.

use std::collections::HashMap;
use std::fmt::Write;
use std::path::Path;

use reelsort_core::{CoverageSummary, PlacementResult, ReconciliationPlan, SourceFileRecord};

const RULE_WIDTH: usize = 60;

/// Plan listing, duplicate resolution and summary for a dry run.
pub fn plan(plan: &ReconciliationPlan<'_>, dest_dir: &Path) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "DRY RUN: {} file operations", plan.placements.len());
    let _ = writeln!(out, "Destination: {}", dest_dir.display());
    let _ = writeln!(out, "{}\n", rule);

    for placement in &plan.placements {
        let mut annotations = Vec::new();
        if placement.selected_file.is_restricted {
            annotations.push("INTERNAL".to_string());
        }
        if placement.candidate_count > 1 {
            annotations.push(format!("BEST of {}", placement.candidate_count));
        }
        let suffix = if annotations.is_empty() {
            String::new()
        } else {
            format!(" [{}]", annotations.join(", "))
        };
        let _ = writeln!(
            out,
            "  COPY: {} -> {}{}",
            placement.selected_file.file_name(),
            placement.target.relative_path.display(),
            suffix
        );
    }

    out.push_str(&duplicates(plan));
    out.push_str(&summary_text(&plan.summary));
    out
}

/// Every multi-candidate group with its selected member marked.
pub fn duplicates(plan: &ReconciliationPlan<'_>) -> String {
    let mut out = String::from("\n--- Duplicate Resolution ---\n");
    for resolution in &plan.duplicates {
        let _ = writeln!(
            out,
            "  E{:03}: {} files",
            resolution.episode_number,
            resolution.candidates.len()
        );
        for candidate in &resolution.candidates {
            let marker = if std::ptr::eq(*candidate, resolution.selected) {
                "* SELECTED"
            } else {
                "  skipped"
            };
            let _ = writeln!(out, "    {}: {}", marker, describe(candidate));
        }
    }
    out
}

/// Short operator summary.
pub fn summary_text(summary: &CoverageSummary) -> String {
    let mut out = String::from("\n=== Summary ===\n");
    let _ = writeln!(out, "Episodes in catalog: {}", summary.total_episodes_in_catalog);
    let _ = writeln!(out, "Episodes with files: {}", summary.unique_episodes_with_files);
    let _ = writeln!(out, "Coverage: {}%", summary.coverage_pct);
    let _ = writeln!(
        out,
        "Files: {} primary, {} secondary",
        summary.primary_files, summary.secondary_files
    );
    let _ = writeln!(out, "Bonus items: {}", summary.bonus_items);
    let _ = writeln!(
        out,
        "Missing (marked have, no file): {}",
        summary.total_missing_count
    );
    if !summary.specials_breakdown.is_empty() {
        let specials = summary
            .specials_breakdown
            .iter()
            .map(|(tag, count)| format!("{}({})", tag, count))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "Specials: {}", specials);
    }
    out
}

/// Summary as pretty JSON.
pub fn summary_json(summary: &CoverageSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

/// Outcome of an execution run.
pub fn execution(result: &PlacementResult, plan: &ReconciliationPlan<'_>, dest_dir: &Path) -> String {
    let sources: HashMap<String, String> = plan
        .placements
        .iter()
        .map(|p| (p.key.to_string(), p.selected_file.file_name()))
        .collect();
    let relative = |path: &Path| path.strip_prefix(dest_dir).unwrap_or(path).display().to_string();

    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "EXECUTING: {} file operations", plan.placements.len());
    let _ = writeln!(out, "Destination: {}", dest_dir.display());
    let _ = writeln!(out, "{}\n", rule);

    for skipped in &result.files_skipped {
        let _ = writeln!(out, "  SKIP (exists): {}", relative(&skipped.destination));
    }
    for placed in &result.files_placed {
        let source = sources.get(&placed.item_id).map(String::as_str).unwrap_or("?");
        let _ = writeln!(out, "  COPY: {} -> {}", source, relative(&placed.destination));
    }
    for failed in &result.files_failed {
        let _ = writeln!(out, "  FAILED: {}: {}", failed.source.display(), failed.error);
    }

    let _ = writeln!(
        out,
        "\nCopied {} files ({} bytes), skipped {}, failed {}",
        result.files_placed.len(),
        thousands(result.total_bytes),
        result.files_skipped.len(),
        result.files_failed.len()
    );
    out
}

fn describe(file: &SourceFileRecord) -> String {
    format!(
        "{} ({}, {} bytes)",
        file.file_name(),
        file.collection,
        thousands(file.size_bytes)
    )
}

fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
