//! Non-recursive directory scan feeding one extractor.

use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::types::SourceFileRecord;
use crate::extractor::Extractor;

/// Lists `dir` (without descending) and keeps the files the extractor
/// recognizes, ordered by file name.
///
/// Symlinks are followed, so a directory of links to the media is scanned
/// like the media itself. A missing directory is reported and contributes
/// nothing.
pub fn scan_collection(dir: &Path, extractor: &dyn Extractor) -> Vec<SourceFileRecord> {
    let collection = extractor.collection();
    if !dir.is_dir() {
        warn!("{} directory not found: {}", collection, dir.display());
        return Vec::new();
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;

    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            skipped += 1;
            continue;
        };

        let Some(parsed) = extractor.extract(file_name) else {
            debug!("Skipping unrecognized {} file: {}", collection, file_name);
            skipped += 1;
            continue;
        };

        let size_bytes = entry.metadata().map(|m| m.len()).unwrap_or(0);
        records.push(SourceFileRecord::new(
            entry.into_path(),
            collection,
            parsed,
            size_bytes,
        ));
    }

    info!(
        "Scanned {} directory {}: {} recognized, {} skipped",
        collection,
        dir.display(),
        records.len(),
        skipped
    );
    records
}
