//! Metadata document export.
//!
//! The document has two members: `summary` (the coverage summary) and
//! `episodes` (metadata per regular episode, keyed by episode number).
//! It is a report, rewritten in full on every export.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::namer::EpisodeMetadata;
use crate::reconciler::{CoverageSummary, ReconciliationPlan};

/// Errors writing the metadata document.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write metadata to {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The exported document.
#[derive(Debug, Serialize)]
pub struct MetadataDocument<'p> {
    pub summary: &'p CoverageSummary,
    pub episodes: BTreeMap<u32, &'p EpisodeMetadata>,
}

impl<'p> MetadataDocument<'p> {
    pub fn from_plan(plan: &'p ReconciliationPlan<'_>) -> Self {
        Self {
            summary: &plan.summary,
            episodes: plan.episode_metadata(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Writes the document, replacing any previous file.
pub fn write_metadata(path: &Path, document: &MetadataDocument<'_>) -> Result<(), ExportError> {
    let json = document.to_json()?;
    let io_error = |source: std::io::Error| ExportError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, json).map_err(io_error)?;

    info!(
        "Exported metadata for {} episodes to {}",
        document.episodes.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogRecord};
    use crate::config::Config;
    use crate::reconciler::Reconciler;
    use crate::registry::SourceRegistry;
    use crate::testing::fixtures::{bonus_file, primary_file};
    use tempfile::TempDir;

    fn sample() -> (Catalog, SourceRegistry) {
        let catalog: Catalog = vec![CatalogRecord {
            display_name: "Alice".to_string(),
            have_flag: true,
            ..CatalogRecord::synthesized(1)
        }]
        .into_iter()
        .collect();
        let registry = SourceRegistry::new(vec![
            primary_file(1, "mp4", 10),
            primary_file(12, "wmv", 20),
            bonus_file(1, 18),
        ]);
        (catalog, registry)
    }

    #[test]
    fn test_document_shape() {
        let (catalog, registry) = sample();
        let plan = Reconciler::new(&Config::default()).reconcile(&catalog, &registry);
        let json: serde_json::Value =
            serde_json::from_str(&MetadataDocument::from_plan(&plan).to_json().unwrap()).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["summary"]["unique_episodes_with_files"], 2);

        let episodes = object["episodes"].as_object().unwrap();
        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes["1"]["performer"], "Alice");
        assert_eq!(episodes["12"]["format"], "WMV");
    }

    #[test]
    fn test_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("metadata.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "x".repeat(100_000)).unwrap();

        let (catalog, registry) = sample();
        let plan = Reconciler::new(&Config::default()).reconcile(&catalog, &registry);
        write_metadata(&path, &MetadataDocument::from_plan(&plan)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert!(json["episodes"]["1"].is_object());
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("reports").join("metadata.json");

        let (catalog, registry) = sample();
        let plan = Reconciler::new(&Config::default()).reconcile(&catalog, &registry);
        write_metadata(&path, &MetadataDocument::from_plan(&plan)).unwrap();
        assert!(path.exists());
    }
}
