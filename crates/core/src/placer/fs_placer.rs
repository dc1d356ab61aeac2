//! File system placer implementation.

use async_trait::async_trait;
use std::path::Path;
use std::time::Instant;
use tokio::fs;
use tracing::{debug, info, warn};

use super::config::PlacerConfig;
use super::error::PlacerError;
use super::traits::Placer;
use super::types::{FailedFile, FilePlacement, PlacedFile, PlacementJob, PlacementResult, Sidecar, SkippedFile};

/// File system based placer implementation.
pub struct FsPlacer {
    config: PlacerConfig,
}

impl FsPlacer {
    /// Creates a new file system placer with the given configuration.
    pub fn new(config: PlacerConfig) -> Self {
        Self { config }
    }

    /// Creates a placer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PlacerConfig::default())
    }

    /// Creates parent directories for a path.
    async fn ensure_parent_dirs(&self, path: &Path) -> Result<(), PlacerError> {
        if !self.config.create_parents {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !fs::try_exists(parent).await? {
                fs::create_dir_all(parent).await.map_err(|e| {
                    PlacerError::DirectoryCreationFailed {
                        path: parent.to_path_buf(),
                        source: e,
                    }
                })?;
            }
        }
        Ok(())
    }

    async fn write_sidecar(&self, sidecar: &Sidecar) -> Result<(), PlacerError> {
        fs::write(&sidecar.path, &sidecar.contents)
            .await
            .map_err(|e| PlacerError::SidecarFailed {
                path: sidecar.path.clone(),
                source: e,
            })
    }

    /// Places a single file.
    async fn place_file(&self, placement: &FilePlacement) -> Result<PlacedFile, PlacerError> {
        // Never overwrite: an existing destination means an earlier run placed it
        if fs::try_exists(&placement.destination).await? {
            return Err(PlacerError::DestinationExists {
                path: placement.destination.clone(),
            });
        }

        if !fs::try_exists(&placement.source).await? {
            return Err(PlacerError::SourceNotFound {
                path: placement.source.clone(),
            });
        }

        self.ensure_parent_dirs(&placement.destination).await?;

        let size_bytes = fs::copy(&placement.source, &placement.destination)
            .await
            .map_err(|e| {
                PlacerError::copy_failed(
                    placement.source.clone(),
                    placement.destination.clone(),
                    e,
                )
            })?;

        let sidecar = match (&placement.sidecar, self.config.write_sidecars) {
            (Some(sidecar), true) => match self.write_sidecar(sidecar).await {
                Ok(()) => Some(sidecar.path.clone()),
                Err(e) => {
                    // The media file is in place; a missing sidecar is not worth failing for
                    warn!("{}", e);
                    None
                }
            },
            _ => None,
        };

        Ok(PlacedFile {
            item_id: placement.item_id.clone(),
            destination: placement.destination.clone(),
            size_bytes,
            sidecar,
        })
    }
}

#[async_trait]
impl Placer for FsPlacer {
    fn name(&self) -> &str {
        "fs"
    }

    async fn place(&self, job: PlacementJob) -> Result<PlacementResult, PlacerError> {
        let start = Instant::now();
        let mut result = PlacementResult::empty(job.job_id.clone());

        for placement in &job.files {
            match self.place_file(placement).await {
                Ok(placed) => {
                    debug!(
                        "Placed {} -> {}",
                        placement.source.display(),
                        placed.destination.display()
                    );
                    result.total_bytes += placed.size_bytes;
                    result.files_placed.push(placed);
                }
                Err(e) if e.is_skip() => {
                    info!("Skipping {}: {}", placement.item_id, e);
                    result.files_skipped.push(SkippedFile {
                        item_id: placement.item_id.clone(),
                        destination: placement.destination.clone(),
                    });
                }
                Err(e) => {
                    warn!("Failed to place {}: {}", placement.item_id, e);
                    result.files_failed.push(FailedFile {
                        item_id: placement.item_id.clone(),
                        source: placement.source.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        result.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Job {}: {} placed, {} skipped, {} failed ({} bytes)",
            result.job_id,
            result.files_placed.len(),
            result.files_skipped.len(),
            result.files_failed.len(),
            result.total_bytes
        );
        Ok(result)
    }

    async fn validate(&self) -> Result<(), PlacerError> {
        // Basic validation - nothing specific needed for fs placer
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn placement(source: PathBuf, destination: PathBuf) -> FilePlacement {
        FilePlacement {
            item_id: "item-1".to_string(),
            source,
            destination,
            sidecar: None,
        }
    }

    fn job(files: Vec<FilePlacement>) -> PlacementJob {
        PlacementJob {
            job_id: "test-job".to_string(),
            files,
        }
    }

    #[tokio::test]
    async fn test_place_single_file() {
        let temp = TempDir::new().unwrap();
        let source_path = temp.path().join("source.mp4");
        let dest_path = temp.path().join("dest/subdir/output.mp4");

        fs::write(&source_path, "test content").await.unwrap();

        let placer = FsPlacer::with_defaults();
        let result = placer
            .place(job(vec![placement(source_path.clone(), dest_path.clone())]))
            .await
            .unwrap();

        assert_eq!(result.files_placed.len(), 1);
        assert_eq!(result.total_bytes, 12);
        assert!(dest_path.exists());
        // Copy, not move
        assert!(source_path.exists());
    }

    #[tokio::test]
    async fn test_existing_destination_is_skipped() {
        let temp = TempDir::new().unwrap();
        let source_path = temp.path().join("source.mp4");
        let dest_path = temp.path().join("output.mp4");

        fs::write(&source_path, "source content").await.unwrap();
        fs::write(&dest_path, "existing content").await.unwrap();

        let placer = FsPlacer::with_defaults();
        let result = placer
            .place(job(vec![placement(source_path, dest_path.clone())]))
            .await
            .unwrap();

        assert!(result.files_placed.is_empty());
        assert_eq!(result.files_skipped.len(), 1);
        assert_eq!(result.total_bytes, 0);
        let content = fs::read_to_string(&dest_path).await.unwrap();
        assert_eq!(content, "existing content");
    }

    #[tokio::test]
    async fn test_missing_source_does_not_abort_job() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.mp4");
        fs::write(&good, "content").await.unwrap();

        let placer = FsPlacer::with_defaults();
        let result = placer
            .place(job(vec![
                placement(temp.path().join("missing.mp4"), temp.path().join("out/a.mp4")),
                placement(good, temp.path().join("out/b.mp4")),
            ]))
            .await
            .unwrap();

        assert_eq!(result.files_failed.len(), 1);
        assert!(result.files_failed[0].error.contains("not found"));
        assert_eq!(result.files_placed.len(), 1);
        assert!(!temp.path().join("out/a.mp4").exists());
        assert!(temp.path().join("out/b.mp4").exists());
    }

    #[tokio::test]
    async fn test_sidecar_written() {
        let temp = TempDir::new().unwrap();
        let source_path = temp.path().join("source.mp4");
        let dest_path = temp.path().join("lib/E001.mp4");
        let sidecar_path = temp.path().join("lib/E001.nfo.json");
        fs::write(&source_path, "media").await.unwrap();

        let mut file = placement(source_path, dest_path);
        file.sidecar = Some(Sidecar {
            path: sidecar_path.clone(),
            contents: "{\"episode\": 1}".to_string(),
        });

        let result = FsPlacer::with_defaults().place(job(vec![file])).await.unwrap();

        assert_eq!(result.files_placed[0].sidecar.as_ref(), Some(&sidecar_path));
        let content = fs::read_to_string(&sidecar_path).await.unwrap();
        assert_eq!(content, "{\"episode\": 1}");
    }

    #[tokio::test]
    async fn test_sidecars_disabled() {
        let temp = TempDir::new().unwrap();
        let source_path = temp.path().join("source.mp4");
        let sidecar_path = temp.path().join("E001.nfo.json");
        fs::write(&source_path, "media").await.unwrap();

        let mut file = placement(source_path, temp.path().join("E001.mp4"));
        file.sidecar = Some(Sidecar {
            path: sidecar_path.clone(),
            contents: "{}".to_string(),
        });

        let placer = FsPlacer::new(PlacerConfig::default().with_sidecars(false));
        let result = placer.place(job(vec![file])).await.unwrap();

        assert!(result.files_placed[0].sidecar.is_none());
        assert!(!sidecar_path.exists());
    }

    #[tokio::test]
    async fn test_without_parent_creation_fails_for_missing_dir() {
        let temp = TempDir::new().unwrap();
        let source_path = temp.path().join("source.mp4");
        fs::write(&source_path, "media").await.unwrap();

        let placer = FsPlacer::new(PlacerConfig::default().with_create_parents(false));
        let result = placer
            .place(job(vec![placement(source_path, temp.path().join("missing/out.mp4"))]))
            .await
            .unwrap();

        assert_eq!(result.files_failed.len(), 1);
    }
}
