//! Mock placer for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::placer::{
    PlacedFile, PlacementJob, PlacementResult, Placer, PlacerError, SkippedFile,
};

/// A recorded placement job for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedPlacement {
    /// The job that was submitted.
    pub job: PlacementJob,
    /// Whether the placement succeeded.
    pub success: bool,
}

/// Mock implementation of the Placer trait.
///
/// Provides controllable behavior for testing:
/// - Track placement jobs for assertions
/// - Simulate job failure
/// - Simulate destinations that already exist
/// - Simulate an unready placer
///
/// # Example
///
/// ```rust,ignore
/// use reelsort_core::testing::MockPlacer;
///
/// let placer = MockPlacer::new();
///
/// let result = placer.place(job).await?;
///
/// let placements = placer.recorded_placements().await;
/// assert_eq!(placements.len(), 1);
/// assert!(placements[0].success);
/// ```
#[derive(Debug, Clone)]
pub struct MockPlacer {
    /// Recorded placements.
    placements: Arc<RwLock<Vec<RecordedPlacement>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<PlacerError>>>,
    /// Destinations treated as already present.
    existing: Arc<RwLock<HashSet<PathBuf>>>,
    /// Reason reported by `validate`, if not ready.
    not_ready: Arc<RwLock<Option<String>>>,
}

impl Default for MockPlacer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlacer {
    /// Bytes reported for every placed file.
    pub const FILE_SIZE: u64 = 50 * 1024 * 1024;

    /// Create a new mock placer.
    pub fn new() -> Self {
        Self {
            placements: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            existing: Arc::new(RwLock::new(HashSet::new())),
            not_ready: Arc::new(RwLock::new(None)),
        }
    }

    /// Get all recorded placements.
    pub async fn recorded_placements(&self) -> Vec<RecordedPlacement> {
        self.placements.read().await.clone()
    }

    /// Get the number of placements performed.
    pub async fn placement_count(&self) -> usize {
        self.placements.read().await.len()
    }

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: PlacerError) {
        *self.next_error.write().await = Some(error);
    }

    /// Treat a destination as already present.
    pub async fn add_existing(&self, destination: PathBuf) {
        self.existing.write().await.insert(destination);
    }

    /// Make `validate` fail with the given reason.
    pub async fn set_not_ready(&self, reason: &str) {
        *self.not_ready.write().await = Some(reason.to_string());
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<PlacerError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl Placer for MockPlacer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn place(&self, job: PlacementJob) -> Result<PlacementResult, PlacerError> {
        if let Some(err) = self.take_error().await {
            self.placements.write().await.push(RecordedPlacement {
                job,
                success: false,
            });
            return Err(err);
        }

        let mut result = PlacementResult::empty(job.job_id.clone());
        {
            let mut existing = self.existing.write().await;
            for file in &job.files {
                if existing.contains(&file.destination) {
                    result.files_skipped.push(SkippedFile {
                        item_id: file.item_id.clone(),
                        destination: file.destination.clone(),
                    });
                    continue;
                }

                existing.insert(file.destination.clone());
                result.total_bytes += Self::FILE_SIZE;
                result.files_placed.push(PlacedFile {
                    item_id: file.item_id.clone(),
                    destination: file.destination.clone(),
                    size_bytes: Self::FILE_SIZE,
                    sidecar: file.sidecar.as_ref().map(|s| s.path.clone()),
                });
            }
        }

        self.placements.write().await.push(RecordedPlacement {
            job,
            success: true,
        });

        Ok(result)
    }

    async fn validate(&self) -> Result<(), PlacerError> {
        match self.not_ready.read().await.as_ref() {
            Some(reason) => Err(PlacerError::NotReady {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placer::FilePlacement;

    fn job(destinations: &[&str]) -> PlacementJob {
        PlacementJob {
            job_id: "job-1".to_string(),
            files: destinations
                .iter()
                .map(|d| FilePlacement {
                    item_id: d.to_string(),
                    source: PathBuf::from("/src").join(d),
                    destination: PathBuf::from("/dest").join(d),
                    sidecar: None,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_mock_placer_records_and_skips_on_rerun() {
        let placer = MockPlacer::new();

        let first = placer.place(job(&["a.mp4", "b.mp4"])).await.unwrap();
        assert_eq!(first.files_placed.len(), 2);

        let second = placer.place(job(&["a.mp4", "b.mp4"])).await.unwrap();
        assert!(second.files_placed.is_empty());
        assert_eq!(second.files_skipped.len(), 2);
        assert_eq!(placer.placement_count().await, 2);
    }

    #[tokio::test]
    async fn test_mock_placer_error() {
        let placer = MockPlacer::new();
        placer
            .set_next_error(PlacerError::NotReady {
                reason: "disk offline".to_string(),
            })
            .await;

        assert!(placer.place(job(&["a.mp4"])).await.is_err());
        let recorded = placer.recorded_placements().await;
        assert!(!recorded[0].success);

        // Error is consumed
        assert!(placer.place(job(&["a.mp4"])).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_placer_validate() {
        let placer = MockPlacer::new();
        assert!(placer.validate().await.is_ok());
        placer.set_not_ready("unmounted").await;
        assert!(matches!(
            placer.validate().await,
            Err(PlacerError::NotReady { .. })
        ));
    }
}
