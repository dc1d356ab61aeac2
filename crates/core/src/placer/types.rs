//! Types for the placer module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A file placement job.
#[derive(Debug, Clone)]
pub struct PlacementJob {
    /// Job ID (for logging).
    pub job_id: String,
    /// Files to place, in order.
    pub files: Vec<FilePlacement>,
}

/// A single file placement request.
#[derive(Debug, Clone)]
pub struct FilePlacement {
    /// Item ID (for tracking).
    pub item_id: String,
    /// Source file path.
    pub source: PathBuf,
    /// Destination file path.
    pub destination: PathBuf,
    /// Metadata written next to the destination once the copy succeeds.
    pub sidecar: Option<Sidecar>,
}

/// A metadata file accompanying a placed file.
#[derive(Debug, Clone)]
pub struct Sidecar {
    pub path: PathBuf,
    pub contents: String,
}

/// Outcome of a placement job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacementResult {
    /// Job ID.
    pub job_id: String,
    /// Files copied during this job.
    pub files_placed: Vec<PlacedFile>,
    /// Files left alone because the destination already existed.
    pub files_skipped: Vec<SkippedFile>,
    /// Files that could not be placed.
    pub files_failed: Vec<FailedFile>,
    /// Total bytes copied.
    pub total_bytes: u64,
    /// Duration in milliseconds.
    pub duration_ms: u64,
}

impl PlacementResult {
    /// A result with nothing placed.
    pub fn empty(job_id: String) -> Self {
        Self {
            job_id,
            ..Default::default()
        }
    }
}

/// Information about a placed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedFile {
    /// Item ID.
    pub item_id: String,
    /// Final destination path.
    pub destination: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Sidecar path, if one was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidecar: Option<PathBuf>,
}

/// A placement skipped because its destination exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub item_id: String,
    pub destination: PathBuf,
}

/// A placement that failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedFile {
    pub item_id: String,
    pub source: PathBuf,
    pub error: String,
}
