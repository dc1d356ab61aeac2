//! Trait definitions for the placer module.

use async_trait::async_trait;

use super::error::PlacerError;
use super::types::{PlacementJob, PlacementResult};

/// A placer that can copy files to their final destinations.
#[async_trait]
pub trait Placer: Send + Sync {
    /// Returns the name of this placer implementation.
    fn name(&self) -> &str;

    /// Places files according to the job specification.
    ///
    /// Existing destinations are reported as skipped and per-file failures
    /// are collected in the result; an `Err` means the job could not run.
    async fn place(&self, job: PlacementJob) -> Result<PlacementResult, PlacerError>;

    /// Validates that the placer is properly configured and ready.
    async fn validate(&self) -> Result<(), PlacerError>;
}
