//! Placer module for copying selected files to their target locations.
//!
//! This module provides the `Placer` trait and a file system implementation.
//!
//! # Features
//!
//! - Automatic parent directory creation
//! - Existing destinations are skipped, never overwritten, so re-runs are idempotent
//! - A metadata sidecar written next to each newly placed file
//! - Per-file failures are collected instead of aborting the job
//!
//! # Example
//!
//! ```ignore
//! use reelsort_core::placer::{FsPlacer, Placer, PlacementJob, FilePlacement};
//!
//! let placer = FsPlacer::with_defaults();
//!
//! let job = PlacementJob {
//!     job_id: "run-1".to_string(),
//!     files: vec![FilePlacement {
//!         item_id: "E001".to_string(),
//!         source: PathBuf::from("/rips/E1 Alice.mp4"),
//!         destination: PathBuf::from("/library/Studio - E001 - Alice.mp4"),
//!         sidecar: None,
//!     }],
//! };
//!
//! let result = placer.place(job).await?;
//! println!("Placed {} files ({} bytes)", result.files_placed.len(), result.total_bytes);
//! ```

mod config;
mod error;
mod fs_placer;
mod traits;
mod types;

pub use config::PlacerConfig;
pub use error::PlacerError;
pub use fs_placer::FsPlacer;
pub use traits::Placer;
pub use types::{FailedFile, FilePlacement, PlacedFile, PlacementJob, PlacementResult, Sidecar, SkippedFile};
