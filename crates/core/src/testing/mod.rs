//! Testing utilities: record fixtures and a mock placer.
//!
//! # Example
//!
//! ```rust,ignore
//! use reelsort_core::testing::{fixtures, MockPlacer};
//!
//! let registry = SourceRegistry::new(vec![
//!     fixtures::primary_file(1, "mp4", 300),
//!     fixtures::bonus_file(1, 18),
//! ]);
//! let placer = MockPlacer::new();
//! ```

mod mock_placer;

pub use mock_placer::{MockPlacer, RecordedPlacement};

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::path::PathBuf;

    use crate::registry::{Collection, SourceFileRecord};

    /// A regular primary collection file named `E<n>.<ext>`.
    pub fn primary_file(episode: u32, extension: &str, size_bytes: u64) -> SourceFileRecord {
        SourceFileRecord {
            path: PathBuf::from(format!("/primary/E{}.{}", episode, extension)),
            collection: Collection::Primary,
            episode_number: episode,
            extension: extension.to_string(),
            is_bonus: false,
            is_restricted: false,
            bonus_sequence: None,
            age_tag: None,
            free_tag: String::new(),
            size_bytes,
            quality_tag: String::new(),
        }
    }

    /// A regular secondary collection file.
    pub fn secondary_file(episode: u32, extension: &str, size_bytes: u64) -> SourceFileRecord {
        SourceFileRecord {
            path: PathBuf::from(format!(
                "/secondary/Show.E{}.{}.{}",
                episode,
                extension.to_uppercase(),
                extension
            )),
            collection: Collection::Secondary,
            ..primary_file(episode, extension, size_bytes)
        }
    }

    /// A secondary collection bonus file (mp4, 720p).
    pub fn bonus_file(sequence: u32, age: u32) -> SourceFileRecord {
        SourceFileRecord {
            path: PathBuf::from(format!(
                "/secondary/Show.E{:02}.Deleted.Scenes.{}.Years.Old.XXX.720p.MP4-GRP.mp4",
                sequence, age
            )),
            is_bonus: true,
            bonus_sequence: Some(sequence),
            age_tag: Some(age),
            quality_tag: "720p".to_string(),
            ..secondary_file(sequence, "mp4", 64 * 1024 * 1024)
        }
    }
}
