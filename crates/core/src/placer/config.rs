//! Configuration for the placer module.

use serde::{Deserialize, Serialize};

/// Configuration for the file system placer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacerConfig {
    /// Whether to create missing destination directories.
    #[serde(default = "default_true")]
    pub create_parents: bool,

    /// Whether to write metadata sidecars next to placed files.
    #[serde(default = "default_true")]
    pub write_sidecars: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            create_parents: true,
            write_sidecars: true,
        }
    }
}

impl PlacerConfig {
    /// Enables or disables parent directory creation.
    pub fn with_create_parents(mut self, enabled: bool) -> Self {
        self.create_parents = enabled;
        self
    }

    /// Enables or disables sidecar writing.
    pub fn with_sidecars(mut self, enabled: bool) -> Self {
        self.write_sidecars = enabled;
        self
    }
}
