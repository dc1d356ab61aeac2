use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Catalog file location and column names
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to the catalog CSV file
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
    #[serde(default = "default_episode_column")]
    pub episode_column: String,
    #[serde(default = "default_name_column")]
    pub name_column: String,
    #[serde(default = "default_special_column")]
    pub special_column: String,
    #[serde(default = "default_cheater_column")]
    pub cheater_column: String,
    #[serde(default = "default_have_column")]
    pub have_column: String,
    #[serde(default = "default_bonus_content_column")]
    pub bonus_content_column: String,
    #[serde(default = "default_extra_column")]
    pub extra_column: String,
    /// Cell value that marks a flag column as set (case-insensitive)
    #[serde(default = "default_marker")]
    pub marker: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            episode_column: default_episode_column(),
            name_column: default_name_column(),
            special_column: default_special_column(),
            cheater_column: default_cheater_column(),
            have_column: default_have_column(),
            bonus_content_column: default_bonus_content_column(),
            extra_column: default_extra_column(),
            marker: default_marker(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("episodes.csv")
}

fn default_episode_column() -> String {
    "EPISODE".to_string()
}

fn default_name_column() -> String {
    "NAME".to_string()
}

fn default_special_column() -> String {
    "SPECIAL".to_string()
}

fn default_cheater_column() -> String {
    "CHEATER".to_string()
}

fn default_have_column() -> String {
    "HAVE".to_string()
}

fn default_bonus_content_column() -> String {
    "BTS".to_string()
}

fn default_extra_column() -> String {
    "EXTRA".to_string()
}

fn default_marker() -> String {
    "x".to_string()
}

/// Scan directories and the naming conventions of the two collections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Directory holding the primary collection (`E<n> <tag>.<ext>`)
    #[serde(default = "default_primary_dir")]
    pub primary_dir: PathBuf,
    /// Directory holding the secondary collection (dotted release names)
    #[serde(default = "default_secondary_dir")]
    pub secondary_dir: PathBuf,
    /// Accepted container extensions, matched case-insensitively
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Leading token of secondary file names. Any alphanumeric token when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_prefix: Option<String>,
    /// Dotted marker identifying bonus files in the secondary collection
    #[serde(default = "default_bonus_marker")]
    pub bonus_marker: String,
    /// Release group suffix after the format token. Any alphanumeric token when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_tag: Option<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            primary_dir: default_primary_dir(),
            secondary_dir: default_secondary_dir(),
            extensions: default_extensions(),
            secondary_prefix: None,
            bonus_marker: default_bonus_marker(),
            release_tag: None,
        }
    }
}

fn default_primary_dir() -> PathBuf {
    PathBuf::from("primary")
}

fn default_secondary_dir() -> PathBuf {
    PathBuf::from("secondary")
}

fn default_extensions() -> Vec<String> {
    vec!["wmv".to_string(), "mp4".to_string()]
}

fn default_bonus_marker() -> String {
    "Deleted.Scenes".to_string()
}

/// Target naming
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NamingConfig {
    /// Studio name used in titles; its whitespace-free form leads file names
    #[serde(default = "default_studio")]
    pub studio: String,
    /// Separator between name components
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Container extension preferred when picking between duplicates
    #[serde(default = "default_preferred_extension")]
    pub preferred_extension: String,
    /// Subdirectory of the destination that receives bonus items
    #[serde(default = "default_bonus_dir")]
    pub bonus_dir: String,
    /// Suffix replacing the media extension for per-file metadata
    #[serde(default = "default_sidecar_suffix")]
    pub sidecar_suffix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            studio: default_studio(),
            separator: default_separator(),
            preferred_extension: default_preferred_extension(),
            bonus_dir: default_bonus_dir(),
            sidecar_suffix: default_sidecar_suffix(),
        }
    }
}

fn default_studio() -> String {
    "Studio".to_string()
}

fn default_separator() -> String {
    " - ".to_string()
}

fn default_preferred_extension() -> String {
    "mp4".to_string()
}

fn default_bonus_dir() -> String {
    "Deleted Scenes".to_string()
}

fn default_sidecar_suffix() -> String {
    ".nfo.json".to_string()
}

/// Destination and report output
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Root directory receiving placed files
    #[serde(default = "default_dest_dir")]
    pub dest_dir: PathBuf,
    /// Metadata document written by export mode
    #[serde(default = "default_metadata_path")]
    pub metadata_path: PathBuf,
    /// Maximum number of coverage gaps listed in the summary
    #[serde(default = "default_gap_preview_limit")]
    pub gap_preview_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dest_dir: default_dest_dir(),
            metadata_path: default_metadata_path(),
            gap_preview_limit: default_gap_preview_limit(),
        }
    }
}

fn default_dest_dir() -> PathBuf {
    PathBuf::from("organized")
}

fn default_metadata_path() -> PathBuf {
    PathBuf::from("reelsort-metadata.json")
}

fn default_gap_preview_limit() -> usize {
    50
}
