use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use reelsort_core::Config;

#[derive(Debug, Parser)]
#[command(name = "reelsort")]
#[command(about = "Reconcile an episode catalog against two rip collections", long_about = None)]
#[command(group(ArgGroup::new("mode").args(["execute", "summary", "export_meta"])))]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Copy files into the destination (default: print the plan only)
    #[arg(long)]
    pub execute: bool,

    /// Print the coverage summary only
    #[arg(long)]
    pub summary: bool,

    /// Write the metadata document only
    #[arg(long)]
    pub export_meta: bool,

    /// Episode catalog CSV
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Destination library directory
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Primary collection directory
    #[arg(long, value_name = "DIR")]
    pub primary: Option<PathBuf>,

    /// Secondary collection directory
    #[arg(long, value_name = "DIR")]
    pub secondary: Option<PathBuf>,

    /// Metadata document path
    #[arg(long, value_name = "FILE")]
    pub metadata: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Plan,
    Summary,
    ExportMeta,
    Execute,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.execute {
            Mode::Execute
        } else if self.summary {
            Mode::Summary
        } else if self.export_meta {
            Mode::ExportMeta
        } else {
            Mode::Plan
        }
    }

    /// Path flags take precedence over file and environment configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.catalog {
            config.catalog.path = path.clone();
        }
        if let Some(path) = &self.dest {
            config.output.dest_dir = path.clone();
        }
        if let Some(path) = &self.primary {
            config.sources.primary_dir = path.clone();
        }
        if let Some(path) = &self.secondary {
            config.sources.secondary_dir = path.clone();
        }
        if let Some(path) = &self.metadata {
            config.output.metadata_path = path.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_plan() {
        let cli = Cli::try_parse_from(["reelsort"]).unwrap();
        assert_eq!(cli.mode(), Mode::Plan);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_mode_flags() {
        let cli = Cli::try_parse_from(["reelsort", "--execute"]).unwrap();
        assert_eq!(cli.mode(), Mode::Execute);

        let cli = Cli::try_parse_from(["reelsort", "--summary"]).unwrap();
        assert_eq!(cli.mode(), Mode::Summary);

        let cli = Cli::try_parse_from(["reelsort", "--export-meta"]).unwrap();
        assert_eq!(cli.mode(), Mode::ExportMeta);
    }

    #[test]
    fn test_modes_are_exclusive() {
        assert!(Cli::try_parse_from(["reelsort", "--execute", "--summary"]).is_err());
        assert!(Cli::try_parse_from(["reelsort", "--summary", "--export-meta"]).is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "reelsort",
            "--catalog",
            "/data/episodes.csv",
            "--dest",
            "/library",
            "--metadata",
            "/library/meta.json",
        ])
        .unwrap();

        let mut config = Config::default();
        let primary = config.sources.primary_dir.clone();
        cli.apply_overrides(&mut config);

        assert_eq!(config.catalog.path, PathBuf::from("/data/episodes.csv"));
        assert_eq!(config.output.dest_dir, PathBuf::from("/library"));
        assert_eq!(config.output.metadata_path, PathBuf::from("/library/meta.json"));
        assert_eq!(config.sources.primary_dir, primary);
    }
}
