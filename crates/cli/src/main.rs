mod commands;
mod logging;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use commands::{Cli, Mode};
use reelsort_core::{
    execute, load_config_or_default, load_inputs, validate_config, write_metadata, Collection,
    FsPlacer, MetadataDocument, PlacerConfig, Reconciler,
};

/// Configuration file picked up from the working directory when present.
const DEFAULT_CONFIG: &str = "reelsort.toml";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.json_logs);

    if let Err(e) = run(cli).await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().or_else(|| {
        let default = PathBuf::from(DEFAULT_CONFIG);
        default.exists().then_some(default)
    });

    match &config_path {
        Some(path) => info!("Loading configuration from {:?}", path),
        None => info!("No configuration file, using defaults and environment"),
    }
    let mut config = load_config_or_default(config_path.as_deref())
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    cli.apply_overrides(&mut config);
    validate_config(&config).context("Configuration validation failed")?;

    let inputs = load_inputs(&config).context("Failed to prepare inputs")?;
    info!(
        "Found {} primary files, {} secondary files, {} bonus files",
        inputs.registry.regular_count(Collection::Primary),
        inputs.registry.regular_count(Collection::Secondary),
        inputs.registry.bonus().len()
    );

    let plan = Reconciler::new(&config).reconcile(&inputs.catalog, &inputs.registry);
    let dest_dir: &Path = &config.output.dest_dir;

    match cli.mode() {
        Mode::Plan => print!("{}", report::plan(&plan, dest_dir)),
        Mode::Summary => {
            let json = report::summary_json(&plan.summary).context("Failed to render summary")?;
            println!("{}", json);
        }
        Mode::ExportMeta => {
            let path = &config.output.metadata_path;
            write_metadata(path, &MetadataDocument::from_plan(&plan))
                .with_context(|| format!("Failed to export metadata to {:?}", path))?;
            println!("Exported metadata to {}", path.display());
        }
        Mode::Execute => {
            let placer = FsPlacer::new(PlacerConfig::default());
            let result = execute(&placer, &plan, &config)
                .await
                .context("Placement failed")?;
            print!("{}", report::execution(&result, &plan, dest_dir));
            print!("{}", report::summary_text(&plan.summary));
            info!("Execution finished in {}ms", result.duration_ms);
        }
    }

    Ok(())
}
