//! Run orchestration: load inputs, reconcile, then place.
//!
//! Input absence (missing catalog, missing scan directory) is never fatal:
//! it is logged and the source contributes nothing.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::{load_catalog, Catalog};
use crate::config::Config;
use crate::export::ExportError;
use crate::extractor::{ExtractorError, PrimaryExtractor, SecondaryExtractor};
use crate::placer::{FilePlacement, PlacementJob, PlacementResult, Placer, PlacerError, Sidecar};
use crate::reconciler::ReconciliationPlan;
use crate::registry::{scan_collection, SourceRegistry};

/// Errors that stop a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    #[error(transparent)]
    Placer(#[from] PlacerError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Failed to serialize sidecar metadata: {0}")]
    Sidecar(#[from] serde_json::Error),
}

/// Everything reconciliation consumes.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub catalog: Catalog,
    pub registry: SourceRegistry,
}

/// Loads the catalog and scans both collections.
pub fn load_inputs(config: &Config) -> Result<Inputs, PipelineError> {
    let catalog = match load_catalog(&config.catalog.path, &config.catalog) {
        Ok(catalog) => {
            info!("Loaded {} episodes from catalog", catalog.len());
            catalog
        }
        Err(e) => {
            warn!("{}; continuing with an empty catalog", e);
            Catalog::new()
        }
    };

    let primary = PrimaryExtractor::new(&config.sources.extensions)?;
    let secondary = SecondaryExtractor::new(&config.sources)?;

    let mut records = scan_collection(&config.sources.primary_dir, &primary);
    records.extend(scan_collection(&config.sources.secondary_dir, &secondary));

    Ok(Inputs {
        catalog,
        registry: SourceRegistry::new(records),
    })
}

/// `<dir>/<stem><suffix>` for a destination `<dir>/<stem>.<ext>`.
pub fn sidecar_path(destination: &Path, suffix: &str) -> PathBuf {
    let stem = destination
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    destination.with_file_name(format!("{}{}", stem, suffix))
}

/// Turns the plan into a placement job under the destination root.
pub fn build_job(plan: &ReconciliationPlan<'_>, config: &Config) -> Result<PlacementJob, PipelineError> {
    let files = plan
        .placements
        .iter()
        .map(|placement| {
            let destination = config.output.dest_dir.join(&placement.target.relative_path);
            let sidecar = Sidecar {
                path: sidecar_path(&destination, &config.naming.sidecar_suffix),
                contents: serde_json::to_string_pretty(&placement.target.metadata)?,
            };
            Ok(FilePlacement {
                item_id: placement.key.to_string(),
                source: placement.selected_file.path.clone(),
                destination,
                sidecar: Some(sidecar),
            })
        })
        .collect::<Result<Vec<_>, PipelineError>>()?;

    Ok(PlacementJob {
        job_id: "reelsort".to_string(),
        files,
    })
}

/// Places every file of the plan.
pub async fn execute<P: Placer + ?Sized>(
    placer: &P,
    plan: &ReconciliationPlan<'_>,
    config: &Config,
) -> Result<PlacementResult, PipelineError> {
    placer.validate().await?;
    let job = build_job(plan, config)?;
    info!(
        "Placing {} files into {} with {} placer",
        job.files.len(),
        config.output.dest_dir.display(),
        placer.name()
    );
    Ok(placer.place(job).await?)
}
