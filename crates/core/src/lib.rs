pub mod catalog;
pub mod config;
pub mod export;
pub mod extractor;
pub mod namer;
pub mod pipeline;
pub mod placer;
pub mod reconciler;
pub mod registry;
pub mod selector;
pub mod testing;

pub use catalog::{load_catalog, parse_catalog, Catalog, CatalogError, CatalogRecord};
pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, CatalogConfig,
    Config, ConfigError, NamingConfig, OutputConfig, SourcesConfig,
};
pub use export::{write_metadata, ExportError, MetadataDocument};
pub use extractor::{Extractor, ExtractorError, ParsedName, PrimaryExtractor, SecondaryExtractor};
pub use namer::{EpisodeMetadata, NamedTarget, Namer};
pub use pipeline::{build_job, execute, load_inputs, sidecar_path, Inputs, PipelineError};
pub use placer::{
    FailedFile, FilePlacement, FsPlacer, PlacedFile, PlacementJob, PlacementResult, Placer,
    PlacerConfig, PlacerError, Sidecar, SkippedFile,
};
pub use reconciler::{
    CoverageSummary, DuplicateResolution, Placement, PlacementKey, ReconciliationPlan, Reconciler,
};
pub use registry::{scan_collection, Collection, SelectionGroup, SourceFileRecord, SourceRegistry};
pub use selector::{SelectionRank, Selector};
