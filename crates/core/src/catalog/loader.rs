//! CSV catalog loader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use super::types::{Catalog, CatalogError, CatalogRecord};
use crate::config::CatalogConfig;

/// Column positions resolved from the header row.
struct Columns {
    episode: Option<usize>,
    name: Option<usize>,
    special: Option<usize>,
    cheater: Option<usize>,
    have: Option<usize>,
    bonus_content: Option<usize>,
    extra: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord, config: &CatalogConfig) -> Self {
        // Spreadsheet exports often carry a byte order mark on the first header.
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == name)
        };

        Self {
            episode: find(&config.episode_column),
            name: find(&config.name_column),
            special: find(&config.special_column),
            cheater: find(&config.cheater_column),
            have: find(&config.have_column),
            bonus_content: find(&config.bonus_content_column),
            extra: find(&config.extra_column),
        }
    }
}

fn cell<'r>(row: &'r StringRecord, column: Option<usize>) -> &'r str {
    column.and_then(|i| row.get(i)).unwrap_or("").trim()
}

fn is_marked(value: &str, marker: &str) -> bool {
    value.trim().eq_ignore_ascii_case(marker)
}

/// Load the catalog from a CSV file.
pub fn load_catalog(path: &Path, config: &CatalogConfig) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.display().to_string()));
    }

    let file = File::open(path)?;
    parse_catalog(file, config)
}

/// Parse catalog rows from any CSV source.
///
/// Rows whose episode cell is missing or not an integer are skipped, as are
/// rows the CSV reader cannot decode.
pub fn parse_catalog<R: Read>(reader: R, config: &CatalogConfig) -> Result<Catalog, CatalogError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = Columns::resolve(&headers, config);
    if columns.episode.is_none() {
        warn!(
            "Catalog has no '{}' column, every row will be skipped",
            config.episode_column
        );
    }

    let mut catalog = Catalog::new();
    for (line, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!("Skipping unreadable catalog row {}: {}", line + 1, e);
                continue;
            }
        };

        let number = match cell(&row, columns.episode).parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                debug!("Skipping catalog row {} without an episode number", line + 1);
                continue;
            }
        };

        catalog.insert(CatalogRecord {
            number,
            display_name: cell(&row, columns.name).to_string(),
            special_tags: cell(&row, columns.special).to_string(),
            cheater_flag: cell(&row, columns.cheater).to_string(),
            have_flag: is_marked(cell(&row, columns.have), &config.marker),
            bonus_content_flag: is_marked(cell(&row, columns.bonus_content), &config.marker),
            extra_flag: is_marked(cell(&row, columns.extra), &config.marker),
        });
    }

    Ok(catalog)
}
