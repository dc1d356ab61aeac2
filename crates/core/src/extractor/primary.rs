//! Extractor for the primary collection: `E<digits><free text>.<ext>`.

use regex_lite::Regex;

use super::types::{ExtractorError, ParsedName};
use super::{extension_alternation, Extractor};
use crate::registry::Collection;

/// Parses `E12 Some Tag.mp4` style names.
#[derive(Debug, Clone)]
pub struct PrimaryExtractor {
    pattern: Regex,
}

impl PrimaryExtractor {
    /// Builds the extractor for the given accepted extensions.
    pub fn new(extensions: &[String]) -> Result<Self, ExtractorError> {
        let pattern = format!(
            r"(?i)^E(?P<episode>\d+)\s*(?P<tag>.*?)\.(?P<ext>{})$",
            extension_alternation(extensions)
        );
        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }
}

impl Extractor for PrimaryExtractor {
    fn collection(&self) -> Collection {
        Collection::Primary
    }

    fn extract(&self, file_name: &str) -> Option<ParsedName> {
        let caps = self.pattern.captures(file_name)?;
        let episode_number = caps.name("episode")?.as_str().parse().ok()?;

        Some(ParsedName {
            episode_number,
            extension: caps.name("ext")?.as_str().to_lowercase(),
            free_tag: caps
                .name("tag")
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            ..Default::default()
        })
    }
}
