//! Target naming and per-episode metadata.

mod types;

pub use types::*;

use std::path::PathBuf;

use crate::catalog::CatalogRecord;
use crate::config::NamingConfig;
use crate::registry::SourceFileRecord;

/// Characters that are not allowed in file names on common filesystems.
pub const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

const BONUS_LABEL: &str = "Deleted Scene";

/// Removes illegal filesystem characters and surrounding whitespace.
pub fn clean_component(text: &str) -> String {
    text.chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Builds target names and metadata from the naming configuration.
#[derive(Debug, Clone)]
pub struct Namer {
    studio: String,
    studio_token: String,
    separator: String,
    bonus_dir: String,
}

impl Namer {
    pub fn new(config: &NamingConfig) -> Self {
        let studio_token = clean_component(&config.studio)
            .split_whitespace()
            .collect::<String>();

        Self {
            studio: config.studio.trim().to_string(),
            studio_token,
            separator: config.separator.clone(),
            bonus_dir: clean_component(&config.bonus_dir),
        }
    }

    /// Names a regular episode: `Studio - E001 - Name (Tags).ext`.
    ///
    /// Without a catalog name the release age is used (`19 Years Old`).
    pub fn name(&self, catalog: &CatalogRecord, file: &SourceFileRecord) -> NamedTarget {
        let mut parts = vec![
            self.studio_token.clone(),
            format!("E{:03}", catalog.number),
        ];

        let display_name = if catalog.display_name.is_empty() {
            file.age_tag.map(|age| format!("{} Years Old", age))
        } else {
            Some(catalog.display_name.clone())
        };
        if let Some(display_name) = display_name {
            parts.push(clean_component(&display_name));
        }

        let mut target_name = self.join(parts);
        let tags = clean_component(&catalog.special_tags);
        if !tags.is_empty() {
            target_name.push_str(&format!(" ({})", tags));
        }
        target_name.push('.');
        target_name.push_str(&file.extension.to_lowercase());

        NamedTarget {
            relative_path: PathBuf::from(&target_name),
            target_name,
            metadata: self.metadata(catalog, file),
        }
    }

    /// Names a bonus item: `Bonus Dir/Studio - Deleted Scene 01 (18yo).ext`.
    pub fn name_bonus(&self, file: &SourceFileRecord) -> NamedTarget {
        let sequence = file.bonus_sequence.unwrap_or(file.episode_number);

        let mut target_name = self.join(vec![
            self.studio_token.clone(),
            format!("{} {:02}", BONUS_LABEL, sequence),
        ]);
        if let Some(age) = file.age_tag {
            target_name.push_str(&format!(" ({}yo)", age));
        }
        target_name.push('.');
        target_name.push_str(&file.extension.to_lowercase());

        let mut relative_path = PathBuf::new();
        if !self.bonus_dir.is_empty() {
            relative_path.push(&self.bonus_dir);
        }
        relative_path.push(&target_name);

        let metadata = EpisodeMetadata {
            episode: -i64::from(sequence),
            title: format!("{} - {} {}", self.studio, BONUS_LABEL, sequence),
            studio: self.studio.clone(),
            age: file.age_tag,
            ..EpisodeMetadata::for_file(file)
        };

        NamedTarget {
            target_name,
            relative_path,
            metadata,
        }
    }

    fn join(&self, parts: Vec<String>) -> String {
        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    fn metadata(&self, catalog: &CatalogRecord, file: &SourceFileRecord) -> EpisodeMetadata {
        let mut title = format!("{} - Episode {}", self.studio, catalog.number);
        let performer = (!catalog.display_name.is_empty()).then(|| catalog.display_name.clone());
        if let Some(name) = &performer {
            title.push_str(" - ");
            title.push_str(name);
        }

        EpisodeMetadata {
            episode: i64::from(catalog.number),
            title,
            studio: self.studio.clone(),
            performer,
            tags: catalog.tags().into_iter().map(str::to_string).collect(),
            cheater_type: (!catalog.cheater_flag.is_empty()).then(|| catalog.cheater_flag.clone()),
            age: file.age_tag,
            has_bonus_content: catalog.bonus_content_flag,
            has_extra_content: catalog.extra_flag,
            ..EpisodeMetadata::for_file(file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Collection;
    use crate::testing::fixtures::{bonus_file, primary_file, secondary_file};

    fn namer() -> Namer {
        Namer::new(&NamingConfig::default())
    }

    fn record(number: u32, name: &str, special: &str) -> CatalogRecord {
        CatalogRecord {
            display_name: name.to_string(),
            special_tags: special.to_string(),
            ..CatalogRecord::synthesized(number)
        }
    }

    #[test]
    fn test_name_with_display_name() {
        let named = namer().name(&record(1, "Alice", ""), &primary_file(1, "mp4", 10));
        assert_eq!(named.target_name, "Studio - E001 - Alice.mp4");
        assert_eq!(named.relative_path, PathBuf::from("Studio - E001 - Alice.mp4"));
    }

    #[test]
    fn test_name_without_display_name() {
        let named = namer().name(&CatalogRecord::synthesized(2), &primary_file(2, "wmv", 10));
        assert_eq!(named.target_name, "Studio - E002.wmv");
    }

    #[test]
    fn test_name_falls_back_to_age() {
        let mut file = secondary_file(157, "wmv", 10);
        file.age_tag = Some(21);
        let named = namer().name(&CatalogRecord::synthesized(157), &file);
        assert_eq!(named.target_name, "Studio - E157 - 21 Years Old.wmv");
    }

    #[test]
    fn test_name_with_special_tag() {
        let named = namer().name(&record(3, "Bea", "Anal"), &primary_file(3, "mp4", 10));
        assert_eq!(named.target_name, "Studio - E003 - Bea (Anal).mp4");

        let named = namer().name(&record(4, "", "3-Some"), &primary_file(4, "mp4", 10));
        assert_eq!(named.target_name, "Studio - E004 (3-Some).mp4");
    }

    #[test]
    fn test_name_strips_illegal_characters() {
        let named = namer().name(
            &record(5, "A<l>i:c\"e/\\|?*", "What?/Why*"),
            &primary_file(5, "MP4", 10),
        );
        assert_eq!(named.target_name, "Studio - E005 - Alice (WhatWhy).mp4");
        assert!(!named.target_name.contains(ILLEGAL_CHARS));
    }

    #[test]
    fn test_name_skips_name_made_only_of_illegal_characters() {
        let named = namer().name(&record(6, "???", ""), &primary_file(6, "mp4", 10));
        assert_eq!(named.target_name, "Studio - E006.mp4");
    }

    #[test]
    fn test_studio_token_drops_whitespace() {
        let config = NamingConfig {
            studio: "Night Owl: Films".to_string(),
            ..NamingConfig::default()
        };
        let named = Namer::new(&config).name(&record(1, "", ""), &primary_file(1, "mp4", 1));
        assert_eq!(named.target_name, "NightOwlFilms - E001.mp4");
        assert_eq!(named.metadata.studio, "Night Owl: Films");
    }

    #[test]
    fn test_naming_is_idempotent() {
        let catalog = record(9, "Cleo", "Anal, Creampie");
        let file = primary_file(9, "mp4", 42);
        let first = namer().name(&catalog, &file);
        let second = namer().name(&catalog, &file);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.metadata).unwrap(),
            serde_json::to_string(&second.metadata).unwrap()
        );
    }

    #[test]
    fn test_metadata_full() {
        let catalog = CatalogRecord {
            display_name: "Alice".to_string(),
            special_tags: "Anal, 3-Some".to_string(),
            cheater_flag: "bf".to_string(),
            have_flag: true,
            bonus_content_flag: true,
            extra_flag: false,
            ..CatalogRecord::synthesized(1)
        };
        let mut file = secondary_file(1, "mp4", 300);
        file.age_tag = Some(19);
        file.quality_tag = "720p".to_string();

        let meta = namer().name(&catalog, &file).metadata;
        assert_eq!(meta.episode, 1);
        assert_eq!(meta.title, "Studio - Episode 1 - Alice");
        assert_eq!(meta.performer.as_deref(), Some("Alice"));
        assert_eq!(meta.tags, vec!["Anal", "3-Some"]);
        assert_eq!(meta.cheater_type.as_deref(), Some("bf"));
        assert_eq!(meta.age, Some(19));
        assert!(meta.has_bonus_content);
        assert!(!meta.has_extra_content);
        assert_eq!(meta.source, Collection::Secondary);
        assert_eq!(meta.format, "MP4");
        assert_eq!(meta.quality.as_deref(), Some("720p"));
        assert_eq!(meta.size_bytes, 300);
    }

    #[test]
    fn test_metadata_omits_absent_fields() {
        let meta = namer()
            .name(&CatalogRecord::synthesized(2), &primary_file(2, "wmv", 5))
            .metadata;
        let json = serde_json::to_value(&meta).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object["title"], "Studio - Episode 2");
        for absent in ["performer", "tags", "cheater_type", "age", "quality"] {
            assert!(!object.contains_key(absent), "{} should be omitted", absent);
        }
        assert_eq!(object["has_bonus_content"], false);
        assert_eq!(object["source"], "primary");
        assert_eq!(object["source_file"], "E2.wmv");
    }

    #[test]
    fn test_bonus_name() {
        let named = namer().name_bonus(&bonus_file(1, 18));
        assert_eq!(named.target_name, "Studio - Deleted Scene 01 (18yo).mp4");
        assert_eq!(
            named.relative_path,
            PathBuf::from("Deleted Scenes").join("Studio - Deleted Scene 01 (18yo).mp4")
        );
        assert_eq!(named.metadata.episode, -1);
        assert_eq!(named.metadata.title, "Studio - Deleted Scene 1");
        assert_eq!(named.metadata.age, Some(18));
    }

    #[test]
    fn test_bonus_name_without_age() {
        let mut file = bonus_file(12, 18);
        file.age_tag = None;
        let named = namer().name_bonus(&file);
        assert_eq!(named.target_name, "Studio - Deleted Scene 12.mp4");
    }
}
