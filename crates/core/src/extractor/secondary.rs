//! Extractor for the secondary collection's dotted release names.
//!
//! Two forms are recognized, tried in order:
//!
//! - bonus: `<Prefix>.E01.Deleted.Scenes.18.Years.Old.XXX.720p.MP4-TAG.mp4`
//! - regular: `<Prefix>.E157.21.Years.Old.XXX.[READ.NFO.][INTERNAL.]720p.WMV-TAG.wmv`
//!
//! The regular form also accepts an `.And.<n>` age range, which is dropped.

use regex_lite::{Captures, Regex};

use super::types::{ExtractorError, ParsedName};
use super::{extension_alternation, Extractor};
use crate::config::SourcesConfig;
use crate::registry::Collection;

const ANY_TOKEN: &str = "[A-Za-z0-9]+";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Bonus,
    Regular,
}

#[derive(Debug, Clone)]
struct FormPattern {
    form: Form,
    regex: Regex,
}

impl FormPattern {
    fn parse(&self, file_name: &str) -> Option<ParsedName> {
        let caps = self.regex.captures(file_name)?;
        let episode_number: u32 = number(&caps, "episode")?;
        let age_tag = number(&caps, "age");
        let quality_tag = caps
            .name("quality")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let extension = caps.name("ext")?.as_str().to_lowercase();

        let parsed = match self.form {
            // Bonus ids are the negated sequence, so sequence 0 would share id 0 with E000.
            Form::Bonus if episode_number == 0 => return None,
            Form::Bonus => ParsedName {
                episode_number,
                extension,
                is_bonus: true,
                bonus_sequence: Some(episode_number),
                age_tag,
                quality_tag,
                ..Default::default()
            },
            Form::Regular => ParsedName {
                episode_number,
                extension,
                is_restricted: caps.name("internal").is_some(),
                age_tag,
                quality_tag,
                ..Default::default()
            },
        };
        Some(parsed)
    }
}

fn number(caps: &Captures<'_>, group: &str) -> Option<u32> {
    caps.name(group)?.as_str().parse().ok()
}

/// Parses the secondary collection's release names.
#[derive(Debug, Clone)]
pub struct SecondaryExtractor {
    patterns: Vec<FormPattern>,
}

impl SecondaryExtractor {
    /// Builds the ordered pattern list from the sources configuration.
    pub fn new(config: &SourcesConfig) -> Result<Self, ExtractorError> {
        let prefix = config
            .secondary_prefix
            .as_deref()
            .map(regex_lite::escape)
            .unwrap_or_else(|| ANY_TOKEN.to_string());
        let release = config
            .release_tag
            .as_deref()
            .map(regex_lite::escape)
            .unwrap_or_else(|| ANY_TOKEN.to_string());
        let marker = regex_lite::escape(&config.bonus_marker);
        let exts = extension_alternation(&config.extensions);

        let bonus = format!(
            r"(?i)^{prefix}\.E(?P<episode>\d+)\.{marker}\.(?P<age>\d+)\.Years?\.Old\.XXX\.(?P<quality>\d+p)\.(?:{exts})-{release}\.(?P<ext>{exts})$"
        );
        let regular = format!(
            r"(?i)^{prefix}\.E(?P<episode>\d+)\.(?P<age>\d+)(?:\.And\.\d+)?\.Years?\.Old(?:\.And\.\d+)?\.XXX\.(?:READ\.NFO\.)?(?P<internal>INTERNAL\.)?(?P<quality>\d+p)\.(?:{exts})-{release}\.(?P<ext>{exts})$"
        );

        Ok(Self {
            patterns: vec![
                FormPattern {
                    form: Form::Bonus,
                    regex: Regex::new(&bonus)?,
                },
                FormPattern {
                    form: Form::Regular,
                    regex: Regex::new(&regular)?,
                },
            ],
        })
    }
}

impl Extractor for SecondaryExtractor {
    fn collection(&self) -> Collection {
        Collection::Secondary
    }

    fn extract(&self, file_name: &str) -> Option<ParsedName> {
        self.patterns.iter().find_map(|p| p.parse(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SecondaryExtractor {
        SecondaryExtractor::new(&SourcesConfig::default()).unwrap()
    }

    #[test]
    fn test_regular_form() {
        let parsed = extractor()
            .extract("Show.E157.21.Years.Old.XXX.720p.WMV-GRP.wmv")
            .unwrap();
        assert_eq!(parsed.episode_number, 157);
        assert_eq!(parsed.age_tag, Some(21));
        assert_eq!(parsed.quality_tag, "720p");
        assert_eq!(parsed.extension, "wmv");
        assert!(!parsed.is_bonus);
        assert!(!parsed.is_restricted);
        assert!(parsed.bonus_sequence.is_none());
    }

    #[test]
    fn test_internal_marks_restricted() {
        let parsed = extractor()
            .extract("Show.E310.19.Years.Old.XXX.INTERNAL.720p.MP4-GRP.mp4")
            .unwrap();
        assert_eq!(parsed.episode_number, 310);
        assert!(parsed.is_restricted);
        assert_eq!(parsed.extension, "mp4");
    }

    #[test]
    fn test_read_nfo_is_discarded() {
        let parsed = extractor()
            .extract("Show.E335.19.Years.Old.XXX.READ.NFO.720p.MP4-GRP.mp4")
            .unwrap();
        assert_eq!(parsed.episode_number, 335);
        assert_eq!(parsed.age_tag, Some(19));
        assert!(!parsed.is_restricted);
    }

    #[test]
    fn test_read_nfo_with_internal() {
        let parsed = extractor()
            .extract("Show.E336.20.Years.Old.XXX.READ.NFO.INTERNAL.720p.MP4-GRP.mp4")
            .unwrap();
        assert!(parsed.is_restricted);
    }

    #[test]
    fn test_age_range_is_discarded() {
        let ex = extractor();
        let before = ex
            .extract("Show.E200.19.And.20.Years.Old.XXX.720p.WMV-GRP.wmv")
            .unwrap();
        assert_eq!(before.episode_number, 200);
        assert_eq!(before.age_tag, Some(19));

        let after = ex
            .extract("Show.E201.22.Years.Old.And.23.XXX.720p.WMV-GRP.wmv")
            .unwrap();
        assert_eq!(after.episode_number, 201);
        assert_eq!(after.age_tag, Some(22));
    }

    #[test]
    fn test_singular_year() {
        let parsed = extractor()
            .extract("Show.E170.1.Year.Old.XXX.720p.WMV-GRP.wmv")
            .unwrap();
        assert_eq!(parsed.age_tag, Some(1));
    }

    #[test]
    fn test_bonus_form() {
        let parsed = extractor()
            .extract("Show.E01.Deleted.Scenes.18.Years.Old.XXX.720p.MP4-GRP.mp4")
            .unwrap();
        assert!(parsed.is_bonus);
        assert_eq!(parsed.episode_number, 1);
        assert_eq!(parsed.bonus_sequence, Some(1));
        assert_eq!(parsed.age_tag, Some(18));
        assert_eq!(parsed.quality_tag, "720p");
        assert!(!parsed.is_restricted);
    }

    #[test]
    fn test_bonus_sequence_matches_embedded_index() {
        let ex = extractor();
        for n in [1u32, 2, 9, 10, 42] {
            let name = format!("Show.E{:02}.Deleted.Scenes.19.Years.Old.XXX.720p.WMV-GRP.wmv", n);
            let parsed = ex.extract(&name).unwrap();
            assert!(parsed.is_bonus);
            assert_eq!(parsed.bonus_sequence, Some(n));
        }
    }

    #[test]
    fn test_bonus_sequence_zero_is_rejected() {
        let ex = extractor();
        assert!(ex
            .extract("Show.E00.Deleted.Scenes.18.Years.Old.XXX.720p.MP4-GRP.mp4")
            .is_none());
        assert!(ex
            .extract("Show.E0.Deleted.Scenes.18.Years.Old.XXX.720p.MP4-GRP.mp4")
            .is_none());
    }

    #[test]
    fn test_case_insensitive() {
        let parsed = extractor()
            .extract("show.e12.20.years.old.xxx.internal.720P.mp4-grp.MP4")
            .unwrap();
        assert_eq!(parsed.episode_number, 12);
        assert!(parsed.is_restricted);
        assert_eq!(parsed.extension, "mp4");
    }

    #[test]
    fn test_configured_prefix_and_release() {
        let config = SourcesConfig {
            secondary_prefix: Some("Night.Owl".to_string()),
            release_tag: Some("ABC".to_string()),
            ..SourcesConfig::default()
        };
        let ex = SecondaryExtractor::new(&config).unwrap();

        assert!(ex
            .extract("Night.Owl.E5.20.Years.Old.XXX.720p.MP4-ABC.mp4")
            .is_some());
        assert!(ex
            .extract("Other.E5.20.Years.Old.XXX.720p.MP4-ABC.mp4")
            .is_none());
        assert!(ex
            .extract("Night.Owl.E5.20.Years.Old.XXX.720p.MP4-XYZ.mp4")
            .is_none());
    }

    #[test]
    fn test_rejects_unrecognized_names() {
        let ex = extractor();
        assert!(ex.extract("E12 Anal.mp4").is_none());
        assert!(ex.extract("Show.E12.XXX.720p.MP4-GRP.mp4").is_none());
        assert!(ex.extract("Show.E12.20.Years.Old.XXX.720p.MP4-GRP.nfo").is_none());
        assert!(ex.extract("Show.E12.20.Years.Old.XXX.720p.MP4-GRP.mp4.part").is_none());
    }
}
