use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Studio and separator are not empty
/// - At least one container extension is accepted
/// - The preferred extension is one of the accepted ones
/// - Gap preview limit is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.naming.studio.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "naming.studio cannot be empty".to_string(),
        ));
    }

    if config.naming.separator.is_empty() {
        return Err(ConfigError::ValidationError(
            "naming.separator cannot be empty".to_string(),
        ));
    }

    if config.sources.extensions.is_empty() {
        return Err(ConfigError::ValidationError(
            "sources.extensions cannot be empty".to_string(),
        ));
    }

    let preferred = &config.naming.preferred_extension;
    if !config
        .sources
        .extensions
        .iter()
        .any(|ext| ext.eq_ignore_ascii_case(preferred))
    {
        return Err(ConfigError::ValidationError(format!(
            "naming.preferred_extension '{}' is not in sources.extensions",
            preferred
        )));
    }

    if config.output.gap_preview_limit == 0 {
        return Err(ConfigError::ValidationError(
            "output.gap_preview_limit cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_studio_fails() {
        let mut config = Config::default();
        config.naming.studio = "  ".to_string();
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_unknown_preferred_extension_fails() {
        let mut config = Config::default();
        config.naming.preferred_extension = "mkv".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("mkv"));
    }

    #[test]
    fn test_validate_preferred_extension_case_insensitive() {
        let mut config = Config::default();
        config.naming.preferred_extension = "MP4".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_preview_limit_fails() {
        let mut config = Config::default();
        config.output.gap_preview_limit = 0;
        assert!(validate_config(&config).is_err());
    }
}
