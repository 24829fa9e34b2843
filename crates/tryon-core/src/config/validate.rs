//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be > 0".into(),
            ));
        }
        if self.server.cors.allow_credentials && self.server.cors.allow_any_origin {
            return Err(ConfigError::ValidationError(
                "server.cors.allow_credentials requires an explicit origins list".into(),
            ));
        }
        if self.inventory.extensions.is_empty() {
            return Err(ConfigError::ValidationError(
                "inventory.extensions must not be empty".into(),
            ));
        }
        if let Some(ext) = self.inventory.extensions.iter().find(|e| !e.starts_with('.')) {
            return Err(ConfigError::ValidationError(format!(
                "inventory.extensions entries must start with '.', got '{ext}'"
            )));
        }
        if self.limits.max_upload_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_upload_mb must be > 0".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        if self.limits.decode_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.decode_timeout_ms must be > 0".into(),
            ));
        }
        if self.limits.generate_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.generate_timeout_ms must be > 0".into(),
            ));
        }
        if self.limits.describe_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.describe_timeout_ms must be > 0".into(),
            ));
        }
        if self.describe.languages.is_empty() {
            return Err(ConfigError::ValidationError(
                "describe.languages must not be empty".into(),
            ));
        }
        let default_language = self.describe.default_language.trim();
        if !self
            .describe
            .languages
            .iter()
            .any(|l| l.trim().eq_ignore_ascii_case(default_language))
        {
            return Err(ConfigError::ValidationError(format!(
                "describe.default_language '{}' is not in describe.languages",
                self.describe.default_language
            )));
        }
        if self.describe.max_image_edge == 0 {
            return Err(ConfigError::ValidationError(
                "describe.max_image_edge must be > 0".into(),
            ));
        }
        if self.describe.jpeg_quality == 0 || self.describe.jpeg_quality > 100 {
            return Err(ConfigError::ValidationError(
                "describe.jpeg_quality must be between 1 and 100".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_validate_rejects_credentials_with_wildcard_origin() {
        let mut config = Config::default();
        config.server.cors.allow_credentials = true;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("allow_credentials"));

        config.server.cors.allow_any_origin = false;
        config.server.cors.origins = vec!["http://localhost:8501".into()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_extension_without_dot() {
        let mut config = Config::default();
        config.inventory.extensions = vec!["jpg".into()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'jpg'"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.limits.generate_timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("generate_timeout_ms"));
    }

    #[test]
    fn test_validate_rejects_unknown_default_language() {
        let mut config = Config::default();
        config.describe.default_language = "fr".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_language"));
    }

    #[test]
    fn test_validate_compares_languages_ignoring_case() {
        let mut config = Config::default();
        config.describe.languages = vec!["EN".into()];
        config.describe.default_language = "en".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_invalid_jpeg_quality() {
        let mut config = Config::default();
        config.describe.jpeg_quality = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("jpeg_quality"));

        config.describe.jpeg_quality = 101;
        assert!(config.validate().is_err());
    }
}
