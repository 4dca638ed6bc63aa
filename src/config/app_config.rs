use config::Config;
use error_stack::{report, ResultExt};
use serde::de::IntoDeserializer;
use serde::Deserialize;
use serde_path_to_error::{Deserializer as PathDeserializer, Segment, Track};
use thiserror::Error;

use super::{CampaignConfig, ServerConfig, SpreadsheetConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file '{0}'")]
    Unreadable(String),
    #[error("config file '{file}' is invalid at field '{field}'")]
    Invalid { file: String, field: String },
    #[error("campaign.target_amount must be positive, got {0}")]
    NonPositiveTarget(f64),
    #[error("sheets.fetch_timeout_secs must be positive")]
    ZeroTimeout,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub campaign: CampaignConfig,
    pub sheets: SpreadsheetConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Loads the file named by `CONFIG_PATH` (default `Config`, any
    /// extension the `config` crate understands).
    pub fn load() -> error_stack::Result<Self, ConfigError> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "Config".to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> error_stack::Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name(config_path))
            .build()
            .change_context_lazy(|| ConfigError::Unreadable(config_path.to_string()))?;

        // Deserialize through serde_path_to_error so a missing or
        // mistyped field is reported with its full path.
        let value = config
            .try_deserialize::<serde_json::Value>()
            .change_context_lazy(|| ConfigError::Unreadable(config_path.to_string()))?;
        let mut track = Track::new();
        let path_de = PathDeserializer::new(value.into_deserializer(), &mut track);
        let parsed = match AppConfig::deserialize(path_de) {
            Ok(parsed) => parsed,
            Err(e) => {
                let field = track
                    .path()
                    .iter()
                    .map(|seg| match seg {
                        Segment::Seq { index } => format!("[{}]", index),
                        Segment::Map { key } => format!(".{}", key),
                        Segment::Enum { variant } => format!("::{}", variant),
                        Segment::Unknown => String::from("<?>"),
                    })
                    .collect::<String>();
                return Err(report!(ConfigError::Invalid {
                    file: config_path.to_string(),
                    field: field.trim_start_matches('.').to_string(),
                })
                .attach_printable(e.to_string()));
            }
        };

        if parsed.campaign.target_amount <= 0.0 {
            return Err(report!(ConfigError::NonPositiveTarget(
                parsed.campaign.target_amount
            )));
        }
        if parsed.sheets.fetch_timeout_secs == 0 {
            return Err(report!(ConfigError::ZeroTimeout));
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_complete_config() {
        let file = write_config(
            r#"
            [campaign]
            target_amount = 1500.0

            [sheets]
            document_name = "iftar"
            credentials_file = "service_account.json"

            [server]
            "#,
        );
        let config = AppConfig::load_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.campaign.target_amount, 1500.0);
        assert_eq!(config.sheets.document_name.as_ref(), "iftar");
        assert_eq!(config.sheets.fetch_timeout_secs, 10); // default
        assert_eq!(config.server.port, 8080); // default
    }

    #[test]
    fn rejects_a_non_positive_target() {
        let file = write_config(
            r#"
            [campaign]
            target_amount = 0.0

            [sheets]
            document_name = "iftar"
            credentials_file = "service_account.json"

            [server]
            "#,
        );
        let err = AppConfig::load_from(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(
            err.current_context(),
            ConfigError::NonPositiveTarget(_)
        ));
    }

    #[test]
    fn rejects_a_zero_fetch_timeout() {
        let file = write_config(
            r#"
            [campaign]
            target_amount = 1500.0

            [sheets]
            document_name = "iftar"
            credentials_file = "service_account.json"
            fetch_timeout_secs = 0

            [server]
            "#,
        );
        let err = AppConfig::load_from(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err.current_context(), ConfigError::ZeroTimeout));
    }

    #[test]
    fn reports_the_missing_field_path() {
        let file = write_config(
            r#"
            [campaign]
            target_amount = 1500.0

            [sheets]
            credentials_file = "service_account.json"

            [server]
            "#,
        );
        let err = AppConfig::load_from(file.path().to_str().unwrap()).unwrap_err();
        match err.current_context() {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "sheets"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = AppConfig::load_from("/nonexistent/donation-config").unwrap_err();
        assert!(matches!(err.current_context(), ConfigError::Unreadable(_)));
    }
}
