use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Result-set size applied when a request asks for truncation.
    #[serde(default = "default_result_cap")]
    pub result_cap: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            result_cap: default_result_cap(),
        }
    }
}

fn default_result_cap() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    /// Points granted when a weighted locus is a full category match.
    #[serde(default = "default_full_match_units")]
    pub full_match_units: f64,
    /// Points granted when the categories are merely compatible.
    #[serde(default = "default_compatible_units")]
    pub compatible_units: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            full_match_units: default_full_match_units(),
            compatible_units: default_compatible_units(),
        }
    }
}

fn default_full_match_units() -> f64 {
    5.0
}
fn default_compatible_units() -> f64 {
    2.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CROSSMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CROSSMATCH_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CROSSMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CROSSMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_units() {
        let scoring = ScoringSettings::default();
        assert_eq!(scoring.full_match_units, 5.0);
        assert_eq!(scoring.compatible_units, 2.0);
    }

    #[test]
    fn test_default_result_cap() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.result_cap, 50);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_default_server() {
        let server = ServerSettings::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
        assert_eq!(server.workers, None);
    }
}
