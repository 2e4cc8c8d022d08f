use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative config file (without `.toml`)
const CONFIG_PATH_VAR: &str = "AXIS_PDF_CONFIG";

/// Prefix of environment overrides, e.g. `AXIS_PDF__SERVER__PORT=9000`
const ENV_PREFIX: &str = "AXIS_PDF";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_size_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_request_size_mb: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding the page backgrounds `1.jpeg`, `2.jpeg`, `3.jpeg`
    pub dir: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("static/axisbank"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is not set
    pub filter: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Try config file locations in order of preference
        let config_candidates = [
            // 1. Current directory (when running from crates/server/)
            "config/default",
            // 2. Workspace root
            "crates/server/config/default",
        ];

        let mut builder = config::Config::builder();
        let mut file_found = false;

        // Check for environment variable override first
        if let Ok(config_path) = std::env::var(CONFIG_PATH_VAR) {
            if !config_path.is_empty() && toml_exists(&config_path) {
                builder = builder.add_source(config::File::with_name(&config_path));
                file_found = true;
            }
        }

        if !file_found {
            if let Some(path) = config_candidates.iter().find(|p| toml_exists(p)) {
                builder = builder.add_source(config::File::with_name(path));
            }
        }

        // Always layer environment variables on top
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Request body cap in bytes
    pub fn max_request_bytes(&self) -> usize {
        self.server.max_request_size_mb * 1024 * 1024
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn toml_exists(path: &str) -> bool {
    Path::new(&format!("{}.toml", path)).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.max_request_bytes(), 2 * 1024 * 1024);
        assert_eq!(config.assets.dir, PathBuf::from("static/axisbank"));
        assert!(config.logging.filter.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[server]\nport = 9100\n\n[assets]\ndir = \"/srv/axis\"\n").unwrap();

        let config: Config = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.max_request_size_mb, 2);
        assert_eq!(config.assets.dir, PathBuf::from("/srv/axis"));
    }

    #[test]
    fn test_empty_sources_give_defaults() {
        let config: Config = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.server.port, 8000);
    }
}
