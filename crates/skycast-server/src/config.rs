//! Server configuration from a TOML file, with defaults for every field

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    pub root: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub http: Option<HttpConfig>,
    pub database: Option<DatabaseConfig>,
    pub frontend: Option<FrontendConfig>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppConfig {
    /// Load configuration from SKYCAST_CONFIG path (TOML) if present,
    /// falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SKYCAST_CONFIG").unwrap_or_else(|_| "skycast.toml".to_string());
        let cfg = if Path::new(&path).exists() {
            let s = fs::read_to_string(&path)?;
            toml::from_str::<AppConfig>(&s)?
        } else {
            AppConfig::default()
        };
        Ok(cfg)
    }

    /// HTTP bind address (default 0.0.0.0:3000)
    pub fn http_bind(&self) -> String {
        self.http
            .as_ref()
            .and_then(|h| h.bind.clone())
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
    }

    /// SQLite database file path (default skycast.db)
    pub fn database_path(&self) -> String {
        self.database
            .as_ref()
            .and_then(|d| d.path.clone())
            .unwrap_or_else(|| "skycast.db".to_string())
    }

    /// Static frontend document root (default web)
    pub fn frontend_root(&self) -> String {
        self.frontend
            .as_ref()
            .and_then(|f| f.root.clone())
            .unwrap_or_else(|| "web".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.http_bind(), "0.0.0.0:3000");
        assert_eq!(cfg.database_path(), "skycast.db");
        assert_eq!(cfg.frontend_root(), "web");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [http]
            bind = "127.0.0.1:8080"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.http_bind(), "127.0.0.1:8080");
        assert_eq!(cfg.database_path(), "skycast.db");
    }
}
