use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ApiError, Result};

pub const SIGNING_SECRET_ENV: &str = "TOKEN_SIGNING_SECRET";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub http: HttpConfig,
    pub auth: AuthConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthConfig {
    pub token_ttl_hours: u64,
    /// Value placed in the `name` claim of issued tokens.
    pub subject: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AssetsConfig {
    pub views_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_hours: 24,
            subject: "catalog-admin".to_string(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            views_dir: PathBuf::from("server/views"),
            static_dir: PathBuf::from("server/static"),
        }
    }
}

impl ServerConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ApiError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ServerConfig = toml::from_str(content)
            .map_err(|e| ApiError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.auth.token_ttl_hours == 0 {
            return Err(ApiError::Config(
                "auth.token_ttl_hours must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Loads the file when present, otherwise starts from defaults. Environment
    /// overrides are applied on top in both cases.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            log::warn!(
                "Config file '{}' not found. Falling back to default server config.",
                path.display()
            );
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(host) = env_var("SERVER_HOST") {
            self.http.host = host;
        }
        if let Some(port) = env_var("SERVER_PORT") {
            self.http.port = parse_env("SERVER_PORT", &port)?;
        }
        if let Some(hours) = env_var("TOKEN_TTL_HOURS") {
            self.auth.token_ttl_hours = parse_env("TOKEN_TTL_HOURS", &hours)?;
        }
        if let Some(subject) = env_var("TOKEN_SUBJECT") {
            self.auth.subject = subject;
        }
        if let Some(dir) = env_var("VIEWS_DIR") {
            self.assets.views_dir = PathBuf::from(dir);
        }
        if let Some(dir) = env_var("STATIC_DIR") {
            self.assets.static_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.auth.token_ttl_hours.saturating_mul(3600))
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.http.host.clone(), self.http.port)
    }
}

/// Reads the token signing secret. It is kept out of [`ServerConfig`] so it
/// never ends up in a config file or a debug print.
pub fn signing_secret_from_env() -> Result<Vec<u8>> {
    env_var(SIGNING_SECRET_ENV)
        .map(String::into_bytes)
        .ok_or_else(|| ApiError::Config(format!("{SIGNING_SECRET_ENV} is not set")))
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::Config(format!("Invalid value for {}: '{}'", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_config() {
        let toml_content = r#"
[http]
host = "127.0.0.1"
port = 8081

[auth]
token_ttl_hours = 2
subject = "ops"

[assets]
views_dir = "/srv/views"
static_dir = "/srv/static"
        "#;

        let config = ServerConfig::from_toml(toml_content).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8081);
        assert_eq!(config.auth.subject, "ops");
        assert_eq!(config.token_ttl(), Duration::from_secs(7200));
        assert_eq!(config.assets.views_dir, PathBuf::from("/srv/views"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = ServerConfig::from_toml("[http]\nport = 9000\n").unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.auth, AuthConfig::default());
        assert_eq!(config.assets, AssetsConfig::default());
    }

    #[test]
    fn test_default_ttl_is_one_day() {
        assert_eq!(
            ServerConfig::default().token_ttl(),
            Duration::from_secs(24 * 60 * 60)
        );
    }

    #[test]
    fn test_zero_ttl_is_rejected() {
        let result = ServerConfig::from_toml("[auth]\ntoken_ttl_hours = 0\n");
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = ServerConfig::from_toml("[http]\nport = \"not a number\"\n");
        assert!(matches!(result, Err(ApiError::Config(_))));
    }
}
