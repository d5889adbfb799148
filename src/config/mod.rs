//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load configuration from defaults, an optional `service-portal` file in the
/// working directory, and `PORTAL_*` environment variables.
pub fn load_config() -> Result<Config> {
    load_config_from("service-portal")
}

fn load_config_from(file_stem: &str) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("host", default_host())?
        .set_default("port", i64::from(default_port()))?
        // Load from config file if it exists
        .add_source(::config::File::with_name(file_stem).required(false))
        // Override with environment variables (PORTAL_PORT, PORTAL_HOST)
        .add_source(
            ::config::Environment::with_prefix("PORTAL")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = load_config_from("does-not-exist/service-portal").unwrap();
        if std::env::var("PORTAL_PORT").is_err() {
            assert_eq!(config.port, 8080);
        }
        if std::env::var("PORTAL_HOST").is_err() {
            assert_eq!(config.host, "0.0.0.0");
        }
    }

    #[test]
    fn test_bind_addr() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }
}
