//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated before the server
//! starts, and injected as an explicit object. The backend client never
//! reads the environment ad hoc, so tests can run against fake origins.
//!
//! ## Variables
//!
//! - `BACKEND_URL` - Origin of the backend link store (default: `http://localhost:8000`)
//! - `PUBLIC_URL` - Origin end users browse short links from (default: `http://localhost:3002`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3002`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! The create-link rewrite depends on both origins being correct: with a
//! misconfigured `PUBLIC_URL`, generated short links point at an origin end
//! users cannot reach.

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the backend link store, consumed server-side only.
    pub backend_url: String,
    /// Public-facing origin that shortened links are rooted at.
    pub public_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let backend_url =
            env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        let public_url =
            env::var("PUBLIC_URL").unwrap_or_else(|_| "http://localhost:3002".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3002".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            backend_url,
            public_url,
            listen_addr,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either origin is not an `http://` or `https://` URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("BACKEND_URL", &self.backend_url),
            ("PUBLIC_URL", &self.public_url),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                anyhow::bail!(
                    "{} must start with 'http://' or 'https://', got '{}'",
                    name,
                    value
                );
            }
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Backend origin: {}", self.backend_url);
        tracing::info!("  Public origin: {}", self.public_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            backend_url: "http://localhost:8000".to_string(),
            public_url: "http://localhost:3002".to_string(),
            listen_addr: "0.0.0.0:3002".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.backend_url = "localhost:8000".to_string();
        assert!(config.validate().is_err());
        config.backend_url = "https://api.sho.rt".to_string();
        assert!(config.validate().is_ok());

        config.public_url = "ftp://sho.rt".to_string();
        assert!(config.validate().is_err());
        config.public_url = "https://sho.rt".to_string();

        config.log_format = "pretty".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3002".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("BACKEND_URL");
            env::remove_var("PUBLIC_URL");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env();

        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.public_url, "http://localhost:3002");
        assert_eq!(config.listen_addr, "0.0.0.0:3002");
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_from_env_reads_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BACKEND_URL", "https://store.internal:8443");
            env::set_var("PUBLIC_URL", "https://sho.rt");
        }

        let config = Config::from_env();

        assert_eq!(config.backend_url, "https://store.internal:8443");
        assert_eq!(config.public_url, "https://sho.rt");

        // Cleanup
        unsafe {
            env::remove_var("BACKEND_URL");
            env::remove_var("PUBLIC_URL");
        }
    }
}
