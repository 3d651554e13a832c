//! Lookup configuration.
//!
//! Every setting has a default, so running the binary with no arguments and
//! no environment queries the public PubChem service with a 30 second request
//! timeout.
//!
//! # Configuration Sources
//!
//! - CLI arguments (`--base-url`, `--timeout-secs`, ...)
//! - Environment variables (`PUBCHEM_BASE_URL`, ...)
//! - Default values
//!
//! # Example
//!
//! ```no_run
//! use pubchem_flashpoint::LookupConfig;
//!
//! let config = LookupConfig::from_args();
//! config.validate().expect("Invalid configuration");
//!
//! println!("Querying {}", config.base_url);
//! ```

use crate::error::ConfigError;
use crate::output::OutputStyle;
use clap::Parser;
use std::time::Duration;
use url::Url;

/// Public PUG REST root.
pub const DEFAULT_BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest";

/// User agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("pubchem-flashpoint/", env!("CARGO_PKG_VERSION"));

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Lookup configuration loaded from CLI args and environment variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pubchem-flashpoint",
    about = "Read CAS numbers from stdin and print their PubChem flash points as JSON",
    version
)]
pub struct LookupConfig {
    /// PUG REST base URL
    #[arg(long, env = "PUBCHEM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds; an elapsed timeout counts as a failed lookup
    #[arg(long, env = "PUBCHEM_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[arg(
        long,
        env = "PUBCHEM_CONNECT_TIMEOUT_SECS",
        default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS
    )]
    pub connect_timeout_secs: u64,

    /// User-Agent header sent to PubChem
    #[arg(long, env = "PUBCHEM_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pretty: false,
        }
    }
}

impl LookupConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Configuration pointing at a different base URL, other settings default.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub const fn output_style(&self) -> OutputStyle {
        if self.pretty {
            OutputStyle::Pretty
        } else {
            OutputStyle::Line
        }
    }

    /// Parse the base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the URL does not parse, is not
    /// http(s), or cannot carry path segments.
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };

        let url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https".to_string()));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }

        Ok(url)
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - the base URL is not a usable http(s) URL
    /// - either timeout is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsed_base_url()?;

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                name: "timeout_secs",
            });
        }
        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                name: "connect_timeout_secs",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LookupConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.output_style(), OutputStyle::Line);
        assert!(config.user_agent.starts_with("pubchem-flashpoint/"));
    }

    #[test]
    fn test_parse_overrides() {
        let config = LookupConfig::try_parse_from([
            "pubchem-flashpoint",
            "--base-url",
            "http://127.0.0.1:8080/rest",
            "--timeout-secs",
            "5",
            "--pretty",
        ])
        .unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:8080/rest");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.output_style(), OutputStyle::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unparseable_base_url() {
        let config = LookupConfig::with_base_url("not a url");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let config = LookupConfig::with_base_url("ftp://pubchem.example.com/rest");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scheme must be http or https"));
    }

    #[test]
    fn test_rejects_zero_timeouts() {
        let mut config = LookupConfig {
            timeout_secs: 0,
            ..LookupConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeout {
                name: "timeout_secs"
            })
        ));

        config.timeout_secs = 30;
        config.connect_timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeout {
                name: "connect_timeout_secs"
            })
        ));
    }
}
