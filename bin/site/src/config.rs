//! Host configuration.
//!
//! Loaded via the `config` crate from environment variables. Leptos'
//! own options (site address, package directory) still come from
//! `[package.metadata.leptos]`.

use serde::Deserialize;

/// Settings for the process that serves the site.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Directory holding the compiled site (`pkg/` lives underneath).
    #[serde(default = "default_site_root")]
    pub site_root: String,
}

fn default_log_filter() -> String {
    "info,tower_http=debug".to_string()
}

fn default_site_root() -> String {
    "target/site".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            site_root: default_site_root(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the directory served under `/pkg`.
    #[must_use]
    pub fn pkg_dir(&self) -> String {
        format!("{}/pkg", self.site_root.trim_end_matches('/'))
    }
}
