//! Record source configuration
//!
//! Precedence: command-line flag, then environment variable, then `.env`,
//! then the defaults below. Flag and environment handling is done by clap;
//! this module owns the defaults and turns the resolved values into a
//! `RecordSource`.

use std::path::PathBuf;
use std::time::Duration;

use client_search_core::RecordSource;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::sources::{FileSource, HttpSource};

/// Default client API base URL
pub const DEFAULT_API_URL: &str = "https://appassets02.shiftcare.com/manual";
/// Path of the client list below the base URL
pub const CLIENTS_PATH: &str = "/clients.json";
/// Default HTTP timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub const API_URL_ENV: &str = "CLIENT_SEARCH_API_URL";
pub const TIMEOUT_ENV: &str = "CLIENT_SEARCH_TIMEOUT_SECS";

/// Where records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// `GET <base_url>/clients.json`
    Http { base_url: String, timeout: Duration },
    /// Local JSON file
    File(PathBuf),
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Http {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SourceConfig {
    /// Pick the file source when a path is given, else the HTTP source.
    pub fn resolve(file: Option<PathBuf>, api_url: &str, timeout_secs: u64) -> Result<Self> {
        if let Some(path) = file {
            return Ok(SourceConfig::File(path));
        }

        let base_url = api_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "API URL must start with http:// or https://, got '{}'",
                api_url
            )));
        }
        if timeout_secs == 0 {
            return Err(Error::Config("timeout must be at least 1 second".to_string()));
        }

        Ok(SourceConfig::Http {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Build the configured source.
    pub fn build(&self) -> Result<Box<dyn RecordSource + Send>> {
        debug!(config = ?self, "building record source");
        match self {
            SourceConfig::Http { base_url, timeout } => {
                Ok(Box::new(HttpSource::new(base_url, *timeout)?))
            }
            SourceConfig::File(path) => Ok(Box::new(FileSource::new(path.clone()))),
        }
    }
}

/// Load `.env` from the working directory (or a parent) if present.
pub fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            warn!(error = %e, "ignoring unreadable .env file");
        }
    }
}
