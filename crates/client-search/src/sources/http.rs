//! HTTP record source

use std::time::Duration;

use client_search_core::source::records_from_str;
use client_search_core::{RawRecord, RecordSource, SourceError, SourceResult};
use tracing::debug;

use crate::config::CLIENTS_PATH;
use crate::error::Result;

const USER_AGENT: &str = concat!("client-search/", env!("CARGO_PKG_VERSION"));

/// Fetches the client list from a JSON API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::blocking::Client,
    url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            url: format!("{}{}", base_url.trim_end_matches('/'), CLIENTS_PATH),
        })
    }

    /// Full URL requested on each fetch.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RecordSource for HttpSource {
    fn fetch_records(&self) -> SourceResult<Vec<RawRecord>> {
        debug!(url = %self.url, "fetching clients");

        let response = self
            .http
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::from_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ));
        }

        let body = response.text().map_err(classify)?;
        records_from_str(&body).map_err(|e| match e {
            SourceError::InvalidJson(detail) => SourceError::InvalidData(detail),
            other => other,
        })
    }

    fn describe(&self) -> String {
        format!("http {}", self.url)
    }
}

fn classify(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        SourceError::Timeout
    } else if err.is_connect() {
        SourceError::ConnectionRefused
    } else if err.is_decode() || err.is_body() {
        SourceError::InvalidData(err.to_string())
    } else {
        SourceError::Backend(err.to_string())
    }
}
