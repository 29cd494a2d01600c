//! `client-search` command line

use std::io::Write;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use client_search_core::{ClientSearch, SearchOptions, DEFAULT_FIELD};
use tracing::{debug, info};

use crate::config::{SourceConfig, API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, TIMEOUT_ENV};
use crate::error::{Error, Result};
use crate::output::{self, OutputFormat};
use crate::server::{ApiServer, SourceFactory, DEFAULT_HOST, DEFAULT_PORT};

#[derive(Parser, Debug)]
#[command(name = "client-search")]
#[command(about = "Search client records and find duplicate emails")]
#[command(version)]
pub struct Cli {
    /// Base URL of the client API
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// HTTP timeout in seconds
    #[arg(long, global = true, env = TIMEOUT_ENV, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search clients by a field
    Search {
        /// Text to search for
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Field to search (full_name, name, email or any record key)
        #[arg(short, long, default_value = DEFAULT_FIELD)]
        field: String,

        /// Output format (table, json, csv)
        #[arg(long, default_value = "table")]
        format: String,

        /// Read clients from a JSON file instead of the API
        #[arg(long)]
        file: Option<PathBuf>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only exact (case-insensitive) matches
        #[arg(long)]
        exact: bool,
    },

    /// List clients that share an email address
    Duplicates {
        /// Output format (table, json, csv)
        #[arg(long, default_value = "table")]
        format: String,

        /// Read clients from a JSON file instead of the API
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Run the REST API
    Serve {
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Serve clients from a JSON file instead of the API
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Print the version
    Version,
}

impl Cli {
    /// Run the selected command, writing results to stdout.
    pub fn run(self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.execute(&mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn execute<W: Write>(self, out: &mut W) -> Result<()> {
        let Cli {
            api_url,
            timeout,
            command,
            ..
        } = self;

        match command {
            Command::Search {
                query,
                field,
                format,
                file,
                limit,
                exact,
            } => {
                let source = SourceConfig::resolve(file, &api_url, timeout)?.build()?;
                let options = SearchOptions { limit, exact };
                let results = ClientSearch::new(source).try_search_with(&query, &field, &options)?;
                info!(query = %query, field = %field, count = results.len(), "search finished");
                output::render_records(out, &results, OutputFormat::from(format.as_str()))
            }
            Command::Duplicates { format, file } => {
                let source = SourceConfig::resolve(file, &api_url, timeout)?.build()?;
                let groups = ClientSearch::new(source).try_find_duplicate_emails()?;
                info!(groups = groups.len(), "duplicate scan finished");
                output::render_duplicates(out, &groups, OutputFormat::from(format.as_str()))
            }
            Command::Serve { host, port, file } => {
                let config = SourceConfig::resolve(file, &api_url, timeout)?;
                let addr = resolve_addr(&host, port)?;
                debug!(?config, %addr, "starting API server");

                let factory: SourceFactory = Arc::new(move || config.build());
                let runtime = tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .build()?;
                runtime.block_on(ApiServer::new(factory).address(addr).serve())
            }
            Command::Version => {
                writeln!(out, "client-search version {}", env!("CARGO_PKG_VERSION"))?;
                Ok(())
            }
        }
    }
}

fn resolve_addr(host: &str, port: u16) -> Result<SocketAddr> {
    (host, port)
        .to_socket_addrs()
        .map_err(|e| Error::Config(format!("failed to resolve '{}:{}': {}", host, port, e)))?
        .next()
        .ok_or_else(|| Error::Config(format!("no address for '{}:{}'", host, port)))
}
