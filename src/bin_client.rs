//! # BIN Lookup Client
//!
//! Performs a single HTTP GET against the binlist service for a validated BIN
//! and maps the response to a [`LookupOutcome`]. The client never retries and
//! never returns an error to its caller: every failure is logged and folded
//! into [`LookupOutcome::Failed`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use tracing::{debug, error, info};

use crate::bin_record::BinRecord;
use crate::bin_validation::Bin;
use crate::lookup_config::{LookupConfig, ERROR_BODY_LOG_LIMIT};
use crate::lookup_errors::LookupFailure;

/// Result of a single BIN lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The service returned a record
    Found(BinRecord),
    /// The service has no record for this BIN (HTTP 404)
    NotFound,
    /// Anything else; the payload is for logging only
    Failed(LookupFailure),
}

/// Source of BIN records
///
/// Implementations must not panic or return errors; failures are reported
/// through [`LookupOutcome::Failed`].
#[async_trait]
pub trait BinLookup: Send + Sync {
    async fn lookup(&self, bin: &Bin) -> LookupOutcome;
}

/// HTTP client for the binlist lookup API
#[derive(Debug, Clone)]
pub struct BinLookupClient {
    client: reqwest::Client,
    base_url: String,
}

impl BinLookupClient {
    /// Build a client with the static headers and timeout from `config`
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Accept-Version",
            HeaderValue::from_str(&config.api_version).context("Invalid Accept-Version header")?,
        );

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .context("Failed to build BIN lookup HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL queried for `bin`
    pub fn url_for(&self, bin: &Bin) -> String {
        format!("{}/{}", self.base_url, bin.as_str())
    }

    async fn fetch(&self, bin: &Bin) -> Result<Option<BinRecord>, LookupFailure> {
        let url = self.url_for(bin);
        debug!(bin = %bin, url = %url, "Fetching BIN information");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::OK {
            let record = response.json::<BinRecord>().await?;
            return Ok(Some(record));
        }
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(LookupFailure::Status {
            status: status.as_u16(),
            body: truncate_chars(&body, ERROR_BODY_LOG_LIMIT),
        })
    }
}

#[async_trait]
impl BinLookup for BinLookupClient {
    async fn lookup(&self, bin: &Bin) -> LookupOutcome {
        match self.fetch(bin).await {
            Ok(Some(record)) => {
                debug!(bin = %bin, "BIN lookup returned a record");
                LookupOutcome::Found(record)
            }
            Ok(None) => {
                info!(bin = %bin, "BIN not found");
                LookupOutcome::NotFound
            }
            Err(failure) => {
                match &failure {
                    LookupFailure::Status { status, body } => {
                        error!(bin = %bin, status = *status, body = %body, "BIN API error");
                    }
                    other => {
                        error!(bin = %bin, error = %other, "BIN request failed");
                    }
                }
                LookupOutcome::Failed(failure)
            }
        }
    }
}

/// Keep at most `limit` characters of `text`
fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
