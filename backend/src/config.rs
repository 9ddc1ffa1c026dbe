//! Admission configuration loaded via OrthoConfig.
//!
//! Only adapter wiring is configurable. The business thresholds live in the
//! domain as constants.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_CLIENTS_PATH: &str = "clients.json";
const DEFAULT_USERS_PATH: &str = "users.jsonl";
const DEFAULT_CREDIT_TIMEOUT_SECS: u64 = 5;

/// Configuration values wiring the admission adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ADMISSION")]
pub struct AdmissionSettings {
    /// JSON document listing the known clients.
    pub clients_path: Option<PathBuf>,
    /// JSON lines file receiving admitted users.
    pub users_path: Option<PathBuf>,
    /// Base URL of the remote credit policy service.
    pub credit_service_url: Option<String>,
    /// Request timeout for the credit policy service, in seconds.
    pub credit_timeout_secs: Option<u64>,
    /// Base credit limit granted to everyone when no service URL is set.
    pub fixed_credit_limit: Option<u32>,
}

/// Where base credit limits come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreditSource {
    /// Query the remote credit policy service.
    Http {
        /// Endpoint receiving credit limit queries.
        url: Url,
        /// Per-request timeout.
        timeout: Duration,
    },
    /// Grant the same base limit to every candidate.
    Fixed(u32),
}

/// Errors raised while resolving settings into adapter choices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Neither a credit service URL nor a fixed limit was configured.
    #[error("no credit source configured: set ADMISSION_CREDIT_SERVICE_URL or ADMISSION_FIXED_CREDIT_LIMIT")]
    MissingCreditSource,
    /// The credit service URL does not parse.
    #[error("invalid credit service url '{url}': {message}")]
    InvalidCreditServiceUrl {
        /// Offending value.
        url: String,
        /// Parser diagnostic.
        message: String,
    },
}

impl AdmissionSettings {
    /// Return the client directory path, falling back to the default.
    pub fn clients_path(&self) -> PathBuf {
        self.clients_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CLIENTS_PATH))
    }

    /// Return the user store path, falling back to the default.
    pub fn users_path(&self) -> PathBuf {
        self.users_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_USERS_PATH))
    }

    /// Return the credit service timeout, falling back to the default.
    pub fn credit_timeout(&self) -> Duration {
        Duration::from_secs(
            self.credit_timeout_secs
                .unwrap_or(DEFAULT_CREDIT_TIMEOUT_SECS),
        )
    }

    /// Decide which credit policy adapter to build. A service URL takes
    /// precedence over a fixed limit.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingCreditSource`] when neither option is
    /// set and [`SettingsError::InvalidCreditServiceUrl`] when the URL is
    /// malformed.
    pub fn credit_source(&self) -> Result<CreditSource, SettingsError> {
        if let Some(raw) = self.credit_service_url.as_deref() {
            let url = Url::parse(raw.trim()).map_err(|error| {
                SettingsError::InvalidCreditServiceUrl {
                    url: raw.to_owned(),
                    message: error.to_string(),
                }
            })?;
            return Ok(CreditSource::Http {
                url,
                timeout: self.credit_timeout(),
            });
        }
        self.fixed_credit_limit
            .map(CreditSource::Fixed)
            .ok_or(SettingsError::MissingCreditSource)
    }
}
