//! Port for the external credit policy service.
//!
//! The service scores a candidate from their name and date of birth and
//! returns a base credit limit before any client-tier adjustment.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::define_port_error;

define_port_error! {
    /// Errors raised by credit policy adapters.
    pub enum CreditPolicyError {
        /// The service could not be reached or the exchange broke down.
        Transport { message: String } => "credit policy transport failed: {message}",
        /// The service did not answer in time.
        Timeout { message: String } => "credit policy request timed out: {message}",
        /// The service answered with a payload that could not be decoded.
        Decode { message: String } => "credit policy response was invalid: {message}",
        /// The service refused the request as malformed.
        InvalidRequest { message: String } => "credit policy rejected the request: {message}",
    }
}

/// Port for base credit limit lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreditPolicyService: Send + Sync {
    /// Base credit limit for the named candidate.
    async fn credit_limit(
        &self,
        first_name: &str,
        last_name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<u32, CreditPolicyError>;
}
