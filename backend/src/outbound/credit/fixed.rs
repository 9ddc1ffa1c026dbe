//! Credit policy adapter that answers every lookup with one figure.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::ports::{CreditPolicyError, CreditPolicyService};

/// Returns the same base limit for every candidate.
///
/// Useful for offline runs where no scoring service is deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCreditPolicyService {
    base_limit: u32,
}

impl FixedCreditPolicyService {
    /// Answer every lookup with `base_limit`.
    #[must_use]
    pub const fn new(base_limit: u32) -> Self {
        Self { base_limit }
    }
}

#[async_trait]
impl CreditPolicyService for FixedCreditPolicyService {
    async fn credit_limit(
        &self,
        _first_name: &str,
        _last_name: &str,
        _date_of_birth: NaiveDate,
    ) -> Result<u32, CreditPolicyError> {
        Ok(self.base_limit)
    }
}
