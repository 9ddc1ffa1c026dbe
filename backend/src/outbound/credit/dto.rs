//! DTOs exchanged with the credit policy HTTP service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query parameters identifying the candidate being scored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreditLimitQueryDto<'a> {
    pub(super) first_name: &'a str,
    pub(super) last_name: &'a str,
    pub(super) date_of_birth: NaiveDate,
}

/// Response body carrying the base credit limit.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreditLimitResponseDto {
    pub(super) credit_limit: u32,
}
