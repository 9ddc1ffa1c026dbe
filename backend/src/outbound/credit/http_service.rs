//! Reqwest-backed credit policy adapter.
//!
//! This adapter owns transport details only: query encoding, timeout and HTTP
//! error mapping, and JSON decoding of the base credit limit.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::{CreditLimitQueryDto, CreditLimitResponseDto};
use crate::domain::ports::{CreditPolicyError, CreditPolicyService};

const DEFAULT_USER_AGENT: &str = "user-admission-credit-client/0.1";

/// Credit policy adapter issuing one GET request per lookup.
pub struct HttpCreditPolicyService {
    client: Client,
    endpoint: Url,
}

impl HttpCreditPolicyService {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let service = HttpCreditPolicyService::new(endpoint, Duration::from_secs(5));
    /// assert!(service.is_ok() || service.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl CreditPolicyService for HttpCreditPolicyService {
    async fn credit_limit(
        &self,
        first_name: &str,
        last_name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<u32, CreditPolicyError> {
        let query = CreditLimitQueryDto {
            first_name,
            last_name,
            date_of_birth,
        };
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_credit_limit(body.as_ref())
    }
}

fn parse_credit_limit(body: &[u8]) -> Result<u32, CreditPolicyError> {
    let decoded: CreditLimitResponseDto = serde_json::from_slice(body).map_err(|error| {
        CreditPolicyError::decode(format!("invalid credit limit payload: {error}"))
    })?;
    Ok(decoded.credit_limit)
}

fn map_transport_error(error: reqwest::Error) -> CreditPolicyError {
    debug!(%error, "credit policy request failed");
    if error.is_timeout() {
        CreditPolicyError::timeout(error.to_string())
    } else {
        CreditPolicyError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CreditPolicyError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            CreditPolicyError::timeout(message)
        }
        _ if status.is_client_error() => CreditPolicyError::invalid_request(message),
        _ => CreditPolicyError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network credit policy helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_credit_limit_payload() {
        assert_eq!(parse_credit_limit(br#"{"creditLimit": 600}"#), Ok(600));
    }

    #[rstest]
    #[case::not_json(b"<html>".as_slice())]
    #[case::negative(br#"{"creditLimit": -5}"#.as_slice())]
    #[case::missing_field(br#"{"limit": 600}"#.as_slice())]
    fn rejects_malformed_payloads(#[case] body: &[u8]) {
        let error = parse_credit_limit(body).expect_err("payload is invalid");
        assert!(matches!(error, CreditPolicyError::Decode { .. }));
    }

    #[rstest]
    fn query_uses_camel_case_and_iso_dates() {
        let query = CreditLimitQueryDto {
            first_name: "Alex",
            last_name: "McLean",
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
        };
        let endpoint = Url::parse("https://credit.example.test/limits").expect("valid url");
        let request = Client::new()
            .get(endpoint)
            .query(&query)
            .build()
            .expect("request builds");
        assert_eq!(
            request.url().query(),
            Some("firstName=Alex&lastName=McLean&dateOfBirth=1990-01-01")
        );
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, "Timeout")]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, "Timeout")]
    #[case::bad_request(StatusCode::BAD_REQUEST, "InvalidRequest")]
    #[case::not_found(StatusCode::NOT_FOUND, "InvalidRequest")]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, "Transport")]
    #[case::unavailable(StatusCode::SERVICE_UNAVAILABLE, "Transport")]
    fn maps_http_statuses_to_port_errors(#[case] status: StatusCode, #[case] expected: &str) {
        let error = map_status_error(status, b"{\"reason\":\"scoring offline\"}");
        let matched = match expected {
            "Timeout" => matches!(error, CreditPolicyError::Timeout { .. }),
            "InvalidRequest" => matches!(error, CreditPolicyError::InvalidRequest { .. }),
            "Transport" => matches!(error, CreditPolicyError::Transport { .. }),
            other => panic!("unknown expectation: {other}"),
        };
        assert!(matched, "{status} mapped to {error:?}");
    }

    #[rstest]
    fn status_message_includes_compacted_body() {
        let error = map_status_error(StatusCode::BAD_REQUEST, b"  bad \n  date ");
        assert_eq!(
            error,
            CreditPolicyError::invalid_request("status 400: bad date")
        );
    }

    #[rstest]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(200);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }
}
