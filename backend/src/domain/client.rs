//! Client records and the tier-based credit policy.
//!
//! A client's tier is resolved once from its name and then drives the credit
//! adjustment applied to a candidate's base limit. Matching is exact and
//! case-sensitive: `"importantclient"` is a standard client.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Client name that exempts its users from credit limiting.
pub const VIP_CLIENT_NAME: &str = "VeryImportantClient";
/// Client name whose users receive a multiplied credit allowance.
pub const PREFERRED_CLIENT_NAME: &str = "ImportantClient";
/// Multiplier applied to the base limit for preferred clients.
pub const PREFERRED_CREDIT_MULTIPLIER: u64 = 2;
/// Smallest final limit accepted for tiers that enforce a credit limit.
pub const MINIMUM_CREDIT_LIMIT: u64 = 500;

/// Identifier of a client in the client directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(u64);

impl ClientId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ClientId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client record owned by the client directory.
///
/// # Examples
/// ```
/// use user_admission::domain::{ClientId, ClientRecord, ClientTier};
///
/// let client = ClientRecord::new(ClientId::new(7), "ImportantClient");
/// assert_eq!(client.tier(), ClientTier::Preferred);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    id: ClientId,
    name: String,
}

impl ClientRecord {
    /// Build a client record.
    pub fn new(id: ClientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Client identifier.
    #[must_use]
    pub const fn id(&self) -> ClientId {
        self.id
    }

    /// Client name as stored in the directory.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Tier derived from the client name.
    #[must_use]
    pub fn tier(&self) -> ClientTier {
        ClientTier::from_name(&self.name)
    }
}

/// Closed set of client tiers recognised by the credit policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientTier {
    /// Users are not credit limited at all.
    Vip,
    /// Users receive the base limit times [`PREFERRED_CREDIT_MULTIPLIER`].
    Preferred,
    /// Users receive the base limit unchanged.
    Standard,
}

impl ClientTier {
    /// Resolve the tier for a client name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            VIP_CLIENT_NAME => Self::Vip,
            PREFERRED_CLIENT_NAME => Self::Preferred,
            _ => Self::Standard,
        }
    }

    /// Apply the tier adjustment to a base limit from the credit policy
    /// service.
    ///
    /// # Examples
    /// ```
    /// use user_admission::domain::ClientTier;
    ///
    /// let assessment = ClientTier::Preferred.assess(600);
    /// assert_eq!(assessment.credit_limit(), 1200);
    /// assert!(assessment.has_credit_limit());
    /// ```
    #[must_use]
    pub fn assess(self, base_limit: u32) -> CreditAssessment {
        let base = u64::from(base_limit);
        match self {
            Self::Vip => CreditAssessment::unlimited(),
            Self::Preferred => CreditAssessment::limited(base * PREFERRED_CREDIT_MULTIPLIER),
            Self::Standard => CreditAssessment::limited(base),
        }
    }
}

/// Final credit figures for a candidate after tier adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditAssessment {
    credit_limit: u64,
    has_credit_limit: bool,
}

impl CreditAssessment {
    /// Assessment for tiers exempt from credit limiting. The stored limit is
    /// zero and carries no meaning.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            credit_limit: 0,
            has_credit_limit: false,
        }
    }

    /// Assessment enforcing `credit_limit`.
    #[must_use]
    pub const fn limited(credit_limit: u64) -> Self {
        Self {
            credit_limit,
            has_credit_limit: true,
        }
    }

    /// Final credit limit.
    #[must_use]
    pub const fn credit_limit(&self) -> u64 {
        self.credit_limit
    }

    /// Whether the limit is enforced.
    #[must_use]
    pub const fn has_credit_limit(&self) -> bool {
        self.has_credit_limit
    }

    /// `true` unless the limit is enforced and below
    /// [`MINIMUM_CREDIT_LIMIT`]. A limit of exactly the minimum passes.
    #[must_use]
    pub const fn passes_minimum(&self) -> bool {
        !self.has_credit_limit || self.credit_limit >= MINIMUM_CREDIT_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("VeryImportantClient", ClientTier::Vip)]
    #[case("ImportantClient", ClientTier::Preferred)]
    #[case("JoeBlogs", ClientTier::Standard)]
    #[case("importantclient", ClientTier::Standard)]
    #[case("VeryImportantClient ", ClientTier::Standard)]
    #[case("", ClientTier::Standard)]
    fn tier_matches_names_exactly(#[case] name: &str, #[case] expected: ClientTier) {
        assert_eq!(ClientTier::from_name(name), expected);
    }

    #[rstest]
    #[case(ClientTier::Vip, 600, 0, false)]
    #[case(ClientTier::Vip, 0, 0, false)]
    #[case(ClientTier::Preferred, 600, 1200, true)]
    #[case(ClientTier::Standard, 600, 600, true)]
    fn assessment_follows_tier(
        #[case] tier: ClientTier,
        #[case] base: u32,
        #[case] credit_limit: u64,
        #[case] has_credit_limit: bool,
    ) {
        let assessment = tier.assess(base);
        assert_eq!(assessment.credit_limit(), credit_limit);
        assert_eq!(assessment.has_credit_limit(), has_credit_limit);
    }

    #[rstest]
    fn preferred_doubling_does_not_overflow() {
        let assessment = ClientTier::Preferred.assess(u32::MAX);
        assert_eq!(assessment.credit_limit(), u64::from(u32::MAX) * 2);
    }

    // 500 sits on the boundary and is accepted; only strictly lower limits fail.
    #[rstest]
    #[case(CreditAssessment::limited(499), false)]
    #[case(CreditAssessment::limited(500), true)]
    #[case(CreditAssessment::limited(501), true)]
    #[case(CreditAssessment::limited(0), false)]
    #[case(CreditAssessment::unlimited(), true)]
    fn minimum_threshold_is_inclusive(
        #[case] assessment: CreditAssessment,
        #[case] expected: bool,
    ) {
        assert_eq!(assessment.passes_minimum(), expected);
    }

    #[rstest]
    fn preferred_tier_lifts_low_base_over_threshold() {
        assert!(ClientTier::Preferred.assess(250).passes_minimum());
        assert!(!ClientTier::Standard.assess(250).passes_minimum());
    }

    #[rstest]
    fn client_record_deserialises_from_directory_json() {
        let client: ClientRecord =
            serde_json::from_str(r#"{"id": 3, "name": "ImportantClient"}"#).expect("valid json");
        assert_eq!(client.id(), ClientId::new(3));
        assert_eq!(client.tier(), ClientTier::Preferred);
    }
}
