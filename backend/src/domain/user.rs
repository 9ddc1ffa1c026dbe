//! Accepted user record handed to the user store.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{CandidateInput, ClientId, CreditAssessment};

/// User admitted by the admission service.
///
/// ## Invariants
/// - Only built from a candidate that passed every admission check.
/// - Never mutated after construction; adapters receive it by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    first_name: String,
    last_name: String,
    email: String,
    date_of_birth: NaiveDate,
    client_id: ClientId,
    credit_limit: u64,
    has_credit_limit: bool,
}

impl UserRecord {
    pub(crate) fn admit(candidate: CandidateInput, assessment: CreditAssessment) -> Self {
        let CandidateInput {
            first_name,
            last_name,
            email,
            date_of_birth,
            client_id,
        } = candidate;
        Self {
            first_name,
            last_name,
            email,
            date_of_birth,
            client_id,
            credit_limit: assessment.credit_limit(),
            has_credit_limit: assessment.has_credit_limit(),
        }
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Date of birth.
    #[must_use]
    pub const fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Owning client.
    #[must_use]
    pub const fn client_id(&self) -> ClientId {
        self.client_id
    }

    /// Final credit limit; zero and meaningless when
    /// [`UserRecord::has_credit_limit`] is `false`.
    #[must_use]
    pub const fn credit_limit(&self) -> u64 {
        self.credit_limit
    }

    /// Whether the credit limit is enforced.
    #[must_use]
    pub const fn has_credit_limit(&self) -> bool {
        self.has_credit_limit
    }
}
