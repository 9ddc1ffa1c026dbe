//! Candidate input submitted for admission and its syntactic checks.

use chrono::NaiveDate;

use crate::domain::{ClientId, RejectionReason};

/// Prospective user as submitted by the caller.
///
/// The candidate is transient: it is validated, enriched with credit figures
/// and turned into a [`crate::domain::UserRecord`] only when admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateInput {
    /// Given name; must contain a non-whitespace character.
    pub first_name: String,
    /// Family name; must contain a non-whitespace character.
    pub last_name: String,
    /// Contact email; must contain both `@` and `.`.
    pub email: String,
    /// Calendar date of birth.
    pub date_of_birth: NaiveDate,
    /// Client the candidate enrols under.
    pub client_id: ClientId,
}

impl CandidateInput {
    /// Build a candidate from raw fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        client_id: ClientId,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            date_of_birth,
            client_id,
        }
    }

    /// Run the field checks in order and report the first failure.
    ///
    /// Age and credit checks need collaborators and live in the admission
    /// service.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] of the first failing check.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use user_admission::domain::{CandidateInput, ClientId, RejectionReason};
    ///
    /// let dob = NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date");
    /// let candidate = CandidateInput::new("Alex", "McLean", "alex-at-test", dob, ClientId::new(1));
    /// assert_eq!(candidate.validate(), Err(RejectionReason::InvalidEmail));
    /// ```
    pub fn validate(&self) -> Result<(), RejectionReason> {
        if is_blank(&self.first_name) {
            return Err(RejectionReason::EmptyFirstName);
        }
        if is_blank(&self.last_name) {
            return Err(RejectionReason::EmptyLastName);
        }
        if !is_plausible_email(&self.email) {
            return Err(RejectionReason::InvalidEmail);
        }
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Minimal structural check: both `@` and `.` must appear somewhere.
fn is_plausible_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn candidate() -> CandidateInput {
        CandidateInput::new(
            "Alex",
            "McLean",
            "alex@test.com",
            NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
            ClientId::new(1),
        )
    }

    #[rstest]
    fn accepts_well_formed_candidate(candidate: CandidateInput) {
        assert_eq!(candidate.validate(), Ok(()));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn rejects_blank_first_name(mut candidate: CandidateInput, #[case] first_name: &str) {
        candidate.first_name = first_name.to_owned();
        assert_eq!(candidate.validate(), Err(RejectionReason::EmptyFirstName));
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    fn rejects_blank_last_name(mut candidate: CandidateInput, #[case] last_name: &str) {
        candidate.last_name = last_name.to_owned();
        assert_eq!(candidate.validate(), Err(RejectionReason::EmptyLastName));
    }

    #[rstest]
    #[case("@")]
    #[case("alex@test")]
    #[case("alex.test.com")]
    #[case("")]
    fn rejects_emails_missing_at_or_dot(mut candidate: CandidateInput, #[case] email: &str) {
        candidate.email = email.to_owned();
        assert_eq!(candidate.validate(), Err(RejectionReason::InvalidEmail));
    }

    #[rstest]
    #[case(".@")]
    #[case("a@b.c")]
    fn structural_check_is_deliberately_loose(mut candidate: CandidateInput, #[case] email: &str) {
        candidate.email = email.to_owned();
        assert_eq!(candidate.validate(), Ok(()));
    }

    #[rstest]
    fn first_failure_wins(mut candidate: CandidateInput) {
        candidate.first_name = String::new();
        candidate.last_name = String::new();
        candidate.email = String::new();
        assert_eq!(candidate.validate(), Err(RejectionReason::EmptyFirstName));
    }
}
