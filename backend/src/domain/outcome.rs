//! Admission outcomes and the business reasons for rejecting a candidate.

use std::fmt;

use crate::domain::{ClientId, MINIMUM_AGE, MINIMUM_CREDIT_LIMIT, UserRecord};

/// Why a candidate was not admitted.
///
/// Every variant is an ordinary business outcome. Collaborator faults travel
/// separately as [`crate::domain::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// First name was empty or whitespace only.
    EmptyFirstName,
    /// Last name was empty or whitespace only.
    EmptyLastName,
    /// Email lacked `@` or `.`.
    InvalidEmail,
    /// Candidate has not reached the minimum age.
    Underage {
        /// Age in whole years on the clock's current date.
        age: u32,
    },
    /// The client directory holds no record for the identifier.
    UnknownClient {
        /// Identifier that was looked up.
        client_id: ClientId,
    },
    /// Enforced credit limit fell below the minimum.
    InsufficientCredit {
        /// Final limit after tier adjustment.
        credit_limit: u64,
    },
}

impl RejectionReason {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyFirstName => "empty_first_name",
            Self::EmptyLastName => "empty_last_name",
            Self::InvalidEmail => "invalid_email",
            Self::Underage { .. } => "underage",
            Self::UnknownClient { .. } => "unknown_client",
            Self::InsufficientCredit { .. } => "insufficient_credit",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "first name must not be empty"),
            Self::EmptyLastName => write!(f, "last name must not be empty"),
            Self::InvalidEmail => write!(f, "email must contain '@' and '.'"),
            Self::Underage { age } => {
                write!(f, "candidate is {age} but must be at least {MINIMUM_AGE}")
            }
            Self::UnknownClient { client_id } => write!(f, "client {client_id} does not exist"),
            Self::InsufficientCredit { credit_limit } => write!(
                f,
                "credit limit {credit_limit} is below the minimum of {MINIMUM_CREDIT_LIMIT}"
            ),
        }
    }
}

/// Result of evaluating one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionOutcome {
    /// The candidate passed every check and the record was persisted.
    Admitted(UserRecord),
    /// The candidate failed a business check; nothing was persisted.
    Rejected(RejectionReason),
}

impl AdmissionOutcome {
    /// `true` for [`AdmissionOutcome::Admitted`].
    #[must_use]
    pub const fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted(_))
    }

    /// Rejection reason, if any.
    #[must_use]
    pub const fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Self::Admitted(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}
