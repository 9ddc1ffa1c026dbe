//! Driving port for user admission.
//!
//! Inbound adapters (the CLI today) translate raw input into a
//! [`CandidateInput`] and render the outcome; the decision itself lives
//! behind this port.

use async_trait::async_trait;

use crate::domain::{AdmissionOutcome, CandidateInput, Error};

/// Domain use-case port for admitting one candidate.
#[async_trait]
pub trait UserAdmission: Send + Sync {
    /// Evaluate a candidate and persist them when admitted.
    ///
    /// Business rejections are returned as [`AdmissionOutcome::Rejected`];
    /// `Err` means a collaborator failed.
    async fn admit(&self, candidate: CandidateInput) -> Result<AdmissionOutcome, Error>;
}
