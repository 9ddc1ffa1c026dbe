//! Domain primitives, ports and the admission service.
//!
//! Purpose: hold the admission decision and the strongly typed values it
//! works on. Nothing in here performs I/O directly; collaborators are reached
//! through the traits in [`ports`].
//!
//! Public surface:
//! - `UserAdmissionService`: the admission use case.
//! - `CandidateInput`, `ClientRecord`, `ClientTier`, `UserRecord`: data model.
//! - `AdmissionOutcome` / `RejectionReason`: business results.
//! - `Error` / `ErrorCode`: collaborator faults.

mod admission_service;
mod age;
mod candidate;
mod client;
pub mod error;
mod outcome;
pub mod ports;
mod user;

pub use self::admission_service::UserAdmissionService;
pub use self::age::{MINIMUM_AGE, age_on};
pub use self::candidate::CandidateInput;
pub use self::client::{
    ClientId, ClientRecord, ClientTier, CreditAssessment, MINIMUM_CREDIT_LIMIT,
    PREFERRED_CLIENT_NAME, PREFERRED_CREDIT_MULTIPLIER, VIP_CLIENT_NAME,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::outcome::{AdmissionOutcome, RejectionReason};
pub use self::user::UserRecord;
