//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod client_directory;
mod credit_policy_service;
mod user_admission;
mod user_store;

#[cfg(test)]
pub use client_directory::MockClientDirectory;
pub use client_directory::{ClientDirectory, ClientDirectoryError};
#[cfg(test)]
pub use credit_policy_service::MockCreditPolicyService;
pub use credit_policy_service::{CreditPolicyError, CreditPolicyService};
pub use user_admission::UserAdmission;
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{UserStore, UserStoreError};
