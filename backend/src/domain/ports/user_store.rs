//! Port for durable storage of admitted users.
use async_trait::async_trait;

use crate::domain::UserRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserStoreError {
        /// Storage backend could not be reached.
        Connection { message: String } => "user store connection failed: {message}",
        /// The record could not be written.
        Write { message: String } => "user store write failed: {message}",
    }
}

/// Port for persisting admitted users.
///
/// Adapters must either store the record durably or return an error; the
/// admission service reports success only after `add` returns `Ok`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist an admitted user.
    async fn add(&self, user: &UserRecord) -> Result<(), UserStoreError>;
}
