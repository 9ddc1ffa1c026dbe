//! Port abstraction for client lookup adapters and their errors.
use async_trait::async_trait;

use crate::domain::{ClientId, ClientRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by client directory adapters.
    pub enum ClientDirectoryError {
        /// Directory backend could not be reached.
        Connection { message: String } => "client directory connection failed: {message}",
        /// Lookup failed during execution.
        Query { message: String } => "client directory query failed: {message}",
    }
}

/// Port for resolving client records by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    /// Fetch a client by identifier.
    ///
    /// Returns `Ok(None)` when no such client exists; errors are reserved for
    /// infrastructure failures.
    async fn find_by_id(&self, id: ClientId) -> Result<Option<ClientRecord>, ClientDirectoryError>;
}
