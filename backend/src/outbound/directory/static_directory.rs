//! Client directory held in memory, optionally loaded from a JSON document.
//!
//! The document is an array of client records:
//!
//! ```json
//! [{ "id": 1, "name": "ImportantClient" }, { "id": 2, "name": "JoeBlogs" }]
//! ```

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{ClientDirectory, ClientDirectoryError};
use crate::domain::{ClientId, ClientRecord};
use crate::outbound::fs::open_parent;

/// Immutable set of client records keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct StaticClientDirectory {
    clients: HashMap<ClientId, ClientRecord>,
}

impl StaticClientDirectory {
    /// Build a directory from records. Later records replace earlier ones
    /// with the same identifier.
    ///
    /// # Examples
    /// ```
    /// use user_admission::domain::{ClientId, ClientRecord};
    /// use user_admission::outbound::directory::StaticClientDirectory;
    ///
    /// let directory = StaticClientDirectory::new([ClientRecord::new(ClientId::new(1), "JoeBlogs")]);
    /// assert_eq!(directory.len(), 1);
    /// ```
    pub fn new(records: impl IntoIterator<Item = ClientRecord>) -> Self {
        let clients = records
            .into_iter()
            .map(|record| (record.id(), record))
            .collect();
        Self { clients }
    }

    /// Parse a JSON array of client records.
    ///
    /// # Errors
    ///
    /// Returns [`ClientDirectoryError::Query`] when the document is malformed
    /// or lists the same identifier twice.
    pub fn from_json(json: &str) -> Result<Self, ClientDirectoryError> {
        let records: Vec<ClientRecord> = serde_json::from_str(json).map_err(|error| {
            ClientDirectoryError::query(format!("invalid client directory JSON: {error}"))
        })?;
        let mut clients = HashMap::with_capacity(records.len());
        for record in records {
            let id = record.id();
            if clients.insert(id, record).is_some() {
                return Err(ClientDirectoryError::query(format!(
                    "duplicate client id {id}"
                )));
            }
        }
        Ok(Self { clients })
    }

    /// Load the directory from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ClientDirectoryError::Connection`] when the file cannot be
    /// read and [`ClientDirectoryError::Query`] when its content is invalid.
    pub fn load(path: &Path) -> Result<Self, ClientDirectoryError> {
        let read = || -> std::io::Result<String> {
            let (dir, file_name) = open_parent(path)?;
            dir.read_to_string(file_name)
        };
        let json = read().map_err(|error| {
            debug!(path = %path.display(), %error, "client directory read failed");
            ClientDirectoryError::connection(format!(
                "read client directory '{}': {error}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    /// Number of clients in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// `true` when the directory holds no clients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[async_trait]
impl ClientDirectory for StaticClientDirectory {
    async fn find_by_id(&self, id: ClientId) -> Result<Option<ClientRecord>, ClientDirectoryError> {
        Ok(self.clients.get(&id).cloned())
    }
}
