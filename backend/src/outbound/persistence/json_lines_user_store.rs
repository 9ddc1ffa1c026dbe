//! Append-only JSON lines user store.
//!
//! Each admitted user becomes one line of camelCase JSON. The file is synced
//! before `add` returns so an acknowledged admission survives a crash.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cap_std::fs::{File, OpenOptions};
use tracing::debug;

use crate::domain::UserRecord;
use crate::domain::ports::{UserStore, UserStoreError};
use crate::outbound::fs::open_parent;

/// User store appending records to a JSON lines file.
#[derive(Debug, Clone)]
pub struct JsonLinesUserStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonLinesUserStore {
    /// Store records in the file at `path`, creating it on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Target file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UserStore for JsonLinesUserStore {
    async fn add(&self, user: &UserRecord) -> Result<(), UserStoreError> {
        let mut line = serde_json::to_string(user)
            .map_err(|error| UserStoreError::write(format!("serialise user: {error}")))?;
        line.push('\n');

        let path = self.path.clone();
        let write_lock = Arc::clone(&self.write_lock);
        tokio::task::spawn_blocking(move || {
            let _guard = write_lock
                .lock()
                .map_err(|_| UserStoreError::write("user store lock poisoned"))?;
            append_line(&path, &line)
        })
        .await
        .map_err(|error| UserStoreError::write(format!("append task failed: {error}")))?
    }
}

fn append_line(path: &Path, line: &str) -> Result<(), UserStoreError> {
    let (dir, file_name) = open_parent(path).map_err(|error| {
        debug!(path = %path.display(), %error, "user store directory unavailable");
        UserStoreError::connection(error.to_string())
    })?;

    let mut options = OpenOptions::new();
    options.append(true).create(true);
    let write_error = |error: io::Error| {
        debug!(path = %path.display(), %error, "user store append failed");
        UserStoreError::write(format!("append to '{}': {error}", path.display()))
    };
    let mut file = dir.open_with(file_name, &options).map_err(write_error)?;
    append_whole_line(&mut file, line).map_err(write_error)?;
    file.sync_all().map_err(write_error)
}

/// File that can be cut back to an earlier length.
trait Truncate: Write {
    fn current_len(&self) -> io::Result<u64>;
    fn truncate_to(&mut self, len: u64) -> io::Result<()>;
}

impl Truncate for File {
    fn current_len(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

/// Append `line` or leave the file as it was. A partial write would otherwise
/// glue the next record onto a truncated one.
fn append_whole_line<F: Truncate>(file: &mut F, line: &str) -> io::Result<()> {
    let start = file.current_len()?;
    let written = file.write_all(line.as_bytes()).and_then(|()| file.flush());
    if let Err(error) = written {
        if let Err(rollback) = file.truncate_to(start) {
            debug!(%rollback, "user store rollback failed");
        }
        return Err(error);
    }
    Ok(())
}
