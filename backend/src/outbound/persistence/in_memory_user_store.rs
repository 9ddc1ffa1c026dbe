//! Process-local user store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::UserRecord;
use crate::domain::ports::{UserStore, UserStoreError};

/// Keeps admitted users in memory for the lifetime of the process.
///
/// A panic elsewhere while holding the lock cannot leave a half-pushed
/// record, so a poisoned lock is recovered rather than reported.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of stored users in insertion order.
    #[must_use]
    pub fn users(&self) -> Vec<UserRecord> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<UserRecord>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn add(&self, user: &UserRecord) -> Result<(), UserStoreError> {
        self.lock().push(user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CandidateInput, ClientId, CreditAssessment};
    use chrono::NaiveDate;

    fn user(first_name: &str) -> UserRecord {
        let candidate = CandidateInput::new(
            first_name,
            "bloggs",
            "test@test.com",
            NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
            ClientId::new(1),
        );
        UserRecord::admit(candidate, CreditAssessment::limited(600))
    }

    #[tokio::test]
    async fn keeps_users_in_insertion_order() {
        let store = InMemoryUserStore::new();
        store.add(&user("Joe")).await.expect("first add");
        store.add(&user("Ann")).await.expect("second add");

        let names: Vec<_> = store
            .users()
            .iter()
            .map(|stored| stored.first_name().to_owned())
            .collect();
        assert_eq!(names, ["Joe", "Ann"]);
    }

    #[tokio::test]
    async fn poisoned_lock_is_recovered_for_reads_and_writes() {
        let store = InMemoryUserStore::new();
        store.add(&user("Joe")).await.expect("first add");
        let poisoner = std::panic::catch_unwind(|| {
            let _guard = store.users.lock().expect("lock is healthy");
            panic!("poison the user list");
        });
        assert!(poisoner.is_err());
        assert!(store.users.is_poisoned());

        store.add(&user("Ann")).await.expect("add after poisoning");
        assert_eq!(store.users().len(), 2);
    }

    #[tokio::test]
    async fn duplicates_are_stored_twice() {
        let store = InMemoryUserStore::new();
        let joe = user("Joe");
        store.add(&joe).await.expect("first add");
        store.add(&joe).await.expect("second add");
        assert_eq!(store.users().len(), 2);
    }
}
