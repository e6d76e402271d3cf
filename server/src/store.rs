//! Expiring login key storage.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("login key store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage key under which the login key of `user_id` is kept.
pub fn login_key_name(user_id: &str) -> String {
    format!("login-{user_id}")
}

/// Key-value store of login keys with per-entry expiry.
///
/// Implementations must hide entries past their deadline from
/// [`lookup`](Self::lookup) even before [`purge_expired`](Self::purge_expired)
/// removes them.
pub trait LoginKeyStore: Send + Sync {
    /// Stores `key` for `user_id`, replacing any previous key.
    fn assign(&self, user_id: &str, key: u32, ttl: Duration) -> StoreResult<()>;

    fn lookup(&self, user_id: &str) -> StoreResult<Option<u32>>;

    /// Drops expired entries, returning how many were removed.
    fn purge_expired(&self) -> StoreResult<usize>;
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    key: u32,
    deadline: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.deadline
    }
}

/// In-process [`LoginKeyStore`].
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl LoginKeyStore for MemoryKeyStore {
    fn assign(&self, user_id: &str, key: u32, ttl: Duration) -> StoreResult<()> {
        let now = Instant::now();
        let deadline = now.checked_add(ttl).unwrap_or(now);
        self.entries
            .lock()
            .insert(login_key_name(user_id), Entry { key, deadline });
        Ok(())
    }

    fn lookup(&self, user_id: &str) -> StoreResult<Option<u32>> {
        let now = Instant::now();
        let entries = self.entries.lock();
        Ok(entries
            .get(&login_key_name(user_id))
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.key))
    }

    fn purge_expired(&self) -> StoreResult<usize> {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(now));
        Ok(before - entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_then_lookup() {
        let store = MemoryKeyStore::new();
        store.assign("76561", 42, Duration::from_secs(60)).unwrap();
        assert_eq!(store.lookup("76561").unwrap(), Some(42));
        assert_eq!(store.lookup("other").unwrap(), None);
    }

    #[test]
    fn reassign_replaces_key() {
        let store = MemoryKeyStore::new();
        store.assign("7", 1, Duration::from_secs(60)).unwrap();
        store.assign("7", 2, Duration::from_secs(60)).unwrap();
        assert_eq!(store.lookup("7").unwrap(), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn expired_entries_are_hidden_and_purged() {
        let store = MemoryKeyStore::new();
        store.assign("gone", 1, Duration::ZERO).unwrap();
        store.assign("kept", 2, Duration::from_secs(60)).unwrap();

        assert_eq!(store.lookup("gone").unwrap(), None);
        assert_eq!(store.len(), 2);

        assert_eq!(store.purge_expired().unwrap(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("kept").unwrap(), Some(2));
    }

    #[test]
    fn key_name_has_login_prefix() {
        assert_eq!(login_key_name("123"), "login-123");
    }
}
