//! Waitlist storage backends.

use std::sync::Mutex;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Postgres error code for a unique constraint violation.
pub const UNIQUE_VIOLATION: &str = "23505";

/// A row in the waitlist table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    /// Normalized email address.
    pub email: String,
    /// Where the signup came from.
    pub source: String,
}

/// Why an insert failed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email is already on the list.
    #[error("email already registered: {message}")]
    Conflict { message: String },
    /// The store answered with an error other than a conflict.
    #[error("store rejected insert with status {status} (code {code:?}): {message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },
    /// The request never got a usable answer.
    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),
    /// Memory store lock was poisoned by a panicking writer.
    #[error("store unavailable")]
    Unavailable,
}

/// Somewhere waitlist entries can be inserted.
pub trait WaitlistStore: Send + Sync {
    /// Insert one entry. The email column is unique.
    fn insert(&self, entry: &WaitlistEntry) -> Result<(), StoreError>;
}

/// In-process store with the same uniqueness rule as the hosted table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<WaitlistEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of stored entries.
    pub fn entries(&self) -> Vec<WaitlistEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl WaitlistStore for MemoryStore {
    fn insert(&self, entry: &WaitlistEntry) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Unavailable)?;
        if entries.iter().any(|e| e.email == entry.email) {
            return Err(StoreError::Conflict {
                message: format!(
                    "duplicate key value violates unique constraint (code {UNIQUE_VIOLATION})"
                ),
            });
        }
        debug!(source = %entry.source, "waitlist entry stored in memory");
        entries.push(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(email: &str) -> WaitlistEntry {
        WaitlistEntry {
            email: email.to_string(),
            source: "landing_page".to_string(),
        }
    }

    #[test]
    fn test_memory_store_rejects_duplicates() {
        let store = MemoryStore::new();
        store.insert(&entry("a@b.co")).unwrap();
        store.insert(&entry("c@d.co")).unwrap();
        let err = store.insert(&entry("a@b.co")).unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
        assert_eq!(store.entries().len(), 2);
    }

    #[test]
    fn test_entry_serializes_as_row() {
        let json = serde_json::to_value(entry("a@b.co")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "email": "a@b.co", "source": "landing_page" })
        );
    }
}
