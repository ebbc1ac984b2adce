//! Off-thread submission so the render loop never waits on the network.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, RwLock};
use std::thread;

use tracing::{error, warn};

use crate::store::{StoreError, WaitlistEntry, WaitlistStore};

/// Shared between the render loop and the submitting thread.
#[derive(Debug, Default)]
struct Slot {
    /// Whether an insert is in flight.
    busy: bool,
    /// Result of the last finished insert, waiting to be collected.
    outcome: Option<Result<(), StoreError>>,
}

/// Runs inserts on a background thread and hands back the result.
pub struct Submitter {
    store: Arc<dyn WaitlistStore>,
    slot: Arc<RwLock<Slot>>,
}

impl Submitter {
    pub fn new(store: Arc<dyn WaitlistStore>) -> Self {
        Self {
            store,
            slot: Arc::new(RwLock::new(Slot::default())),
        }
    }

    /// Start inserting `entry`. Returns false if one is already in flight.
    pub fn submit(&self, entry: WaitlistEntry) -> bool {
        match self.slot.write() {
            Ok(mut slot) if !slot.busy => slot.busy = true,
            Ok(_) => return false,
            Err(_) => {
                warn!("waitlist submitter lock poisoned");
                return false;
            }
        }

        let store = Arc::clone(&self.store);
        let slot = Arc::clone(&self.slot);

        thread::spawn(move || {
            // A panicking store must still clear `busy`.
            let result = panic::catch_unwind(AssertUnwindSafe(|| store.insert(&entry)))
                .unwrap_or_else(|_| {
                    error!("waitlist store panicked during insert");
                    Err(StoreError::Unavailable)
                });
            match slot.write() {
                Ok(mut slot) => {
                    slot.outcome = Some(result);
                    slot.busy = false;
                }
                Err(_) => warn!("waitlist submitter lock poisoned"),
            }
        });
        true
    }

    /// Take the finished result, if any.
    pub fn poll(&self) -> Option<Result<(), StoreError>> {
        self.slot.write().ok().and_then(|mut slot| slot.outcome.take())
    }

    pub fn is_busy(&self) -> bool {
        self.slot.read().map(|slot| slot.busy).unwrap_or(false)
    }
}

impl std::fmt::Debug for Submitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submitter")
            .field("busy", &self.is_busy())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{DUPLICATE_MESSAGE, FormStatus, WaitlistForm};
    use crate::store::MemoryStore;
    use std::time::{Duration, Instant};

    fn wait_for(submitter: &Submitter) -> Result<(), StoreError> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = submitter.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "submission never finished");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_background_insert_feeds_form() {
        let store = Arc::new(MemoryStore::new());
        let submitter = Submitter::new(store.clone());

        let mut first = WaitlistForm::new("landing_page");
        "a@b.co".chars().for_each(|c| first.push_char(c));
        let entry = first.begin_submit().unwrap();
        assert!(submitter.submit(entry));
        first.finish_submit(wait_for(&submitter));
        assert_eq!(first.status(), FormStatus::Submitted);

        let mut second = WaitlistForm::new("landing_page");
        "A@B.co".chars().for_each(|c| second.push_char(c));
        let entry = second.begin_submit().unwrap();
        assert!(submitter.submit(entry));
        second.finish_submit(wait_for(&submitter));
        assert_eq!(second.message(), Some(DUPLICATE_MESSAGE));
        assert_eq!(store.entries().len(), 1);
    }

    struct PanickingStore;

    impl WaitlistStore for PanickingStore {
        fn insert(&self, _entry: &WaitlistEntry) -> Result<(), StoreError> {
            panic!("store blew up");
        }
    }

    #[test]
    fn test_store_panic_releases_submitter() {
        let submitter = Submitter::new(Arc::new(PanickingStore));
        let entry = WaitlistEntry {
            email: "a@b.co".into(),
            source: "landing_page".into(),
        };
        assert!(submitter.submit(entry.clone()));
        assert!(matches!(wait_for(&submitter), Err(StoreError::Unavailable)));
        assert!(!submitter.is_busy());

        // Not wedged: the next submission is accepted.
        assert!(submitter.submit(entry));
        assert!(matches!(wait_for(&submitter), Err(StoreError::Unavailable)));
    }

    #[test]
    fn test_poll_empty_when_idle() {
        let submitter = Submitter::new(Arc::new(MemoryStore::new()));
        assert!(submitter.poll().is_none());
        assert!(!submitter.is_busy());
    }
}
