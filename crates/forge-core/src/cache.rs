//! Single-value TTL cache cell.
//!
//! Staleness is the only concern: the guard is a timestamp comparison, no
//! locking beyond the slot mutex. Wall-clock time is always passed in so
//! expiry is controllable in tests.

use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

struct Entry<T> {
    value: T,
    stored_at: DateTime<Utc>,
}

/// A single cached value with a fixed TTL. Injected where needed rather
/// than living as module-level state, so it can be reset in tests.
pub struct TtlCell<T> {
    ttl: Duration,
    slot: Mutex<Option<Entry<T>>>,
}

impl<T: Clone> TtlCell<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// The cached value, or None when empty or older than the TTL.
    pub fn get(&self, now: DateTime<Utc>) -> Option<T> {
        let slot = self.slot.lock().expect("ttl cell poisoned");
        slot.as_ref()
            .filter(|e| now - e.stored_at < self.ttl)
            .map(|e| e.value.clone())
    }

    pub fn put(&self, value: T, now: DateTime<Utc>) {
        let mut slot = self.slot.lock().expect("ttl cell poisoned");
        *slot = Some(Entry {
            value,
            stored_at: now,
        });
    }

    /// Fresh value if present, otherwise compute, store, and return.
    pub fn get_or_insert_with(&self, now: DateTime<Utc>, f: impl FnOnce() -> T) -> T {
        if let Some(value) = self.get(now) {
            return value;
        }
        let value = f();
        self.put(value.clone(), now);
        value
    }

    /// Drop the cached value regardless of age.
    pub fn reset(&self) {
        let mut slot = self.slot.lock().expect("ttl cell poisoned");
        *slot = None;
    }
}
