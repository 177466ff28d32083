// In-memory response cache keyed by serialized query.
// Handles TTL checking against an injectable clock; expired entries are ignored, not swept.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::clock::Clock;

/// Default TTL for cached API responses: 10 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// A cached response payload with the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The provider payload.
    pub payload: Value,
    /// When the payload was stored.
    pub stored_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(payload: Value, stored_at: DateTime<Utc>) -> Self {
        Self { payload, stored_at }
    }

    /// Check if this entry has expired as of `now`.
    ///
    /// Live while `now - stored_at < ttl`; a clock that runs backwards leaves the entry live.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        now.signed_duration_since(self.stored_at) >= ttl
    }

    /// Check if this entry is still live as of `now`.
    pub fn is_live(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        !self.is_expired(now, ttl)
    }
}

/// Page-session cache of provider payloads.
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl ResponseCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the payload for `key` if a live entry exists.
    pub fn get(&self, key: &str) -> Option<Value> {
        let now = self.clock.now();
        self.entries()
            .get(key)
            .filter(|entry| entry.is_live(now, self.ttl))
            .map(|entry| entry.payload.clone())
    }

    /// Store `payload` under `key`, replacing any previous entry.
    pub fn insert(&self, key: String, payload: Value) {
        let entry = CacheEntry::new(payload, self.clock.now());
        self.entries().insert(key, entry);
    }

    /// Number of stored entries, live or expired.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
