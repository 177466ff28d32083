// Cache module for provider responses.
// Holds API payloads in memory for the lifetime of the process.

pub mod clock;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::{CacheEntry, DEFAULT_TTL, ResponseCache};
