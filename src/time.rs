use std::time::SystemTime;
use chrono::{DateTime, Utc};

/// UTC timestamp used throughout the crate.
pub type Timestamp = DateTime<Utc>;

/// The current time.
pub fn now() -> Timestamp {
    Timestamp::from(SystemTime::now())
}
