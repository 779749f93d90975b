use crate::time::Timestamp;
use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// The current snapshot document version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The exportable form of a tracker's state, used for restart durability. Produced by
/// [`crate::StreamTracker::snapshot`] and consumed by
/// [`crate::StreamTracker::restore_snapshot`].
///
/// Cached platform ids are deliberately not part of the snapshot; they are rebuilt lazily the
/// next time a login is validated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackerSnapshot {
    /// The snapshot document version.
    pub version: u32,
    /// Tracked logins, sorted.
    pub logins: Vec<String>,
    /// Logins whose existence has been validated, sorted.
    pub checked_existence: Vec<String>,
    /// Last confirmed live state per login.
    #[serde(default)]
    pub was_online: HashMap<String, bool>,
    /// When each login was first observed offline, for logins still within the cooldown
    /// window.
    #[serde(default)]
    pub last_time_offline: HashMap<String, Timestamp>,
    /// The cooldown window in seconds.
    pub cooldown_seconds: u64,
}
