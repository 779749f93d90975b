use crate::enums::StatusChange;
use crate::response::Stream;
use std::fmt;
use serde::{Deserialize, Serialize};

/// The status of a single login for one polling cycle. Produced fresh each cycle; never
/// retained or mutated by the tracker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StreamerStatus {
    /// The normalized login.
    pub login: String,
    /// Whether the login is treated as live this cycle. Remains `true` during the cooldown
    /// grace window after a drop.
    pub is_live: bool,
    /// The transition reported this cycle, if any.
    pub change: Option<StatusChange>,
    /// The raw stream record when the login appeared in the live-streams result.
    pub stream: Option<Stream>,
}

impl fmt::Display for StreamerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_live { "LIVE" } else { "offline" };

        if let Some(change) = &self.change {
            write!(f, "{} is {state} (change={change})", self.login)
        } else {
            write!(f, "{} is {state}", self.login)
        }
    }
}
