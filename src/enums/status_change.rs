use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// A change in live state between two polling cycles.
#[derive(Serialize, Deserialize, Display, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusChange {
    /// The channel went live.
    #[serde(rename = "UP")]
    #[strum(serialize = "UP")]
    Up,
    /// The channel went offline.
    #[serde(rename = "DOWN")]
    #[strum(serialize = "DOWN")]
    Down,
}
