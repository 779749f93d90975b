use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The result of classifying an arbitrary login in one pass.
#[derive(Serialize, Deserialize, Display, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Classification {
    /// No account exists for the login.
    DoesNotExist,
    /// The account exists and is currently broadcasting.
    ExistsAndLive,
    /// The account exists but is not currently broadcasting.
    ExistsButNotLive,
}
