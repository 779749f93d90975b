use crate::time::Timestamp;
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// A Twitch user as returned by the `users` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct User {
    /// The user's id.
    pub id: UserId,
    /// The user's login name.
    pub login: String,
    /// The user's display name.
    pub display_name: String,
    /// The user's broadcaster type. Empty for normal broadcasters.
    #[serde(default)]
    pub broadcaster_type: String,
    /// The channel description.
    #[serde(default)]
    pub description: String,
    /// URL of the user's profile image.
    #[serde(default)]
    pub profile_image_url: String,
    /// When the account was created.
    pub created_at: Timestamp,
}
