use crate::time::Timestamp;
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// A live stream as returned by the `streams` endpoint. Channels that are not currently
/// broadcasting are simply absent from the response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Stream {
    /// The stream's id.
    pub id: String,
    /// The broadcaster's user id.
    pub user_id: UserId,
    /// The broadcaster's login name.
    pub user_login: String,
    /// The broadcaster's display name.
    pub user_name: String,
    /// The id of the category being streamed.
    #[serde(default)]
    pub game_id: String,
    /// The name of the category being streamed.
    #[serde(default)]
    pub game_name: String,
    /// The type of stream. `"live"` is the only value for healthy streams.
    #[serde(rename = "type", default)]
    pub stream_type: String,
    /// The stream title.
    #[serde(default)]
    pub title: String,
    /// The number of current viewers.
    #[serde(default)]
    pub viewer_count: u64,
    /// When the stream started.
    pub started_at: Timestamp,
    /// The stream language.
    #[serde(default)]
    pub language: String,
    /// Thumbnail URL template.
    #[serde(default)]
    pub thumbnail_url: String,
    /// Whether the stream is marked as intended for mature audiences.
    #[serde(default)]
    pub is_mature: bool,
    /// Tags applied to the stream.
    #[serde(default)]
    pub tags: Vec<String>,
}
