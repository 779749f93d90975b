//! Tracks the live status of Twitch channels and reports transitions (went live, went
//! offline) rather than steady-state polling noise.

pub mod api;
pub mod enums;
pub mod response;
pub mod time;
pub mod types;

mod error;
mod helpers;
mod tracker;

pub use api::{StreamSource, TwitchApi, TwitchApiBuilder, QUERY_BATCH_SIZE};
pub use enums::{Classification, StatusChange};
pub use error::{Error, FileError};
pub use tracker::{
    Poll,
    StreamTracker,
    StreamTrackerBuilder,
    StreamerStatus,
    TrackerSnapshot,
    SNAPSHOT_VERSION,
};
