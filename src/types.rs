//! Types for common values in Twitch responses.

/// The platform-assigned id of a Twitch user. Helix returns these as strings.
pub type UserId = String;

pub use crate::time::Timestamp;

// Types internally used by the crate.
use reqwest_middleware::ClientWithMiddleware;

pub(crate) type HttpClient = ClientWithMiddleware;
