use super::StreamTracker;
use crate::api::TwitchApi;
use chrono::Duration;

/// Builder for constructing a [`StreamTracker`].
#[derive(Debug, Clone)]
pub struct StreamTrackerBuilder {
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
    pub(crate) logins: Vec<String>,
    pub(crate) cooldown: Duration,
}

impl StreamTrackerBuilder {
    pub(crate) fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client_id,
            client_secret,
            logins: Vec::new(),
            cooldown: Duration::zero(),
        }
    }

    /// Logins to track. They are normalized when the tracker is built.
    pub fn logins<I>(mut self, logins: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.logins = logins
            .into_iter()
            .map(|login| login.as_ref().to_owned())
            .collect();
        self
    }

    /// The duration a login must remain continuously offline before a went-offline transition
    /// is reported. Defaults to zero, which reports any drop immediately.
    pub fn cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Builds the [`StreamTracker`].
    pub fn build(self) -> StreamTracker {
        self.into()
    }
}

impl From<StreamTrackerBuilder> for StreamTracker {
    fn from(builder: StreamTrackerBuilder) -> Self {
        let mut tracker = StreamTracker::with_source(
            TwitchApi::new(builder.client_id, builder.client_secret),
        );

        tracker.cooldown = builder.cooldown;

        if !builder.logins.is_empty() {
            tracker.set_logins(builder.logins);
        }

        tracker
    }
}
