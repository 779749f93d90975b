use super::TwitchApi;
use reqwest_middleware::ClientWithMiddleware;

/// Builder for constructing a [`TwitchApi`].
#[derive(Debug, Clone)]
pub struct TwitchApiBuilder {
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
    /// Client to use for requests.
    pub(crate) client: Option<ClientWithMiddleware>,
}

impl TwitchApiBuilder {
    pub(crate) fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client_id,
            client_secret,
            client: None,
        }
    }

    /// Client to use for requests. Defaults to a client which retries transient failures with
    /// exponential backoff.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.client = Some(client);
        self
    }

    /// Builds the [`TwitchApi`].
    pub fn build(self) -> TwitchApi {
        self.into()
    }
}
