pub(crate) mod api_response;

mod builder;

pub use builder::TwitchApiBuilder;

use api_response::{AccessTokenResponse, ApiErrorBody, DataResponse};
use crate::error::Error;
use crate::helpers::{get_default_middleware, parses_response};
use crate::response::{Stream, User};
use crate::types::HttpClient;
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

const TOKEN_HOSTNAME: &str = "https://id.twitch.tv";
const API_HOSTNAME: &str = "https://api.twitch.tv";

/// The maximum number of logins the `users` and `streams` endpoints accept in one request.
pub const QUERY_BATCH_SIZE: usize = 100;

/// The batched queries a [`crate::StreamTracker`] needs from the platform.
#[async_trait]
pub trait StreamSource {
    /// Fetches user records for a batch of at most [`QUERY_BATCH_SIZE`] logins. Logins with no
    /// account are omitted from the result.
    async fn fetch_users(&self, logins: &[String]) -> Result<Vec<User>, Error>;

    /// Fetches live streams for a batch of at most [`QUERY_BATCH_SIZE`] logins. Logins not
    /// currently broadcasting are omitted from the result.
    async fn fetch_live_streams(&self, logins: &[String]) -> Result<Vec<Stream>, Error>;
}

/// Low-level Helix API access with app token refresh and retry on transient failures.
#[derive(Debug, Clone)]
pub struct TwitchApi {
    client: HttpClient,
    /// The application's client id.
    pub client_id: String,
    client_secret: String,
    access_token: Arc<RwLock<Option<String>>>,
}

impl TwitchApi {
    /// Creates a new [`TwitchApi`] using the given application credentials.
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self::builder(client_id, client_secret).build()
    }

    /// Builder for constructing a [`TwitchApi`].
    pub fn builder(client_id: String, client_secret: String) -> TwitchApiBuilder {
        TwitchApiBuilder::new(client_id, client_secret)
    }

    fn get_api_url(&self, endpoint: &str) -> String {
        format!("{API_HOSTNAME}/helix/{endpoint}")
    }

    /// Fetches a new app access token using the client credentials grant and caches it for
    /// subsequent requests.
    pub async fn fetch_token(&self) -> Result<String, Error> {
        log::debug!("Fetching new access token");

        let response = self.client
            .post(format!("{TOKEN_HOSTNAME}/oauth2/token"))
            .query(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        match serde_json::from_slice::<AccessTokenResponse>(&body) {
            Ok(token_response) => {
                let token = token_response.access_token;

                *self.access_token.write().unwrap() = Some(token.clone());

                Ok(token)
            },
            Err(_) => {
                let message = serde_json::from_slice::<ApiErrorBody>(&body)
                    .map(|error_body| error_body.message)
                    .unwrap_or_else(|_| status.to_string());

                Err(Error::Authentication(message))
            },
        }
    }

    fn cached_token(&self) -> Option<String> {
        self.access_token.read().unwrap().clone()
    }

    async fn get<D>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<D, Error>
    where
        D: DeserializeOwned,
    {
        let url = self.get_api_url(endpoint);
        let token = match self.cached_token() {
            Some(token) => token,
            None => self.fetch_token().await?,
        };
        let mut response = self.client
            .get(&url)
            .header("Client-ID", &self.client_id)
            .bearer_auth(&token)
            .query(params)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            // The cached token expired. Fetch a fresh one and retry once.
            log::warn!("Access token rejected; refreshing");

            let token = self.fetch_token().await?;

            response = self.client
                .get(&url)
                .header("Client-ID", &self.client_id)
                .bearer_auth(&token)
                .query(params)
                .send()
                .await?;

            if response.status() == StatusCode::UNAUTHORIZED {
                return Err(Error::Authentication(
                    "Access token rejected after refresh".into()
                ));
            }
        }

        parses_response(response).await
    }

    /// Gets users by login. Logins with no account are omitted from the result.
    pub async fn get_users(&self, logins: &[String]) -> Result<Vec<User>, Error> {
        if logins.is_empty() {
            return Ok(Vec::new());
        }

        let params = logins
            .iter()
            .map(|login| ("login", login.as_str()))
            .collect::<Vec<_>>();
        let response: DataResponse<User> = self.get("users", &params).await?;

        Ok(response.data)
    }

    /// Gets live streams by login. Logins not currently broadcasting are omitted from the
    /// result.
    pub async fn get_streams(&self, logins: &[String]) -> Result<Vec<Stream>, Error> {
        if logins.is_empty() {
            return Ok(Vec::new());
        }

        let params = logins
            .iter()
            .map(|login| ("user_login", login.as_str()))
            .collect::<Vec<_>>();
        let response: DataResponse<Stream> = self.get("streams", &params).await?;

        Ok(response.data)
    }
}

#[async_trait]
impl StreamSource for TwitchApi {
    async fn fetch_users(&self, logins: &[String]) -> Result<Vec<User>, Error> {
        self.get_users(logins).await
    }

    async fn fetch_live_streams(&self, logins: &[String]) -> Result<Vec<Stream>, Error> {
        self.get_streams(logins).await
    }
}

impl From<TwitchApiBuilder> for TwitchApi {
    fn from(builder: TwitchApiBuilder) -> Self {
        let client = builder.client
            .unwrap_or_else(get_default_middleware);

        Self {
            client,
            client_id: builder.client_id,
            client_secret: builder.client_secret,
            access_token: Arc::new(RwLock::new(None)),
        }
    }
}
