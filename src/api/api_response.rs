use serde::Deserialize;

/// Envelope for Helix responses. Every endpoint wraps its payload in `data`.
#[derive(Deserialize, Debug)]
pub struct DataResponse<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

/// Response from the OAuth token endpoint.
#[derive(Deserialize, Debug)]
pub struct AccessTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
}

/// Error body returned by Helix and the OAuth endpoint.
#[derive(Deserialize, Debug)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub status: u16,
    pub message: String,
}
