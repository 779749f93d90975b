use crate::api::api_response::ApiErrorBody;
use crate::error::{Error, FileError};
use std::path::PathBuf;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{
    RetryTransientMiddleware,
    policies::ExponentialBackoff,
};
use serde::de::DeserializeOwned;

/// Builds the default client. Transient failures (rate limiting, 5xx responses) are retried
/// with exponential backoff before an error is surfaced.
pub fn get_default_middleware() -> ClientWithMiddleware {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);

    ClientBuilder::new(reqwest::Client::new())
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
}

pub async fn check_response(response: reqwest::Response) -> Result<bytes::Bytes, Error> {
    let status = response.status();

    match status.as_u16() {
        // The retry middleware already backed off and retried; at this point the limit is
        // genuinely exhausted.
        429 => Err(Error::RateLimited),
        400..=599 => {
            let body = response.bytes().await?;

            // Helix error bodies carry a readable message.
            if let Ok(error_body) = serde_json::from_slice::<ApiErrorBody>(&body) {
                Err(Error::Response(format!("{} ({status})", error_body.message)))
            } else {
                Err(Error::Http(status))
            }
        },
        _ => Ok(response.bytes().await?),
    }
}

pub async fn parses_response<D>(response: reqwest::Response) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let body = check_response(response).await?;

    Ok(serde_json::from_slice::<D>(&body)?)
}

/// Writes a file by writing to a temporary file first and renaming it over the destination so
/// that a crash mid-write never leaves a truncated file behind.
pub async fn write_file_atomic(filepath: PathBuf, bytes: &[u8]) -> Result<(), FileError> {
    let temp_filepath = filepath.with_extension("tmp");

    async_fs::write(&temp_filepath, bytes).await?;
    async_fs::rename(&temp_filepath, &filepath).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_files_without_leaving_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let filepath = dir.path().join("state.json");

        write_file_atomic(filepath.clone(), b"{}").await.unwrap();

        assert_eq!(std::fs::read_to_string(&filepath).unwrap(), "{}");
        assert!(!dir.path().join("state.tmp").exists());
    }
}
