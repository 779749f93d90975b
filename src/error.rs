use reqwest::StatusCode;

/// Errors related to reading and writing snapshot files.
#[derive(thiserror::Error, Debug)]
pub enum FileError {
    #[error("Filesystem error: {}", .0)]
    FileSystem(#[from] std::io::Error),
    #[error("Error parsing file contents: {}", .0)]
    Parse(#[from] serde_json::Error),
}

/// Any error that can occur when making requests or tracking logins.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unexpected response: {}", .0)]
    Response(String),
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    #[error("Error {}", .0)]
    Http(StatusCode),
    #[error("Authentication failed: {}", .0)]
    Authentication(String),
    #[error("Rate limit exceeded")]
    RateLimited,
    #[error("Unsupported snapshot version {}", .0)]
    UnsupportedSnapshotVersion(u32),
    #[error("Snapshot file error: {}", .0)]
    File(#[from] FileError),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}
