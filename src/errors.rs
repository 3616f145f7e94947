#[derive(Debug, thiserror::Error)]
#[error("Response body could not be decoded: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

impl DecodeError {
    /// The underlying JSON error, for line/column and category details.
    pub fn json(&self) -> &serde_json::Error {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("The URL could not be built: {0}")]
    MalformedUrl(String),

    #[error("The configuration was incomplete")]
    IncompleteConfig(),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<url::ParseError> for FetchError {
    fn from(e: url::ParseError) -> Self {
        FetchError::MalformedUrl(e.to_string())
    }
}
