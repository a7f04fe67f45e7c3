use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("empty record at {0}")]
    EmptyRecord(String),

    #[error("service returned status={status}, body={body}")]
    Status { status: u16, body: String },
}
