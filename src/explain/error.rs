use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(reqwest::Error),

    #[error("generator returned invalid response: {0}")]
    InvalidResponse(String),

    #[error("generator API error: status={status}, body={body}")]
    Api { status: u16, body: String },
}

impl From<reqwest::Error> for GeneratorError {
    // Request URLs can carry credentials; never let them reach a log line
    fn from(e: reqwest::Error) -> Self {
        GeneratorError::Http(e.without_url())
    }
}
