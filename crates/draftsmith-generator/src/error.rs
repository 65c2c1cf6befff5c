use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Empty response from provider")]
    EmptyResponse,

    /// Transport failure, non-2xx status, or content that is not JSON.
    #[error("{0}")]
    Provider(String),

    /// Valid JSON that does not have the shape of a generated design.
    #[error("Malformed design from provider: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for GenerateError {
    fn from(e: reqwest::Error) -> Self {
        GenerateError::Provider(e.to_string())
    }
}
