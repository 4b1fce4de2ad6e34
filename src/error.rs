use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpUtilError {
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("invalid endpoint header `{header}`: {reason}")]
    InvalidEndpoint { header: String, reason: String },

    #[error("task was cancelled before completion")]
    Cancelled,
}

impl HttpUtilError {
    pub(crate) fn invalid_endpoint(header: &str, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            header: header.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HttpUtilError>;
