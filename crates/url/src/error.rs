//! URL error types

use thiserror::Error;

/// URL handling result type
pub type UrlResult<T> = Result<T, UrlError>;

/// Reasons a candidate is not a loadable web URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Empty URL")]
    Empty,

    #[error("URL contains whitespace")]
    Whitespace,

    #[error("Unsupported scheme in: {0}")]
    UnsupportedScheme(String),

    #[error("Malformed URL: {0}")]
    Malformed(#[from] url::ParseError),

    #[error("Missing host")]
    MissingHost,

    #[error("Invalid host: {0}")]
    InvalidHost(String),
}
