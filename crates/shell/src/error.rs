//! Shell error types

use kestrel_url::UrlError;
use thiserror::Error;

/// Shell result type
pub type ShellResult<T> = Result<T, ShellError>;

/// Shell errors
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Invalid home URL {url:?}: {source}")]
    InvalidHomeUrl {
        url: String,
        #[source]
        source: UrlError,
    },
}
