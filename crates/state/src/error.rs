//! Navigation error types

use kestrel_url::UrlError;
use thiserror::Error;

/// Error kept in the navigation state for the address bar to display
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Committed text did not validate after normalization
    #[error("Invalid URL")]
    InvalidUrlInput {
        /// Text the user committed
        input: String,
        /// Normalized form that failed validation
        normalized: String,
        /// Why validation rejected it
        #[source]
        reason: UrlError,
    },
}
