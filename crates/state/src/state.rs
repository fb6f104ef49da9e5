//! Navigation state
//!
//! Plain data read by the presentation layer.

use serde::{Serialize, Serializer};

use crate::error::NavigationError;

/// Address the screen opens on
pub const DEFAULT_ADDRESS: &str = "https://google.com";

/// State of the browser screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    /// Last committed, normalized URL
    pub address: String,
    /// Raw text shown in the address field
    pub pending_text: String,
    /// Whether the renderer is between navigation start and finish
    pub is_loading: bool,
    /// Error from the last failed commit
    #[serde(serialize_with = "serialize_error")]
    pub last_error: Option<NavigationError>,
    /// Whether the address bar and navigation bar are shown
    pub toolbar_visible: bool,
}

impl NavigationState {
    /// Create the initial state for a screen opening on `address`
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            pending_text: address.to_string(),
            is_loading: false,
            last_error: None,
            toolbar_visible: true,
        }
    }

    /// Whether the error indicator should be shown
    pub fn has_error(&self) -> bool {
        self.last_error.is_some()
    }

    /// Address and loading flag, as handed to the page surface
    pub fn page_status(&self) -> PageStatus {
        PageStatus {
            url: self.address.clone(),
            loading: self.is_loading,
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}

/// What the page surface needs to know
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageStatus {
    pub url: String,
    pub loading: bool,
}

fn serialize_error<S>(error: &Option<NavigationError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match error {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}
