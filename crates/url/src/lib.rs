//! Kestrel URL handling
//!
//! Turns address-bar text into something a page renderer can load.

mod error;
mod normalize;
mod validate;

pub use error::{UrlError, UrlResult};
pub use normalize::{normalize, search_url, SEARCH_URL_PREFIX};
pub use validate::{is_valid_url, parse_web_url};
