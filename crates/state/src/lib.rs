//! Kestrel Navigation State
//!
//! The observable state behind the browser screen, and the
//! scroll policy that drives toolbar visibility.

mod error;
mod scroll;
mod state;
mod store;

pub use error::NavigationError;
pub use scroll::{ScrollSignal, ToolbarPolicy, HIDE_THRESHOLD, SHOW_THRESHOLD};
pub use state::{NavigationState, PageStatus, DEFAULT_ADDRESS};
pub use store::NavigationStore;
