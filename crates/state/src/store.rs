//! Navigation state store
//!
//! Owns the [`NavigationState`] and publishes every change to subscribers.

use tokio::sync::watch;

use kestrel_url::{normalize, parse_web_url};

use crate::error::NavigationError;
use crate::state::NavigationState;

/// Single-writer store for the browser screen state
///
/// Mutations take `&mut self`; callbacks from other threads must be
/// brought onto the owning thread before calling in.
#[derive(Debug)]
pub struct NavigationStore {
    state: NavigationState,
    changes: watch::Sender<NavigationState>,
}

impl NavigationStore {
    /// Create a store opening on `address`
    pub fn new(address: &str) -> Self {
        let state = NavigationState::new(address);
        let (changes, _) = watch::channel(state.clone());
        Self { state, changes }
    }

    /// Current state
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Receive the state after every mutation that changed it
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.changes.subscribe()
    }

    /// Replace the text in the address field. Never fails.
    pub fn update_edit_text(&mut self, text: &str) {
        self.update(|state| {
            state.pending_text = text.to_string();
            state.last_error = None;
        });
    }

    /// Normalize and validate `candidate`, and make it the address if valid.
    ///
    /// Returns `true` when the address was committed. On failure the address
    /// is left alone and the error is kept in the state.
    pub fn commit_navigation(&mut self, candidate: &str) -> bool {
        let normalized = normalize(candidate);

        match parse_web_url(&normalized) {
            Ok(_) => {
                log::debug!("Committing navigation to {}", normalized);
                self.update(|state| {
                    state.address = normalized;
                    state.last_error = None;
                });
                true
            }
            Err(reason) => {
                log::debug!("Rejected address {:?}: {}", candidate, reason);
                self.update(|state| {
                    state.last_error = Some(NavigationError::InvalidUrlInput {
                        input: candidate.to_string(),
                        normalized,
                        reason,
                    });
                });
                false
            }
        }
    }

    /// Renderer started a navigation. Redirects may call this repeatedly.
    pub fn on_navigation_started(&mut self) {
        self.set_loading(true);
    }

    /// Renderer finished a navigation.
    ///
    /// Not paired with starts: one finish ends loading no matter how many
    /// starts came before it.
    pub fn on_navigation_finished(&mut self) {
        self.set_loading(false);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.update(|state| state.is_loading = loading);
    }

    pub fn set_toolbar_visible(&mut self, visible: bool) {
        self.update(|state| state.toolbar_visible = visible);
    }

    fn update(&mut self, mutate: impl FnOnce(&mut NavigationState)) {
        let before = self.state.clone();
        mutate(&mut self.state);

        if self.state != before {
            log::trace!("Navigation state changed: {:?}", self.state);
            self.changes.send_replace(self.state.clone());
        }
    }
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new(crate::state::DEFAULT_ADDRESS)
    }
}
