//! Kestrel Browser Shell
//!
//! Ties the navigation state to a page renderer: user actions go in,
//! renderer callbacks come back, and the screen layout comes out.

mod bridge;
mod chrome;
mod config;
mod error;
mod event;
mod renderer;

#[cfg(test)]
mod test_utils;

pub use bridge::{scroll_tracking_script, ScrollBridge};
pub use chrome::{AddressBar, Button, ShellLayout, ADDRESS_PLACEHOLDER};
pub use config::{ShellConfig, DEFAULT_BRIDGE_NAME};
pub use error::{ShellError, ShellResult};
pub use event::{LifecycleHandle, ShellEvent};
pub use renderer::{PageLifecycle, Renderer};

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::watch;

use kestrel_state::{NavigationState, NavigationStore};
use kestrel_url::{normalize, parse_web_url};

/// Input from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Address field text changed
    EditText(String),
    /// Go button or keyboard "done"
    Commit,
    Back,
    Forward,
    Reload,
}

/// The browser screen
pub struct Shell<R: Renderer> {
    config: ShellConfig,
    store: NavigationStore,
    renderer: R,
    /// Renderer and page script callbacks, waiting to be applied
    events: UnboundedReceiver<ShellEvent>,
}

impl<R: Renderer> Shell<R> {
    /// Create the screen, register callbacks with `renderer` and load the
    /// home page
    pub fn new(config: ShellConfig, mut renderer: R) -> ShellResult<Self> {
        let home = normalize(&config.home_url);
        parse_web_url(&home).map_err(|source| ShellError::InvalidHomeUrl {
            url: config.home_url.clone(),
            source,
        })?;

        let (tx, events) = mpsc::unbounded_channel();

        renderer.set_script_enabled(config.javascript_enabled);
        renderer.set_lifecycle(Box::new(LifecycleHandle::new(tx.clone())));
        if config.javascript_enabled {
            renderer.add_script_bridge(&config.bridge_name, ScrollBridge::new(tx));
        }

        log::info!("Opening {}", home);
        renderer.load_url(&home);

        Ok(Self {
            config,
            store: NavigationStore::new(&home),
            renderer,
            events,
        })
    }

    pub fn state(&self) -> &NavigationState {
        self.store.state()
    }

    /// Receive the state after every change
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.store.subscribe()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Current screen layout
    pub fn layout(&self) -> ShellLayout {
        ShellLayout::build(self.store.state())
    }

    /// Apply a user action
    pub fn dispatch(&mut self, action: UserAction) {
        match action {
            UserAction::EditText(text) => self.store.update_edit_text(&text),
            UserAction::Commit => {
                let text = self.store.state().pending_text.clone();
                self.navigate(&text);
            }
            // Navigation buttons go straight to the renderer
            UserAction::Back => self.renderer.go_back(),
            UserAction::Forward => self.renderer.go_forward(),
            UserAction::Reload => self.renderer.reload(),
        }
    }

    /// Commit `text` as the address and load it if it changed.
    ///
    /// Returns `false` if the text did not validate.
    pub fn navigate(&mut self, text: &str) -> bool {
        let previous = self.store.state().address.clone();

        if !self.store.commit_navigation(text) {
            log::warn!("Invalid URL: {}", text);
            return false;
        }

        let address = &self.store.state().address;
        if *address != previous {
            log::info!("Navigating to: {}", address);
            self.renderer.load_url(address);
        }
        true
    }

    /// Apply every queued renderer event. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next renderer event and apply it.
    ///
    /// Returns `false` once the renderer has dropped every callback.
    pub async fn process_next(&mut self) -> bool {
        match self.events.recv().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    fn handle_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::NavigationStarted { url } => {
                log::debug!("Page started loading for {}", url);
                self.store.on_navigation_started();
            }
            ShellEvent::NavigationFinished { url } => {
                log::debug!("Page finished loading for {}", url);
                self.store.on_navigation_finished();
                if self.config.javascript_enabled {
                    let script = scroll_tracking_script(&self.config.bridge_name);
                    self.renderer.evaluate_script(&script);
                }
            }
            ShellEvent::Scroll(signal) => {
                self.store.set_toolbar_visible(signal.toolbar_visible());
            }
        }
    }
}
