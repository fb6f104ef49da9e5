//! Shell events
//!
//! Renderer callbacks may arrive on any thread. They are queued here and
//! applied to the navigation state on the shell's thread.

use tokio::sync::mpsc::UnboundedSender;

use kestrel_state::ScrollSignal;

use crate::renderer::PageLifecycle;

/// Event delivered from the renderer or page script
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    /// Renderer began loading a page
    NavigationStarted { url: String },
    /// Renderer finished loading a page
    NavigationFinished { url: String },
    /// Page script reported a scroll direction
    Scroll(ScrollSignal),
}

/// Lifecycle callbacks handed to the renderer
#[derive(Debug, Clone)]
pub struct LifecycleHandle {
    events: UnboundedSender<ShellEvent>,
}

impl LifecycleHandle {
    pub(crate) fn new(events: UnboundedSender<ShellEvent>) -> Self {
        Self { events }
    }

    fn send(&self, event: ShellEvent) {
        if let Err(e) = self.events.send(event) {
            log::trace!("Dropping {:?}, shell is gone", e.0);
        }
    }
}

impl PageLifecycle for LifecycleHandle {
    fn on_started(&self, url: &str) {
        self.send(ShellEvent::NavigationStarted {
            url: url.to_string(),
        });
    }

    fn on_finished(&self, url: &str) {
        self.send(ShellEvent::NavigationFinished {
            url: url.to_string(),
        });
    }
}
