//! Headless stand-in renderer
//!
//! Does not fetch anything. Every load "completes" immediately, and
//! scroll offsets fed in by hand go through the same policy the injected
//! page script applies.

use url::Url;

use kestrel_shell::{PageLifecycle, Renderer, ScrollBridge};
use kestrel_state::{ScrollSignal, ToolbarPolicy};

use crate::history::History;

/// Renderer that keeps history and reports lifecycle callbacks
#[derive(Default)]
pub struct HeadlessRenderer {
    history: History,
    lifecycle: Option<Box<dyn PageLifecycle>>,
    bridge: Option<ScrollBridge>,
    script_enabled: bool,
    /// Page-side scroll tracker, present once the tracking script ran
    tracker: Option<ToolbarPolicy>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL of the page currently shown
    pub fn current_url(&self) -> Option<&Url> {
        self.history.current()
    }

    /// Scroll the page to `offset`, as a user dragging the content would
    pub fn scroll_to(&mut self, offset: f64) {
        let (Some(tracker), Some(bridge)) = (self.tracker.as_mut(), self.bridge.as_ref()) else {
            log::debug!("Page has no scroll tracking, ignoring offset {}", offset);
            return;
        };

        match tracker.observe(offset) {
            Some(ScrollSignal::Down) => bridge.on_scroll_down(),
            Some(ScrollSignal::Up) => bridge.on_scroll_up(),
            None => {}
        }
    }

    fn show(&mut self, url: Url) {
        // A new document drops the previous page's script state
        self.tracker = None;

        if let Some(lifecycle) = &self.lifecycle {
            lifecycle.on_started(url.as_str());
            lifecycle.on_finished(url.as_str());
        }
    }
}

impl Renderer for HeadlessRenderer {
    fn load_url(&mut self, url: &str) {
        let url = match Url::parse(url) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Cannot load {}: {}", url, e);
                return;
            }
        };
        self.history.push(url.clone());
        log::trace!("History has {} entries", self.history.len());
        self.show(url);
    }

    fn go_back(&mut self) {
        match self.history.back().cloned() {
            Some(url) => self.show(url),
            None => log::debug!("No page to go back to"),
        }
    }

    fn go_forward(&mut self) {
        match self.history.forward().cloned() {
            Some(url) => self.show(url),
            None => log::debug!("No page to go forward to"),
        }
    }

    fn reload(&mut self) {
        if let Some(url) = self.history.current().cloned() {
            self.show(url);
        }
    }

    fn set_script_enabled(&mut self, enabled: bool) {
        self.script_enabled = enabled;
    }

    fn evaluate_script(&mut self, source: &str) {
        if !self.script_enabled {
            log::debug!("Scripts disabled, not running {} bytes", source.len());
            return;
        }
        // The only script the shell injects is the scroll tracker.
        // Running it again restarts tracking from the top.
        log::trace!("Evaluating script:\n{}", source);
        self.tracker.get_or_insert_with(ToolbarPolicy::new).reset();
    }

    fn set_lifecycle(&mut self, lifecycle: Box<dyn PageLifecycle>) {
        self.lifecycle = Some(lifecycle);
    }

    fn add_script_bridge(&mut self, name: &str, bridge: ScrollBridge) {
        log::debug!("Exposing scroll bridge as {}", name);
        self.bridge = Some(bridge);
    }
}
