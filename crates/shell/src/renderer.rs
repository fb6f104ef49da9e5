//! Page renderer interface
//!
//! The renderer fetches and draws pages. The shell only drives it and
//! listens to its lifecycle callbacks.

use crate::bridge::ScrollBridge;

/// Embeddable web content surface
///
/// Every method is fire-and-forget. Load outcomes come back later
/// through the registered [`PageLifecycle`].
pub trait Renderer {
    /// Start loading `url`, replacing whatever was loading before
    fn load_url(&mut self, url: &str);

    fn go_back(&mut self);

    fn go_forward(&mut self);

    fn reload(&mut self);

    /// Allow or forbid page script
    fn set_script_enabled(&mut self, enabled: bool);

    /// Run `source` in the current page
    fn evaluate_script(&mut self, source: &str);

    /// Register the load lifecycle callbacks
    fn set_lifecycle(&mut self, lifecycle: Box<dyn PageLifecycle>);

    /// Expose `bridge` to page script under the global `name`
    fn add_script_bridge(&mut self, name: &str, bridge: ScrollBridge);
}

/// Load lifecycle callbacks, invoked once per load attempt
///
/// May be called from the renderer's own thread.
pub trait PageLifecycle: Send {
    fn on_started(&self, url: &str);

    fn on_finished(&self, url: &str);
}
