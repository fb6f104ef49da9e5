//! Script bridge exposed to page content
//!
//! Page script is untrusted. The bridge offers exactly two calls and
//! nothing that reaches further into the host.

use tokio::sync::mpsc::UnboundedSender;

use kestrel_state::{ScrollSignal, HIDE_THRESHOLD, SHOW_THRESHOLD};

use crate::event::ShellEvent;

/// Scroll direction callbacks callable from page script
#[derive(Debug, Clone)]
pub struct ScrollBridge {
    events: UnboundedSender<ShellEvent>,
}

impl ScrollBridge {
    pub(crate) fn new(events: UnboundedSender<ShellEvent>) -> Self {
        Self { events }
    }

    /// Page scrolled down past the hide threshold
    pub fn on_scroll_down(&self) {
        self.send(ScrollSignal::Down);
    }

    /// Page scrolled up, or is near the top
    pub fn on_scroll_up(&self) {
        self.send(ScrollSignal::Up);
    }

    fn send(&self, signal: ScrollSignal) {
        if self.events.send(ShellEvent::Scroll(signal)).is_err() {
            log::trace!("Dropping scroll signal {:?}, shell is gone", signal);
        }
    }
}

/// Script injected after each load to report scroll direction through
/// the bridge named `bridge_name`
pub fn scroll_tracking_script(bridge_name: &str) -> String {
    format!(
        r#"var lastScrollTop = 0;
window.onscroll = function() {{
    var currentScrollTop = document.documentElement.scrollTop || document.body.scrollTop;
    if (currentScrollTop > lastScrollTop && currentScrollTop > {hide}) {{
        {bridge}.onScrollDown();
    }} else if (currentScrollTop < lastScrollTop || currentScrollTop <= {show}) {{
        {bridge}.onScrollUp();
    }}
    lastScrollTop = currentScrollTop <= 0 ? 0 : currentScrollTop;
}};"#,
        hide = HIDE_THRESHOLD,
        show = SHOW_THRESHOLD,
        bridge = bridge_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_bridge_sends_signals() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let bridge = ScrollBridge::new(tx);

        bridge.on_scroll_down();
        bridge.on_scroll_up();

        assert!(matches!(rx.try_recv(), Ok(ShellEvent::Scroll(ScrollSignal::Down))));
        assert!(matches!(rx.try_recv(), Ok(ShellEvent::Scroll(ScrollSignal::Up))));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_bridge_survives_closed_shell() {
        let (tx, rx) = mpsc::unbounded_channel();
        let bridge = ScrollBridge::new(tx);
        drop(rx);
        bridge.on_scroll_down();
    }

    #[test]
    fn test_script_uses_thresholds_and_bridge_name() {
        let script = scroll_tracking_script("Android");
        assert!(script.contains("currentScrollTop > 50"));
        assert!(script.contains("currentScrollTop <= 20"));
        assert!(script.contains("Android.onScrollDown();"));
        assert!(script.contains("Android.onScrollUp();"));
        assert!(!script.contains("{bridge}"));
    }
}
