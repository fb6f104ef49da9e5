//! Shell configuration

use kestrel_state::DEFAULT_ADDRESS;

/// Name the scroll bridge is exposed under in page script
pub const DEFAULT_BRIDGE_NAME: &str = "Android";

/// Shell configuration
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Address loaded when the screen opens. Normalized like typed input.
    pub home_url: String,
    /// Whether the renderer runs page script. The toolbar only auto-hides
    /// when this is on.
    pub javascript_enabled: bool,
    /// Global name of the scroll bridge in page script
    pub bridge_name: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            home_url: String::from(DEFAULT_ADDRESS),
            javascript_enabled: true,
            bridge_name: String::from(DEFAULT_BRIDGE_NAME),
        }
    }
}
