//! Browser chrome layout
//!
//! Address bar, progress bar and navigation bar, described as data for
//! whatever front end draws them.

use kestrel_state::NavigationState;

use crate::UserAction;

/// Placeholder shown in an empty address field
pub const ADDRESS_PLACEHOLDER: &str = "Enter URL";

/// A clickable button
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    /// Button label
    pub label: &'static str,
    /// Action dispatched on click
    pub action: UserAction,
}

/// Address bar row
#[derive(Debug, Clone, PartialEq)]
pub struct AddressBar {
    /// Current text content
    pub text: String,
    pub placeholder: &'static str,
    /// Commits the text, same as the keyboard "done" action
    pub go_button: Button,
    /// Whether the warning icon is shown
    pub error_visible: bool,
}

/// Full screen layout, top to bottom
#[derive(Debug, Clone, PartialEq)]
pub struct ShellLayout {
    /// Hidden while the page is scrolled down
    pub address_bar: Option<AddressBar>,
    /// URL the page surface shows
    pub page_url: String,
    /// Linear progress bar under the page
    pub progress_visible: bool,
    /// Back, forward, reload. Hidden together with the address bar.
    pub nav_bar: Option<[Button; 3]>,
}

impl ShellLayout {
    /// Lay out the screen for `state`
    pub fn build(state: &NavigationState) -> Self {
        let address_bar = state.toolbar_visible.then(|| AddressBar {
            text: state.pending_text.clone(),
            placeholder: ADDRESS_PLACEHOLDER,
            go_button: Button {
                label: "Go",
                action: UserAction::Commit,
            },
            error_visible: state.has_error(),
        });

        let nav_bar = state.toolbar_visible.then(|| {
            [
                Button {
                    label: "Back",
                    action: UserAction::Back,
                },
                Button {
                    label: "Forward",
                    action: UserAction::Forward,
                },
                Button {
                    label: "Refresh",
                    action: UserAction::Reload,
                },
            ]
        });

        let page = state.page_status();

        Self {
            address_bar,
            page_url: page.url,
            progress_visible: page.loading,
            nav_bar,
        }
    }

    /// Whether the toolbars are on screen
    pub fn toolbar_visible(&self) -> bool {
        self.address_bar.is_some()
    }
}
