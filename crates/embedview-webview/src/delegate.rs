//! The caller-implemented event contract.

use std::rc::Weak;

use embedview_common::WebViewError;

use crate::navigation::{
    NavigationAction, NavigationActionPolicy, NavigationResponse, NavigationResponsePolicy,
};

/// Receives session-level events from a web-view screen.
///
/// The four notification methods are required. The two decision methods
/// default to `Allow`.
pub trait WebViewDelegate {
    /// The user activated the exit control.
    fn on_exit(&self);

    /// The engine received an authentication challenge. The challenge itself
    /// is always answered with the platform default handling.
    fn on_credentials_needed(&self);

    /// A failure occurred. Called exactly once per occurrence.
    fn on_fail(&self, error: &WebViewError);

    /// The page URL changed. Empty when the engine has no URL.
    fn on_url_changed(&self, url: &str);

    fn on_navigation_action(&self, _action: &NavigationAction) -> NavigationActionPolicy {
        NavigationActionPolicy::Allow
    }

    fn on_navigation_response(&self, _response: &NavigationResponse) -> NavigationResponsePolicy {
        NavigationResponsePolicy::Allow
    }
}

/// Non-owning handle to a delegate. The screen observes its delegate, never
/// keeps it alive.
pub type DelegateRef = Weak<dyn WebViewDelegate>;
