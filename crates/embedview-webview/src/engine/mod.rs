//! The seam between the screen and a browser engine.
//!
//! A `BrowserSurface` is the engine-owned rendering surface: it loads
//! requests and exposes its title, progress and URL as observables. The
//! engine calls back into a `SurfaceHandler` for every decision point.

use std::rc::Weak;

use crate::navigation::{
    AuthChallenge, AuthChallengeDisposition, NavigationAction, NavigationActionPolicy,
    NavigationResponse, NavigationResponsePolicy,
};
use crate::observe::Observable;
use crate::request::BuiltRequest;

#[cfg(feature = "wry")]
pub mod wry_surface;

/// State the engine publishes about the current page.
pub struct SurfaceProperties {
    /// Document title, `None` before the first title is known.
    pub title: Observable<Option<String>>,
    /// Load progress in `[0.0, 1.0]`.
    pub estimated_progress: Observable<f64>,
    /// Current URL, `None` when the engine has none.
    pub url: Observable<Option<String>>,
}

impl Default for SurfaceProperties {
    fn default() -> Self {
        Self {
            title: Observable::new(None),
            estimated_progress: Observable::new(0.0),
            url: Observable::new(None),
        }
    }
}

/// A browser engine's rendering surface.
pub trait BrowserSurface {
    /// Issue `request` to the engine.
    fn load(&self, request: &BuiltRequest);

    fn properties(&self) -> &SurfaceProperties;

    /// Install the receiver of navigation, authentication and dialog
    /// callbacks. Held weakly: the handler owns the surface.
    fn set_handler(&self, handler: Weak<dyn SurfaceHandler>);

    /// Resize the surface to fill `width` x `height` logical pixels.
    fn resize(&self, _width: f64, _height: f64) {}
}

/// Receiver of the engine's decision points and UI requests.
pub trait SurfaceHandler {
    fn decide_navigation_action(&self, action: &NavigationAction) -> NavigationActionPolicy;

    fn decide_navigation_response(&self, response: &NavigationResponse)
        -> NavigationResponsePolicy;

    fn did_receive_auth_challenge(&self, challenge: &AuthChallenge) -> AuthChallengeDisposition;

    /// `window.alert`. `completion` runs once the user acknowledges it.
    fn run_alert(&self, message: String, completion: Box<dyn FnOnce() + Send>);

    /// `window.confirm`. `completion` receives the user's choice.
    fn run_confirm(&self, message: String, completion: Box<dyn FnOnce(bool) + Send>);

    /// `window.prompt`. `completion` receives the entered text, or `None`
    /// when the prompt is dismissed.
    fn run_prompt(
        &self,
        message: String,
        default_text: Option<String>,
        completion: Box<dyn FnOnce(Option<String>) + Send>,
    );
}
