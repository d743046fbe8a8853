//! Embeddable web-view component.
//!
//! A presenter/screen pair over a platform browser engine:
//! - Request construction from a URL, query parameters and extra headers
//! - Navigation and authentication events forwarded to a caller delegate
//! - HTTP error responses surfaced as typed failures
//! - Title, progress and URL observation driving the native chrome
//! - Script dialogs presented on the UI thread

pub mod delegate;
pub mod dialog;
pub mod engine;
pub mod factory;
pub mod navigation;
pub mod observe;
pub mod presenter;
pub mod request;
pub mod screen;

#[cfg(test)]
pub(crate) mod test_support;

pub use delegate::{DelegateRef, WebViewDelegate};
pub use dialog::{Dialog, DialogKind, DialogQueue};
pub use embedview_common::WebViewError;
pub use engine::{BrowserSurface, SurfaceHandler, SurfaceProperties};
pub use factory::WebViewFactory;
pub use navigation::{
    AuthChallenge, AuthChallengeDisposition, NavigationAction, NavigationActionPolicy,
    NavigationResponse, NavigationResponsePolicy, NavigationType,
};
pub use observe::{Observable, Observation};
pub use presenter::{ScreenView, WebPresenter, WebPresenting};
pub use request::{build_request, BuiltRequest, RequestParams};
pub use screen::{ScreenChrome, ScreenState, WebScreen};

#[cfg(feature = "wry")]
pub use engine::wry_surface::WrySurface;
