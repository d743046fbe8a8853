//! The presenter: builds the session request and mediates between the
//! screen and the caller's delegate.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use embedview_common::WebViewError;
use tracing::debug;

use crate::delegate::{DelegateRef, WebViewDelegate};
use crate::navigation::{
    NavigationAction, NavigationActionPolicy, NavigationResponse, NavigationResponsePolicy,
};
use crate::request::{build_request, BuiltRequest, RequestParams};

/// What the presenter needs from its screen.
pub trait ScreenView {
    /// Issue the built request to the browser surface.
    fn load(&self, request: BuiltRequest);
}

/// Screen-facing side of the presenter.
pub trait WebPresenting {
    /// Bind the screen and issue the session request.
    fn attach(&self, screen: Weak<dyn ScreenView>);
    fn exit_pressed(&self);
    fn needs_authentication(&self);
    fn did_init_navigation_action(&self, action: &NavigationAction) -> NavigationActionPolicy;
    fn did_receive_navigation_response(
        &self,
        response: &NavigationResponse,
    ) -> NavigationResponsePolicy;
    fn did_change_url(&self, url: &str);
}

/// Holds the session's request parameters and a non-owning reference to
/// both the screen and the delegate.
pub struct WebPresenter {
    params: RequestParams,
    delegate: Option<DelegateRef>,
    screen: RefCell<Option<Weak<dyn ScreenView>>>,
    request_issued: Cell<bool>,
}

impl WebPresenter {
    pub fn new(params: RequestParams, delegate: Option<DelegateRef>) -> Self {
        Self {
            params,
            delegate,
            screen: RefCell::new(None),
            request_issued: Cell::new(false),
        }
    }

    pub fn params(&self) -> &RequestParams {
        &self.params
    }

    /// The delegate, if one was supplied and is still alive.
    fn delegate(&self) -> Option<Rc<dyn WebViewDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    fn report(&self, error: WebViewError) {
        if let Some(delegate) = self.delegate() {
            delegate.on_fail(&error);
        }
    }

    /// Issue the request, or report why it cannot be built. Leaves the
    /// request unissued when the screen is already gone.
    fn load_screen(&self) {
        let Some(screen) = self.screen.borrow().as_ref().and_then(Weak::upgrade) else {
            debug!("screen released before the request was issued");
            return;
        };
        self.request_issued.set(true);
        match build_request(&self.params) {
            Ok(request) => {
                debug!(url = %request.url(), headers = request.headers().len(), "issuing request");
                screen.load(request);
            }
            Err(error) => self.report(error),
        }
    }
}

impl WebPresenting for WebPresenter {
    fn attach(&self, screen: Weak<dyn ScreenView>) {
        *self.screen.borrow_mut() = Some(screen);
        if self.request_issued.get() {
            debug!("screen re-attached; request already issued");
            return;
        }
        self.load_screen();
    }

    fn exit_pressed(&self) {
        if let Some(delegate) = self.delegate() {
            delegate.on_exit();
        }
    }

    fn needs_authentication(&self) {
        if let Some(delegate) = self.delegate() {
            delegate.on_credentials_needed();
        }
    }

    fn did_init_navigation_action(&self, action: &NavigationAction) -> NavigationActionPolicy {
        self.delegate()
            .map(|delegate| delegate.on_navigation_action(action))
            .unwrap_or(NavigationActionPolicy::Allow)
    }

    fn did_receive_navigation_response(
        &self,
        response: &NavigationResponse,
    ) -> NavigationResponsePolicy {
        if response.status.is_none() {
            return NavigationResponsePolicy::Allow;
        }
        if let Some(status) = response.error_status() {
            self.report(WebViewError::HttpError(status));
            return NavigationResponsePolicy::Cancel;
        }
        self.delegate()
            .map(|delegate| delegate.on_navigation_response(response))
            .unwrap_or(NavigationResponsePolicy::Allow)
    }

    fn did_change_url(&self, url: &str) {
        if let Some(delegate) = self.delegate() {
            delegate.on_url_changed(url);
        }
    }
}
