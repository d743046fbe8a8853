//! Hand-written recording fakes shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use embedview_common::WebViewError;

use crate::delegate::WebViewDelegate;
use crate::dialog::Dialog;
use crate::engine::{BrowserSurface, SurfaceHandler, SurfaceProperties};
use crate::navigation::{
    NavigationAction, NavigationActionPolicy, NavigationResponse, NavigationResponsePolicy,
};
use crate::presenter::ScreenView;
use crate::request::BuiltRequest;
use crate::screen::ScreenChrome;

/// Ordered log shared between fakes, for asserting cross-object ordering.
pub(crate) type Journal = Rc<RefCell<Vec<String>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DelegateEvent {
    Exit,
    CredentialsNeeded,
    Fail(WebViewError),
    UrlChanged(String),
}

#[derive(Default)]
pub(crate) struct RecordingDelegate {
    events: RefCell<Vec<DelegateEvent>>,
    pub journal: Journal,
    pub action_policy: Cell<NavigationActionPolicy>,
    pub response_policy: Cell<NavigationResponsePolicy>,
    pub response_queries: Cell<usize>,
}

impl RecordingDelegate {
    pub fn with_journal(journal: &Journal) -> Self {
        Self {
            journal: Rc::clone(journal),
            ..Default::default()
        }
    }

    pub fn events(&self) -> Vec<DelegateEvent> {
        self.events.borrow().clone()
    }

    fn record(&self, event: DelegateEvent) {
        self.journal.borrow_mut().push(format!("delegate {event:?}"));
        self.events.borrow_mut().push(event);
    }
}

impl WebViewDelegate for RecordingDelegate {
    fn on_exit(&self) {
        self.record(DelegateEvent::Exit);
    }

    fn on_credentials_needed(&self) {
        self.record(DelegateEvent::CredentialsNeeded);
    }

    fn on_fail(&self, error: &WebViewError) {
        self.record(DelegateEvent::Fail(error.clone()));
    }

    fn on_url_changed(&self, url: &str) {
        self.record(DelegateEvent::UrlChanged(url.to_string()));
    }

    fn on_navigation_action(&self, _action: &NavigationAction) -> NavigationActionPolicy {
        self.action_policy.get()
    }

    fn on_navigation_response(&self, _response: &NavigationResponse) -> NavigationResponsePolicy {
        self.response_queries.set(self.response_queries.get() + 1);
        self.response_policy.get()
    }
}

/// A bare `ScreenView` that keeps every request it is asked to load.
#[derive(Default)]
pub(crate) struct RecordingView {
    pub loads: RefCell<Vec<BuiltRequest>>,
}

impl ScreenView for RecordingView {
    fn load(&self, request: BuiltRequest) {
        self.loads.borrow_mut().push(request);
    }
}

#[derive(Default)]
struct SurfaceInner {
    properties: SurfaceProperties,
    loads: RefCell<Vec<BuiltRequest>>,
    handler: RefCell<Option<Weak<dyn SurfaceHandler>>>,
    echo_url_on_load: Cell<bool>,
    journal: Journal,
}

/// Scriptable browser surface. Clones share state, so a test keeps one
/// clone to drive the engine side while the screen owns another.
#[derive(Clone, Default)]
pub(crate) struct RecordingSurface {
    inner: Rc<SurfaceInner>,
}

impl RecordingSurface {
    pub fn with_journal(journal: &Journal) -> Self {
        Self {
            inner: Rc::new(SurfaceInner {
                journal: Rc::clone(journal),
                ..Default::default()
            }),
        }
    }

    /// Publish the request URL on load, the way real engines do.
    pub fn echo_url_on_load(&self) {
        self.inner.echo_url_on_load.set(true);
    }

    pub fn loads(&self) -> Vec<String> {
        self.inner
            .loads
            .borrow()
            .iter()
            .map(|r| r.url().to_string())
            .collect()
    }

    pub fn handler(&self) -> Option<Rc<dyn SurfaceHandler>> {
        self.inner.handler.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub fn set_title(&self, title: Option<&str>) {
        self.inner.properties.title.set(title.map(str::to_string));
    }

    pub fn set_progress(&self, progress: f64) {
        self.inner.properties.estimated_progress.set(progress);
    }

    pub fn set_url(&self, url: Option<&str>) {
        self.inner.properties.url.set(url.map(str::to_string));
    }

    pub fn observer_count(&self) -> usize {
        let props = &self.inner.properties;
        props.title.observer_count()
            + props.estimated_progress.observer_count()
            + props.url.observer_count()
    }
}

impl BrowserSurface for RecordingSurface {
    fn load(&self, request: &BuiltRequest) {
        self.inner
            .journal
            .borrow_mut()
            .push(format!("load {}", request.url()));
        self.inner.loads.borrow_mut().push(request.clone());
        if self.inner.echo_url_on_load.get() {
            self.set_url(Some(request.url().as_str()));
        }
    }

    fn properties(&self) -> &SurfaceProperties {
        &self.inner.properties
    }

    fn set_handler(&self, handler: Weak<dyn SurfaceHandler>) {
        *self.inner.handler.borrow_mut() = Some(handler);
    }
}

#[derive(Default)]
struct ChromeInner {
    titles: RefCell<Vec<Option<String>>>,
    indicator: RefCell<Vec<bool>>,
    exit_controls: Cell<usize>,
    dialogs: RefCell<Vec<Dialog>>,
}

/// Records every chrome mutation. Clones share state.
#[derive(Clone, Default)]
pub(crate) struct RecordingChrome {
    inner: Rc<ChromeInner>,
}

impl RecordingChrome {
    pub fn titles(&self) -> Vec<Option<String>> {
        self.inner.titles.borrow().clone()
    }

    /// Every indicator change, in order.
    pub fn indicator_changes(&self) -> Vec<bool> {
        self.inner.indicator.borrow().clone()
    }

    pub fn exit_controls(&self) -> usize {
        self.inner.exit_controls.get()
    }

    pub fn take_dialogs(&self) -> Vec<Dialog> {
        std::mem::take(&mut *self.inner.dialogs.borrow_mut())
    }
}

impl ScreenChrome for RecordingChrome {
    fn set_title(&self, title: Option<&str>) {
        self.inner.titles.borrow_mut().push(title.map(str::to_string));
    }

    fn set_loading_indicator(&self, visible: bool) {
        self.inner.indicator.borrow_mut().push(visible);
    }

    fn show_exit_control(&self) {
        self.inner.exit_controls.set(self.inner.exit_controls.get() + 1);
    }

    fn present_dialog(&self, dialog: Dialog) {
        self.inner.dialogs.borrow_mut().push(dialog);
    }
}
