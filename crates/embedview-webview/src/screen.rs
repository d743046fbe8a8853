//! The screen: owns the browser surface and its native chrome.
//!
//! `WebScreen` observes the surface's title, progress and URL, renders the
//! loading indicator and exit control through a host-provided
//! `ScreenChrome`, presents script dialogs on the UI thread, and forwards
//! every engine decision point to its presenter.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::dialog::{Dialog, DialogQueue};
use crate::engine::{BrowserSurface, SurfaceHandler};
use crate::navigation::{
    AuthChallenge, AuthChallengeDisposition, NavigationAction, NavigationActionPolicy,
    NavigationResponse, NavigationResponsePolicy,
};
use crate::observe::Observation;
use crate::presenter::{ScreenView, WebPresenting};
use crate::request::BuiltRequest;

/// Native UI around the browser surface. Implemented by the host.
pub trait ScreenChrome {
    /// Show `title` in the navigation bar, or clear it.
    fn set_title(&self, title: Option<&str>);

    /// Show or hide the loading indicator in the trailing navigation slot.
    fn set_loading_indicator(&self, visible: bool);

    /// Show the exit control. Activating it must call
    /// `WebScreen::exit_pressed`.
    fn show_exit_control(&self);

    /// Present a script dialog modally and complete it with the user's
    /// answer.
    fn present_dialog(&self, dialog: Dialog);
}

/// Session lifecycle of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Unattached,
    Loading,
    Loaded,
    Cancelled,
    Exited,
}

impl ScreenState {
    fn is_terminal(self) -> bool {
        matches!(self, ScreenState::Cancelled | ScreenState::Exited)
    }
}

/// A browser surface with its chrome, driven by a presenter.
pub struct WebScreen {
    surface: Box<dyn BrowserSurface>,
    chrome: Box<dyn ScreenChrome>,
    presenter: Rc<dyn WebPresenting>,
    state: Cell<ScreenState>,
    loading_indicator: Cell<bool>,
    observations: RefCell<Vec<Observation>>,
    dialogs: DialogQueue,
}

impl WebScreen {
    pub fn new(
        surface: Box<dyn BrowserSurface>,
        chrome: Box<dyn ScreenChrome>,
        presenter: Rc<dyn WebPresenting>,
    ) -> Self {
        Self {
            surface,
            chrome,
            presenter,
            state: Cell::new(ScreenState::Unattached),
            loading_indicator: Cell::new(false),
            observations: RefCell::new(Vec::new()),
            dialogs: DialogQueue::new(),
        }
    }

    /// Attach the screen: show the exit control, start observing the
    /// surface, install the engine handler and hand the screen to the
    /// presenter, which issues the session request.
    ///
    /// Only the first call has an effect.
    pub fn load_view(self: &Rc<Self>) {
        if !self.observations.borrow().is_empty() {
            return;
        }

        self.chrome.show_exit_control();
        self.observe_surface();

        let handler: Weak<dyn SurfaceHandler> = Rc::downgrade(self) as Weak<dyn SurfaceHandler>;
        self.surface.set_handler(handler);

        let view: Weak<dyn ScreenView> = Rc::downgrade(self) as Weak<dyn ScreenView>;
        self.presenter.attach(view);
    }

    fn observe_surface(self: &Rc<Self>) {
        let props = self.surface.properties();

        let weak = Rc::downgrade(self);
        let title = props.title.observe(move |title: &Option<String>| {
            if let Some(screen) = weak.upgrade() {
                screen.title_changed(title.as_deref());
            }
        });

        let weak = Rc::downgrade(self);
        let progress = props.estimated_progress.observe(move |progress: &f64| {
            if let Some(screen) = weak.upgrade() {
                screen.progress_changed(*progress);
            }
        });

        let weak = Rc::downgrade(self);
        let url = props.url.observe(move |url: &Option<String>| {
            if let Some(screen) = weak.upgrade() {
                screen.url_changed(url.as_deref());
            }
        });

        *self.observations.borrow_mut() = vec![title, progress, url];
    }

    pub fn state(&self) -> ScreenState {
        self.state.get()
    }

    pub fn is_loading_indicator_visible(&self) -> bool {
        self.loading_indicator.get()
    }

    /// The exit control was activated.
    pub fn exit_pressed(&self) {
        self.transition(ScreenState::Exited);
        self.presenter.exit_pressed();
    }

    /// Present every queued dialog. Call from the UI thread.
    ///
    /// Returns the number of dialogs presented.
    pub fn pump_dialogs(&self) -> usize {
        let pending = self.dialogs.drain();
        let count = pending.len();
        for dialog in pending {
            self.chrome.present_dialog(dialog);
        }
        count
    }

    /// Handle for queueing dialogs from other threads.
    pub fn dialog_queue(&self) -> DialogQueue {
        self.dialogs.clone()
    }

    /// Resize the browser surface.
    pub fn resize(&self, width: f64, height: f64) {
        self.surface.resize(width, height);
    }

    pub fn surface(&self) -> &dyn BrowserSurface {
        self.surface.as_ref()
    }

    fn title_changed(&self, title: Option<&str>) {
        let capitalized = title.map(capitalize_title);
        self.chrome.set_title(capitalized.as_deref());
    }

    fn progress_changed(&self, progress: f64) {
        let loading = progress < 1.0;
        if self.loading_indicator.get() != loading {
            self.loading_indicator.set(loading);
            self.chrome.set_loading_indicator(loading);
        }

        if matches!(self.state.get(), ScreenState::Loading | ScreenState::Loaded) {
            self.transition(if loading {
                ScreenState::Loading
            } else {
                ScreenState::Loaded
            });
        }
    }

    fn url_changed(&self, url: Option<&str>) {
        self.presenter.did_change_url(url.unwrap_or(""));
    }

    fn transition(&self, next: ScreenState) {
        let current = self.state.get();
        if current == next || current == ScreenState::Exited {
            return;
        }
        if current == ScreenState::Cancelled && next != ScreenState::Exited {
            return;
        }
        debug!(from = ?current, to = ?next, "screen state");
        self.state.set(next);
    }
}

impl ScreenView for WebScreen {
    fn load(&self, request: BuiltRequest) {
        if self.state.get() == ScreenState::Unattached {
            self.transition(ScreenState::Loading);
        }
        self.surface.load(&request);
    }
}

impl SurfaceHandler for WebScreen {
    fn decide_navigation_action(&self, action: &NavigationAction) -> NavigationActionPolicy {
        self.presenter.did_init_navigation_action(action)
    }

    fn decide_navigation_response(
        &self,
        response: &NavigationResponse,
    ) -> NavigationResponsePolicy {
        let policy = self.presenter.did_receive_navigation_response(response);
        if policy == NavigationResponsePolicy::Cancel && !self.state.get().is_terminal() {
            self.transition(ScreenState::Cancelled);
        }
        policy
    }

    fn did_receive_auth_challenge(&self, challenge: &AuthChallenge) -> AuthChallengeDisposition {
        debug!(host = %challenge.host, "authentication challenge");
        self.presenter.needs_authentication();
        AuthChallengeDisposition::PerformDefaultHandling
    }

    fn run_alert(&self, message: String, completion: Box<dyn FnOnce() + Send>) {
        self.dialogs.push(Dialog::Alert {
            message,
            on_dismiss: completion,
        });
    }

    fn run_confirm(&self, message: String, completion: Box<dyn FnOnce(bool) + Send>) {
        self.dialogs.push(Dialog::Confirm {
            message,
            on_choice: completion,
        });
    }

    fn run_prompt(
        &self,
        message: String,
        default_text: Option<String>,
        completion: Box<dyn FnOnce(Option<String>) + Send>,
    ) {
        self.dialogs.push(Dialog::Prompt {
            message,
            default_text,
            on_submit: completion,
        });
    }
}

/// Upper-case the first character of every whitespace-separated word and
/// lower-case the rest.
pub fn capitalize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut at_word_start = true;
    for c in title.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
