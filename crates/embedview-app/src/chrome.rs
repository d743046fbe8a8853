//! Window-backed screen chrome: the page title and loading state go to the
//! window title, Escape is the exit control, dialogs are logged and
//! declined.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use embedview_webview::{Dialog, DialogKind, ScreenChrome};
use winit::window::Window;

/// Marker appended to the window title while a page is loading.
const LOADING_MARKER: &str = "(loading)";

pub struct WindowChrome {
    window: Arc<Window>,
    app_title: String,
    page_title: RefCell<Option<String>>,
    loading: Cell<bool>,
}

impl WindowChrome {
    pub fn new(window: Arc<Window>, app_title: impl Into<String>) -> Self {
        Self {
            window,
            app_title: app_title.into(),
            page_title: RefCell::new(None),
            loading: Cell::new(false),
        }
    }

    fn refresh(&self) {
        let title = compose_title(
            &self.app_title,
            self.page_title.borrow().as_deref(),
            self.loading.get(),
        );
        self.window.set_title(&title);
    }
}

impl ScreenChrome for WindowChrome {
    fn set_title(&self, title: Option<&str>) {
        *self.page_title.borrow_mut() = title.map(str::to_string);
        self.refresh();
    }

    fn set_loading_indicator(&self, visible: bool) {
        self.loading.set(visible);
        self.refresh();
    }

    fn show_exit_control(&self) {
        tracing::info!("Press Escape to close the page");
    }

    fn present_dialog(&self, dialog: Dialog) {
        answer_unattended(dialog);
    }
}

/// The window has no dialog UI, so nobody can answer. Alerts are only
/// acknowledged; confirms are declined and prompts cancelled so the page
/// never reads a choice the user did not make.
pub fn answer_unattended(dialog: Dialog) {
    tracing::info!(kind = ?dialog.kind(), message = %dialog.message(), "Page dialog");
    match dialog.kind() {
        DialogKind::Alert => dialog.acknowledge(),
        DialogKind::Confirm | DialogKind::Prompt => {
            tracing::warn!("No dialog UI; declining on the user's behalf");
            dialog.dismiss();
        }
    }
}

/// Format: "{page} - {app}", or "{app}" with no page title, followed by the
/// loading marker while loading.
pub fn compose_title(app_title: &str, page_title: Option<&str>, loading: bool) -> String {
    let mut title = match page_title.filter(|t| !t.trim().is_empty()) {
        Some(page) => format!("{page} - {app_title}"),
        None => app_title.to_string(),
    };
    if loading {
        title.push(' ');
        title.push_str(LOADING_MARKER);
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn app_title_alone_without_page_title() {
        assert_eq!(compose_title("Embedview", None, false), "Embedview");
        assert_eq!(compose_title("Embedview", Some("  "), false), "Embedview");
    }

    #[test]
    fn page_title_leads() {
        assert_eq!(
            compose_title("Embedview", Some("Account Overview"), false),
            "Account Overview - Embedview"
        );
    }

    #[test]
    fn unattended_confirm_is_declined() {
        let (tx, rx) = mpsc::channel();
        answer_unattended(Dialog::confirm("Delete account?", move |ok| tx.send(ok).unwrap()));
        assert!(!rx.recv().unwrap());
    }

    #[test]
    fn unattended_prompt_is_cancelled() {
        let (tx, rx) = mpsc::channel();
        answer_unattended(Dialog::prompt("Name?", Some("guest".into()), move |text| {
            tx.send(text).unwrap()
        }));
        assert_eq!(rx.recv().unwrap(), None);
    }

    #[test]
    fn unattended_alert_is_released() {
        let (tx, rx) = mpsc::channel();
        answer_unattended(Dialog::alert("Saved", move || tx.send(()).unwrap()));
        assert!(rx.recv().is_ok());
    }

    #[test]
    fn loading_marker_is_appended() {
        assert_eq!(
            compose_title("Embedview", Some("Home"), true),
            "Home - Embedview (loading)"
        );
        assert_eq!(compose_title("Embedview", None, true), "Embedview (loading)");
    }
}
