//! Script dialogs (alert, confirm, prompt) and their UI-thread queue.
//!
//! The engine may ask for a dialog from any thread. Requests are pushed onto
//! a `DialogQueue`, which is `Send + Sync`, and only presented when the UI
//! thread drains it through `WebScreen::pump_dialogs`.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

/// Kind of a script dialog, without its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Alert,
    Confirm,
    Prompt,
}

/// A script dialog waiting to be shown, carrying the completion the engine
/// is blocked on.
pub enum Dialog {
    /// Message with a single acknowledgement.
    Alert {
        message: String,
        on_dismiss: Box<dyn FnOnce() + Send>,
    },
    /// Message with accept/decline; the completion receives the choice.
    Confirm {
        message: String,
        on_choice: Box<dyn FnOnce(bool) + Send>,
    },
    /// Message with a text field pre-filled with `default_text`. The
    /// completion receives the text in the field when acknowledged, or
    /// `None` when dismissed.
    Prompt {
        message: String,
        default_text: Option<String>,
        on_submit: Box<dyn FnOnce(Option<String>) + Send>,
    },
}

impl Dialog {
    pub fn alert(message: impl Into<String>, on_dismiss: impl FnOnce() + Send + 'static) -> Self {
        Dialog::Alert {
            message: message.into(),
            on_dismiss: Box::new(on_dismiss),
        }
    }

    pub fn confirm(
        message: impl Into<String>,
        on_choice: impl FnOnce(bool) + Send + 'static,
    ) -> Self {
        Dialog::Confirm {
            message: message.into(),
            on_choice: Box::new(on_choice),
        }
    }

    pub fn prompt(
        message: impl Into<String>,
        default_text: Option<String>,
        on_submit: impl FnOnce(Option<String>) + Send + 'static,
    ) -> Self {
        Dialog::Prompt {
            message: message.into(),
            default_text,
            on_submit: Box::new(on_submit),
        }
    }

    pub fn kind(&self) -> DialogKind {
        match self {
            Dialog::Alert { .. } => DialogKind::Alert,
            Dialog::Confirm { .. } => DialogKind::Confirm,
            Dialog::Prompt { .. } => DialogKind::Prompt,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Dialog::Alert { message, .. }
            | Dialog::Confirm { message, .. }
            | Dialog::Prompt { message, .. } => message,
        }
    }

    /// Complete the dialog the way an "OK" press would: alerts are
    /// dismissed, confirms accepted, prompts submitted with their default
    /// text.
    pub fn acknowledge(self) {
        match self {
            Dialog::Alert { on_dismiss, .. } => on_dismiss(),
            Dialog::Confirm { on_choice, .. } => on_choice(true),
            Dialog::Prompt {
                default_text,
                on_submit,
                ..
            } => on_submit(Some(default_text.unwrap_or_default())),
        }
    }

    /// Complete the dialog the way a "Cancel" press would.
    pub fn dismiss(self) {
        match self {
            Dialog::Alert { on_dismiss, .. } => on_dismiss(),
            Dialog::Confirm { on_choice, .. } => on_choice(false),
            Dialog::Prompt { on_submit, .. } => on_submit(None),
        }
    }
}

impl std::fmt::Debug for Dialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Dialog");
        s.field("kind", &self.kind()).field("message", &self.message());
        if let Dialog::Prompt { default_text, .. } = self {
            s.field("default_text", default_text);
        }
        s.finish()
    }
}

type Waker = Arc<dyn Fn() + Send + Sync>;

struct QueueInner {
    pending: Mutex<VecDeque<Dialog>>,
    waker: Mutex<Option<Waker>>,
}

/// Thread-safe handle for queueing dialogs onto the UI thread.
///
/// Cloning yields another handle to the same queue.
#[derive(Clone)]
pub struct DialogQueue {
    inner: Arc<QueueInner>,
}

impl DialogQueue {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(QueueInner {
                pending: Mutex::new(VecDeque::new()),
                waker: Mutex::new(None),
            }),
        }
    }

    /// Install a callback run after every push, typically one that wakes
    /// the host event loop so it calls `WebScreen::pump_dialogs`.
    pub fn set_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        if let Ok(mut slot) = self.inner.waker.lock() {
            *slot = Some(Arc::new(waker));
        }
    }

    /// Queue a dialog. Safe to call from any thread.
    pub fn push(&self, dialog: Dialog) {
        debug!(kind = ?dialog.kind(), "dialog queued");
        match self.inner.pending.lock() {
            Ok(mut pending) => pending.push_back(dialog),
            Err(_) => {
                warn!("dialog queue poisoned; dismissing dialog");
                dialog.dismiss();
                return;
            }
        }

        let waker = self.inner.waker.lock().ok().and_then(|slot| slot.clone());
        if let Some(wake) = waker {
            wake();
        }
    }

    /// Take every queued dialog in arrival order.
    pub fn drain(&self) -> Vec<Dialog> {
        self.inner
            .pending
            .lock()
            .map(|mut pending| pending.drain(..).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.pending.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DialogQueue {
    fn default() -> Self {
        Self::new()
    }
}
