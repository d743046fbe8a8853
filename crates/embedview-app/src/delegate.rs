//! Delegate that logs session events and ends the session on exit or
//! failure.

use embedview_common::WebViewError;
use embedview_webview::WebViewDelegate;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exited,
    Failed,
}

pub struct SessionDelegate {
    finish: Box<dyn Fn(SessionEnd)>,
}

impl SessionDelegate {
    /// `finish` is called once per terminal event; the host decides what
    /// ending the session means.
    pub fn new(finish: impl Fn(SessionEnd) + 'static) -> Self {
        Self {
            finish: Box::new(finish),
        }
    }
}

impl WebViewDelegate for SessionDelegate {
    fn on_exit(&self) {
        tracing::info!("Exit requested");
        (self.finish)(SessionEnd::Exited);
    }

    fn on_credentials_needed(&self) {
        tracing::info!("Page requested credentials; using platform handling");
    }

    fn on_fail(&self, error: &WebViewError) {
        tracing::error!("Session failed: {error}");
        (self.finish)(SessionEnd::Failed);
    }

    fn on_url_changed(&self, url: &str) {
        tracing::info!(url, "URL changed");
    }
}
