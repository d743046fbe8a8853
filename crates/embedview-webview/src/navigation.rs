//! Navigation decision points offered by the browser engine.

/// What triggered a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationType {
    LinkActivated,
    FormSubmitted,
    BackForward,
    Reload,
    FormResubmitted,
    #[default]
    Other,
}

/// A request to navigate, offered before the engine follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationAction {
    pub url: String,
    pub navigation_type: NavigationType,
    /// Whether the target is the top-level frame.
    pub is_main_frame: bool,
}

impl NavigationAction {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            navigation_type: NavigationType::Other,
            is_main_frame: true,
        }
    }

    pub fn with_type(mut self, navigation_type: NavigationType) -> Self {
        self.navigation_type = navigation_type;
        self
    }
}

/// A response received for a navigation, offered before it is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationResponse {
    pub url: String,
    /// HTTP status code; `None` for non-HTTP loads (`file:`, `data:`, ...).
    pub status: Option<u16>,
    pub mime_type: Option<String>,
    pub is_main_frame: bool,
}

impl NavigationResponse {
    /// An HTTP response with the given status.
    pub fn http(url: impl Into<String>, status: u16) -> Self {
        Self {
            url: url.into(),
            status: Some(status),
            mime_type: None,
            is_main_frame: true,
        }
    }

    /// A response that did not come over HTTP.
    pub fn non_http(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: None,
            mime_type: None,
            is_main_frame: true,
        }
    }

    /// The status when it is an HTTP error (400 or above).
    pub fn error_status(&self) -> Option<u16> {
        self.status.filter(|status| *status >= 400)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationActionPolicy {
    #[default]
    Allow,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationResponsePolicy {
    #[default]
    Allow,
    Cancel,
}

/// An authentication challenge raised by the engine (HTTP auth, client
/// certificates, server trust).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthChallenge {
    pub host: String,
    pub realm: Option<String>,
}

/// How the engine should answer an authentication challenge.
///
/// The component never supplies credentials, so the platform default is the
/// only disposition it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthChallengeDisposition {
    #[default]
    PerformDefaultHandling,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies_default_to_allow() {
        assert_eq!(NavigationActionPolicy::default(), NavigationActionPolicy::Allow);
        assert_eq!(NavigationResponsePolicy::default(), NavigationResponsePolicy::Allow);
    }

    #[test]
    fn error_status_starts_at_400() {
        assert_eq!(NavigationResponse::http("https://a.test", 200).error_status(), None);
        assert_eq!(NavigationResponse::http("https://a.test", 399).error_status(), None);
        assert_eq!(NavigationResponse::http("https://a.test", 400).error_status(), Some(400));
        assert_eq!(NavigationResponse::http("https://a.test", 599).error_status(), Some(599));
        assert_eq!(NavigationResponse::non_http("file:///tmp/x").error_status(), None);
    }

    #[test]
    fn action_builder() {
        let action = NavigationAction::new("https://a.test/next").with_type(NavigationType::LinkActivated);
        assert_eq!(action.navigation_type, NavigationType::LinkActivated);
        assert!(action.is_main_frame);
    }
}
