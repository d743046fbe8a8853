//! Single entry point that assembles a web screen.

use std::collections::BTreeMap;
use std::rc::Rc;

use embedview_config::schema::SessionSection;
use tracing::debug;

use crate::delegate::DelegateRef;
use crate::engine::BrowserSurface;
use crate::presenter::WebPresenter;
use crate::request::RequestParams;
use crate::screen::{ScreenChrome, WebScreen};

/// Builds a screen and its presenter around a caller-supplied browser
/// surface and chrome.
///
/// Construction does no I/O. The request is built and issued when the
/// returned screen's `load_view` is called.
pub struct WebViewFactory;

impl WebViewFactory {
    pub fn create(
        url: impl Into<String>,
        query_params: BTreeMap<String, String>,
        extra_headers: BTreeMap<String, String>,
        delegate: Option<DelegateRef>,
        surface: impl BrowserSurface + 'static,
        chrome: impl ScreenChrome + 'static,
    ) -> Rc<WebScreen> {
        let params = RequestParams {
            url: url.into(),
            query_params,
            extra_headers,
        };
        Self::from_params(params, delegate, surface, chrome)
    }

    pub fn from_params(
        params: RequestParams,
        delegate: Option<DelegateRef>,
        surface: impl BrowserSurface + 'static,
        chrome: impl ScreenChrome + 'static,
    ) -> Rc<WebScreen> {
        debug!(
            url = %params.url,
            query = params.query_params.len(),
            headers = params.extra_headers.len(),
            delegate = delegate.is_some(),
            "creating web screen"
        );
        let presenter = Rc::new(WebPresenter::new(params, delegate));
        Rc::new(WebScreen::new(Box::new(surface), Box::new(chrome), presenter))
    }

    /// Build from the `[session]` section of a loaded configuration.
    pub fn from_config(
        session: &SessionSection,
        delegate: Option<DelegateRef>,
        surface: impl BrowserSurface + 'static,
        chrome: impl ScreenChrome + 'static,
    ) -> Rc<WebScreen> {
        Self::create(
            session.url.clone(),
            session.query.clone(),
            session.headers.clone(),
            delegate,
            surface,
            chrome,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ScreenState;
    use crate::test_support::{
        DelegateEvent, Journal, RecordingChrome, RecordingDelegate, RecordingSurface,
    };
    use embedview_common::WebViewError;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn create_does_not_load() {
        let surface = RecordingSurface::default();
        let screen = WebViewFactory::create(
            "https://example.com",
            BTreeMap::new(),
            BTreeMap::new(),
            None,
            surface.clone(),
            RecordingChrome::default(),
        );

        assert!(surface.loads().is_empty());
        assert_eq!(screen.state(), ScreenState::Unattached);
    }

    #[test]
    fn create_then_attach_issues_the_session_request() {
        let journal = Journal::default();
        let delegate = Rc::new(RecordingDelegate::with_journal(&journal));
        let surface = RecordingSurface::with_journal(&journal);
        surface.echo_url_on_load();

        let screen = WebViewFactory::create(
            "https://example.com/page",
            map(&[("lang", "en")]),
            map(&[("X-Client", "v1")]),
            Some(Rc::downgrade(&delegate) as DelegateRef),
            surface.clone(),
            RecordingChrome::default(),
        );
        screen.load_view();

        assert_eq!(surface.loads(), vec!["https://example.com/page?lang=en"]);
        assert_eq!(
            journal.borrow().first().map(String::as_str),
            Some("load https://example.com/page?lang=en")
        );
        assert_eq!(
            delegate.events(),
            vec![DelegateEvent::UrlChanged(
                "https://example.com/page?lang=en".into()
            )]
        );
    }

    #[test]
    fn create_with_unparseable_url_fails_once() {
        let delegate = Rc::new(RecordingDelegate::default());
        let surface = RecordingSurface::default();

        let screen = WebViewFactory::create(
            "/relative/path",
            BTreeMap::new(),
            BTreeMap::new(),
            Some(Rc::downgrade(&delegate) as DelegateRef),
            surface.clone(),
            RecordingChrome::default(),
        );
        screen.load_view();

        assert!(surface.loads().is_empty());
        assert_eq!(
            delegate.events(),
            vec![DelegateEvent::Fail(WebViewError::InvalidUrl)]
        );
    }

    #[test]
    fn from_config_uses_session_section() {
        let session = SessionSection {
            url: "https://example.com/portal?tab=home".into(),
            query: map(&[("tab", "billing"), ("lang", "pt")]),
            headers: map(&[("Authorization", "Bearer abc")]),
        };
        let surface = RecordingSurface::default();

        let screen =
            WebViewFactory::from_config(&session, None, surface.clone(), RecordingChrome::default());
        screen.load_view();

        assert_eq!(
            surface.loads(),
            vec!["https://example.com/portal?lang=pt&tab=billing"]
        );
    }

    #[test]
    fn screen_does_not_own_delegate() {
        let delegate = Rc::new(RecordingDelegate::default());
        let _screen = WebViewFactory::create(
            "https://example.com",
            BTreeMap::new(),
            BTreeMap::new(),
            Some(Rc::downgrade(&delegate) as DelegateRef),
            RecordingSurface::default(),
            RecordingChrome::default(),
        );
        assert_eq!(Rc::strong_count(&delegate), 1);
    }
}
