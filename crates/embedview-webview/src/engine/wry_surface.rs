//! `BrowserSurface` backed by the platform webview through `wry`.
//!
//! wry reports title changes, page-load start/finish and main-frame
//! navigation requests. Those are mapped onto the surface properties and the
//! installed `SurfaceHandler`. wry does not expose response status codes,
//! authentication challenges or script dialogs; the engine handles those
//! natively.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use embedview_config::schema::BrowserConfig;
use tracing::{debug, error};
use wry::raw_window_handle;
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::engine::{BrowserSurface, SurfaceHandler, SurfaceProperties};
use crate::navigation::{NavigationAction, NavigationActionPolicy};
use crate::request::BuiltRequest;

/// Progress reported when wry signals that a load started. wry has no
/// finer-grained progress.
const STARTED_PROGRESS: f64 = 0.1;

type HandlerSlot = Rc<RefCell<Option<Weak<dyn SurfaceHandler>>>>;

/// A child wry webview inside a host window.
pub struct WrySurface {
    webview: WebView,
    properties: Rc<SurfaceProperties>,
    handler: HandlerSlot,
}

impl WrySurface {
    /// Build the webview as a child of `window`, positioned at `bounds`.
    ///
    /// Nothing is loaded until the screen issues its request.
    pub fn build_as_child<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        config: &BrowserConfig,
    ) -> Result<Self, wry::Error> {
        let properties = Rc::new(SurfaceProperties::default());
        let handler: HandlerSlot = Rc::new(RefCell::new(None));

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(true);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = attach_title_handler(builder, Rc::clone(&properties));
        builder = attach_page_load_handler(builder, Rc::clone(&properties));
        builder = attach_navigation_handler(builder, Rc::clone(&handler));

        let webview = builder.build_as_child(window)?;
        debug!("wry surface created");

        Ok(Self {
            webview,
            properties,
            handler,
        })
    }
}

impl BrowserSurface for WrySurface {
    fn load(&self, request: &BuiltRequest) {
        let url = request.url().as_str();
        if let Err(e) = self
            .webview
            .load_url_with_headers(url, request.headers().clone())
        {
            error!(url, error = %e, "engine failed to load request");
        }
    }

    fn properties(&self) -> &SurfaceProperties {
        &self.properties
    }

    fn set_handler(&self, handler: Weak<dyn SurfaceHandler>) {
        *self.handler.borrow_mut() = Some(handler);
    }

    fn resize(&self, width: f64, height: f64) {
        if let Err(e) = self.webview.set_bounds(logical_bounds(width, height)) {
            error!(width, height, error = %e, "failed to resize webview");
        }
    }
}

/// A wry rect at the window origin with the given logical size.
pub fn logical_bounds(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

fn attach_title_handler<'a>(
    builder: WebViewBuilder<'a>,
    properties: Rc<SurfaceProperties>,
) -> WebViewBuilder<'a> {
    builder.with_document_title_changed_handler(move |title| {
        debug!(title = %title, "title changed");
        properties.title.set(Some(title));
    })
}

fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    properties: Rc<SurfaceProperties>,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        let url = (!url.is_empty()).then_some(url);
        if properties.url.get() != url {
            properties.url.set(url);
        }
        match event {
            PageLoadEvent::Started => properties.estimated_progress.set(STARTED_PROGRESS),
            PageLoadEvent::Finished => properties.estimated_progress.set(1.0),
        }
    })
}

fn attach_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    slot: HandlerSlot,
) -> WebViewBuilder<'a> {
    builder.with_navigation_handler(move |url| {
        let handler = slot.borrow().as_ref().and_then(Weak::upgrade);
        let Some(handler) = handler else {
            return true;
        };
        let action = NavigationAction::new(url);
        let policy = handler.decide_navigation_action(&action);
        debug!(url = %action.url, ?policy, "navigation decided");
        policy == NavigationActionPolicy::Allow
    })
}

// =============================================================================
// TESTS
// =============================================================================
