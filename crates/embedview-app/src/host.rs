//! `ApplicationHandler` for the winit event loop: one window, one web
//! screen.

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoopProxy};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

use embedview_config::SessionConfig;
use embedview_webview::engine::wry_surface::logical_bounds;
use embedview_webview::{DelegateRef, WebScreen, WebViewFactory, WrySurface};

use crate::chrome::WindowChrome;
use crate::delegate::{SessionDelegate, SessionEnd};

/// Events posted to the loop from the screen's collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent {
    /// Dialogs are waiting in the screen's queue.
    Dialogs,
    /// The delegate ended the session.
    Finished(SessionEnd),
}

pub struct EmbedviewApp {
    config: SessionConfig,
    proxy: EventLoopProxy<UserEvent>,
    // The screen owns a child webview of `window` and must drop first.
    screen: Option<Rc<WebScreen>>,
    delegate: Option<Rc<SessionDelegate>>,
    window: Option<Arc<Window>>,
    outcome: Option<SessionEnd>,
}

impl EmbedviewApp {
    pub fn new(config: SessionConfig, proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            config,
            proxy,
            screen: None,
            delegate: None,
            window: None,
            outcome: None,
        }
    }

    /// How the session ended, if it ended through the delegate or the
    /// window.
    pub fn outcome(&self) -> Option<SessionEnd> {
        self.outcome
    }

    fn finish(&mut self, event_loop: &ActiveEventLoop, end: SessionEnd) {
        self.outcome.get_or_insert(end);
        self.screen = None;
        self.delegate = None;
        event_loop.exit();
    }

    /// Create the window and the screen, then attach the screen.
    /// Returns `false` if the event loop should exit.
    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.as_str())
            .with_transparent(self.config.browser.transparent)
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        let surface = match WrySurface::build_as_child(
            window.as_ref(),
            logical_bounds(size.width, size.height),
            &self.config.browser,
        ) {
            Ok(surface) => surface,
            Err(e) => {
                tracing::error!("Failed to create webview: {e}");
                return false;
            }
        };

        let proxy = self.proxy.clone();
        let delegate = Rc::new(SessionDelegate::new(move |end| {
            if proxy.send_event(UserEvent::Finished(end)).is_err() {
                tracing::debug!("event loop closed before session end was delivered");
            }
        }));

        let chrome = WindowChrome::new(Arc::clone(&window), window_config.title.clone());
        let screen = WebViewFactory::from_config(
            &self.config.session,
            Some(Rc::downgrade(&delegate) as DelegateRef),
            surface,
            chrome,
        );

        let waker = Mutex::new(self.proxy.clone());
        screen.dialog_queue().set_waker(move || {
            if let Ok(proxy) = waker.lock() {
                let _ = proxy.send_event(UserEvent::Dialogs);
            }
        });

        self.window = Some(window);
        self.delegate = Some(delegate);
        self.screen = Some(Rc::clone(&screen));

        screen.load_view();
        tracing::info!("Window created and session attached");
        true
    }

    fn handle_resize(&self, size: winit::dpi::PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        let (Some(window), Some(screen)) = (&self.window, &self.screen) else {
            return;
        };
        let logical = size.to_logical::<f64>(window.scale_factor());
        screen.resize(logical.width, logical.height);
    }

    fn handle_keyboard_input(&self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        if event.logical_key == Key::Named(NamedKey::Escape) {
            if let Some(screen) = &self.screen {
                screen.exit_pressed();
            }
        }
    }
}

impl ApplicationHandler<UserEvent> for EmbedviewApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize(event_loop) {
            self.finish(event_loop, SessionEnd::Failed);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.finish(event_loop, SessionEnd::Exited);
            }

            WindowEvent::Resized(size) => self.handle_resize(size),

            WindowEvent::KeyboardInput { event, .. } => self.handle_keyboard_input(event),

            _ => {}
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Dialogs => {
                if let Some(screen) = &self.screen {
                    let presented = screen.pump_dialogs();
                    tracing::debug!(presented, "dialogs presented");
                }
            }
            UserEvent::Finished(end) => self.finish(event_loop, end),
        }
    }
}
