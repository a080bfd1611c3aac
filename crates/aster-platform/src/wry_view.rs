//! Toolkit-backed view: a wry WebView embedded as a child of the parent
//! window.

use aster_common::errors::PlatformError;
use aster_common::input::KeyEvent;
use aster_common::types::{Rect, Size};
use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::view::{next_view_handle, ExtensionView, ViewConfig, ViewHandle};

/// An [`ExtensionView`] backed by a wry child WebView.
///
/// The view starts hidden and is revealed when the first load completes,
/// so a partially rendered surface never flashes into the parent window.
pub struct WryView {
    webview: WebView,
    handle: ViewHandle,
    bounds: Rect,
}

impl WryView {
    /// Build the view as a child of `window`.
    pub fn new<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        config: &ViewConfig,
    ) -> Result<Self, PlatformError> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(to_wry_rect(&config.bounds))
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(false);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        let builder = match &config.url {
            Some(url) => builder.with_url(url),
            None => builder.with_html("<html><body></body></html>"),
        };

        let webview = builder
            .build_as_child(window)
            .map_err(|e| PlatformError::ViewCreation(e.to_string()))?;

        // Hidden until the first load completes.
        webview
            .set_visible(false)
            .map_err(|e| PlatformError::WebView(e.to_string()))?;

        let handle = next_view_handle();
        debug!(handle = %handle, "platform view created");

        Ok(Self {
            webview,
            handle,
            bounds: config.bounds,
        })
    }
}

impl ExtensionView for WryView {
    #[cfg(not(target_os = "android"))]
    fn native_view(&self) -> ViewHandle {
        self.handle
    }

    fn resize(&mut self, size: Size) {
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        if let Err(e) = self.webview.set_bounds(to_wry_rect(&self.bounds)) {
            warn!(handle = %self.handle, error = %e, "resize failed");
        }
    }

    fn handle_keyboard_event(&mut self, event: &KeyEvent) -> bool {
        // wry exposes no accelerator table; the event is dropped here.
        debug!(handle = %self.handle, key = %event.key, "no toolkit accelerator handling");
        false
    }

    fn render_view_created(&mut self) {
        debug!(handle = %self.handle, "render view created");
    }

    fn did_stop_loading(&mut self) {
        if let Err(e) = self.webview.set_visible(true) {
            warn!(handle = %self.handle, error = %e, "failed to show view");
        }
    }

    fn close(&mut self) {
        // Withdraw from display. Disposal stays with the owning host.
        if let Err(e) = self.webview.set_visible(false) {
            warn!(handle = %self.handle, error = %e, "failed to hide view");
        }
    }
}

fn to_wry_rect(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::LogicalPosition::new(rect.x, rect.y).into(),
        size: wry::dpi::LogicalSize::new(rect.width, rect.height).into(),
    }
}
