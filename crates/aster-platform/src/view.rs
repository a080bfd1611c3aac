//! The capability surface a native view exposes to its host.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use aster_common::input::KeyEvent;
use aster_common::types::{Rect, Size};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Opaque toolkit handle to a native view, for embedding into platform UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewHandle(pub u64);

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

static NEXT_VIEW_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Allocate the next opaque view handle.
pub(crate) fn next_view_handle() -> ViewHandle {
    ViewHandle(NEXT_VIEW_HANDLE.fetch_add(1, Ordering::Relaxed))
}

/// Configuration for creating a platform view.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Initial URL to load, if any.
    pub url: Option<String>,
    /// Initial position and size within the parent window.
    pub bounds: Rect,
    /// Whether the view background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            bounds: Rect {
                x: 0.0,
                y: 0.0,
                width: 400.0,
                height: 300.0,
            },
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some("Aster/0.1".to_string()),
        }
    }
}

/// Capability surface of a platform-native extension view.
///
/// The host owns the view for its full lifetime; removal from a containing
/// layout must not dispose it. Disposal happens when the host drops the box.
pub trait ExtensionView {
    /// Native handle for embedding the view into platform UI.
    #[cfg(not(target_os = "android"))]
    fn native_view(&self) -> ViewHandle;

    /// Resize in response to content auto-resize.
    fn resize(&mut self, size: Size);

    /// Toolkit-level accelerator handling for hosts without a parent
    /// browser. Returns whether the event was consumed.
    fn handle_keyboard_event(&mut self, event: &KeyEvent) -> bool;

    /// The content's render view now exists.
    fn render_view_created(&mut self);

    /// Loading finished. Toolkits that defer showing the view reveal it here.
    fn did_stop_loading(&mut self);

    /// The host is closing; the view withdraws from display.
    fn close(&mut self);
}

/// Create the platform-appropriate view for one extension surface, bound
/// to the given parent window.
pub fn create_extension_view<W>(window: &W, config: &ViewConfig) -> Result<Box<dyn ExtensionView>>
where
    W: crate::HasWindowHandle,
{
    Ok(Box::new(crate::wry_view::WryView::new(window, config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_handle_display() {
        assert_eq!(ViewHandle(9).to_string(), "view-9");
    }

    #[test]
    fn view_handle_serialization() {
        let handle = ViewHandle(3);
        let json = serde_json::to_string(&handle).unwrap();
        let deserialized: ViewHandle = serde_json::from_str(&json).unwrap();
        assert_eq!(handle, deserialized);
    }

    #[test]
    fn handles_are_distinct() {
        let a = next_view_handle();
        let b = next_view_handle();
        assert_ne!(a, b);
    }

    #[test]
    fn default_config() {
        let config = ViewConfig::default();
        assert!(config.url.is_none());
        assert!(!config.transparent);
        assert_eq!(config.devtools, cfg!(debug_assertions));
        assert_eq!(config.user_agent.as_deref(), Some("Aster/0.1"));
    }
}
