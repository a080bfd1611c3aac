//! Channel to the renderer for one hosted document.

use aster_common::types::WindowId;
use serde::{Deserialize, Serialize};

/// A typed message sent to the renderer process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload")]
pub enum RendererMessage {
    /// Tells extension script which browser window it lives in.
    UpdateBrowserWindowId {
        routing_id: i32,
        window_id: WindowId,
    },
}

/// The render-side host for one document.
pub trait RenderViewHost {
    /// Routing id of the render view, used to address messages.
    fn routing_id(&self) -> i32;

    /// Inject a stylesheet into the current document.
    fn insert_css(&self, css: &str);

    /// Send a typed message to the renderer.
    fn send(&self, message: RendererMessage);
}
