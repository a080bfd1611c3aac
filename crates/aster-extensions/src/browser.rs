//! Parent browser and window controller seams.
//!
//! A host with no parent browser is valid (dialogs can exist without a
//! window); every delegation through these traits treats an absent browser
//! as a normal `None`/no-op outcome.

use std::rc::Rc;

use aster_common::input::{KeyEvent, ShortcutCheck};
use aster_common::types::WindowId;

use crate::contents::WebContents;
use crate::navigation::OpenUrlParams;

/// Owner of navigation policy and the two-tier keyboard shortcut scheme.
pub trait BrowserController {
    /// Higher-priority shortcut pass, checked before the page sees the
    /// event (e.g. close-window).
    fn pre_handle_keyboard_event(&self, source: &WebContents, event: &KeyEvent) -> ShortcutCheck;

    /// Lower-priority shortcut pass, after the page declined the event
    /// (e.g. find-in-page).
    fn handle_keyboard_event(&self, source: &WebContents, event: &KeyEvent);

    /// Open a URL under this browser's policy. Returns the contents the
    /// navigation landed in, if any.
    fn open_url(&self, params: &OpenUrlParams) -> Option<Rc<WebContents>>;

    /// The controller of this browser's window, if it has one.
    fn window_controller(&self) -> Option<Rc<dyn WindowController>>;
}

/// Controller of one browser window.
pub trait WindowController {
    /// Numeric window identifier, as exposed to extension script.
    fn window_id(&self) -> WindowId;
}
