//! Headless view for tests and windowless environments.

use std::cell::RefCell;
use std::rc::Rc;

use aster_common::input::KeyEvent;
use aster_common::types::Size;

use crate::view::{next_view_handle, ExtensionView, ViewHandle};

/// Observable record of the calls a [`HeadlessView`] received.
#[derive(Debug, Default)]
pub struct ViewLog {
    pub resizes: Vec<Size>,
    pub forwarded_events: Vec<KeyEvent>,
    pub render_view_created: usize,
    pub did_stop_loading: usize,
    pub closed: bool,
}

/// An [`ExtensionView`] with no toolkit behind it.
///
/// Records every call into a shared log so behavior layered above it can be
/// asserted without a display server. A configurable accelerator list stands
/// in for toolkit accelerator handling.
pub struct HeadlessView {
    handle: ViewHandle,
    accelerators: Vec<String>,
    log: Rc<RefCell<ViewLog>>,
}

impl HeadlessView {
    pub fn new() -> Self {
        Self {
            handle: next_view_handle(),
            accelerators: Vec::new(),
            log: Rc::new(RefCell::new(ViewLog::default())),
        }
    }

    /// Claim `key` as a toolkit accelerator.
    pub fn with_accelerator(mut self, key: impl Into<String>) -> Self {
        self.accelerators.push(key.into());
        self
    }

    /// Shared handle to the call log, valid after the view moves into a host.
    pub fn log(&self) -> Rc<RefCell<ViewLog>> {
        Rc::clone(&self.log)
    }
}

impl Default for HeadlessView {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionView for HeadlessView {
    #[cfg(not(target_os = "android"))]
    fn native_view(&self) -> ViewHandle {
        self.handle
    }

    fn resize(&mut self, size: Size) {
        self.log.borrow_mut().resizes.push(size);
    }

    fn handle_keyboard_event(&mut self, event: &KeyEvent) -> bool {
        self.log.borrow_mut().forwarded_events.push(event.clone());
        self.accelerators.iter().any(|key| *key == event.key)
    }

    fn render_view_created(&mut self) {
        self.log.borrow_mut().render_view_created += 1;
    }

    fn did_stop_loading(&mut self) {
        self.log.borrow_mut().did_stop_loading += 1;
    }

    fn close(&mut self) {
        self.log.borrow_mut().closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_resizes() {
        let mut view = HeadlessView::new();
        let log = view.log();

        view.resize(Size {
            width: 320.0,
            height: 240.0,
        });

        let log = log.borrow();
        assert_eq!(log.resizes.len(), 1);
        assert_eq!(log.resizes[0].width, 320.0);
    }

    #[test]
    fn records_lifecycle_calls() {
        let mut view = HeadlessView::new();
        let log = view.log();

        view.render_view_created();
        view.did_stop_loading();
        view.did_stop_loading();
        view.close();

        let log = log.borrow();
        assert_eq!(log.render_view_created, 1);
        assert_eq!(log.did_stop_loading, 2);
        assert!(log.closed);
    }

    #[test]
    fn accelerator_match_consumes() {
        let mut view = HeadlessView::new().with_accelerator("F5");
        assert!(view.handle_keyboard_event(&KeyEvent::raw_key_down("F5")));
        assert!(!view.handle_keyboard_event(&KeyEvent::raw_key_down("F6")));
    }

    #[test]
    fn forwarded_events_are_logged_even_when_unclaimed() {
        let mut view = HeadlessView::new();
        let log = view.log();

        view.handle_keyboard_event(&KeyEvent::raw_key_down("A"));

        assert_eq!(log.borrow().forwarded_events.len(), 1);
    }

    #[test]
    fn views_get_distinct_handles() {
        let a = HeadlessView::new();
        let b = HeadlessView::new();
        assert_ne!(a.native_view(), b.native_view());
    }
}
