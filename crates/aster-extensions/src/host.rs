//! The view host adapter.
//!
//! One [`ViewHost`] binds a single extension surface (dialog, infobar, or
//! popup) to a platform view and an optional parent browser, routing
//! keyboard events, navigation requests, and lifecycle notifications
//! between them.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use aster_common::events::{Event, EventBus};
use aster_common::input::{KeyEvent, ShortcutCheck};
use aster_common::types::{Size, SurfaceId, SurfaceKind};
use aster_platform::{create_extension_view, ExtensionView, HasWindowHandle, ViewConfig};
use tracing::{debug, warn};

use crate::browser::{BrowserController, WindowController};
use crate::contents::{DestructionGuard, WebContents};
use crate::navigation::OpenUrlParams;
use crate::render::{RenderViewHost, RendererMessage};
use crate::resources::INFOBAR_CSS;

#[cfg(not(target_os = "android"))]
use aster_platform::ViewHandle;

/// Weak link to externally owned contents, invalidated on destruction.
#[derive(Default)]
struct AssociatedContents {
    contents: Weak<WebContents>,
    guard: Option<DestructionGuard>,
}

/// Hosts one extension surface, adapting its content events to the platform
/// view and the parent browser.
///
/// The host owns its platform view for its full lifetime; the view is
/// disposed when the host is dropped, never by a containing layout. The
/// associated-contents relation is weak and cleared automatically when the
/// referenced contents is destroyed.
pub struct ViewHost {
    id: SurfaceId,
    kind: SurfaceKind,
    view: Option<Box<dyn ExtensionView>>,
    browser: Option<Rc<dyn BrowserController>>,
    host_contents: Rc<WebContents>,
    render_view: Option<Rc<dyn RenderViewHost>>,
    associated: Rc<RefCell<AssociatedContents>>,
    events: Rc<EventBus>,
    closed: bool,
}

impl ViewHost {
    /// Create a host for one surface. The platform view is attached
    /// separately, once a parent window exists.
    pub fn new(
        id: SurfaceId,
        kind: SurfaceKind,
        host_contents: Rc<WebContents>,
        events: Rc<EventBus>,
    ) -> Self {
        events.publish(Event::SurfaceOpened(id));
        Self {
            id,
            kind,
            view: None,
            browser: None,
            host_contents,
            render_view: None,
            associated: Rc::default(),
            events,
            closed: false,
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The host's own primary contents.
    pub fn host_contents(&self) -> &Rc<WebContents> {
        &self.host_contents
    }

    /// Construct the platform view for this host, bound to the given
    /// (possibly absent) parent browser.
    pub fn create_view<W: HasWindowHandle>(
        &mut self,
        window: &W,
        config: &ViewConfig,
        browser: Option<Rc<dyn BrowserController>>,
    ) -> aster_common::Result<()> {
        let view = create_extension_view(window, config)?;
        self.attach_view(view, browser);
        Ok(())
    }

    /// Bind an already constructed view. The host owns it from here on.
    pub fn attach_view(
        &mut self,
        view: Box<dyn ExtensionView>,
        browser: Option<Rc<dyn BrowserController>>,
    ) {
        debug!(
            id = %self.id,
            kind = ?self.kind,
            has_browser = browser.is_some(),
            "view attached"
        );
        self.view = Some(view);
        self.browser = browser;
    }

    /// Replace the weak reference to externally owned contents.
    ///
    /// A non-`None` value is observed for destruction and the reference is
    /// cleared automatically when that happens; `None` stops observing.
    /// Replacing the reference discards the previous observation.
    pub fn set_associated_contents(&mut self, contents: Option<&Rc<WebContents>>) {
        let mut slot = self.associated.borrow_mut();
        match contents {
            Some(contents) => {
                slot.contents = Rc::downgrade(contents);
                let cell = Rc::downgrade(&self.associated);
                slot.guard = Some(contents.observe_destruction(move || {
                    // Invalidate synchronously while the contents is being
                    // torn down.
                    if let Some(cell) = cell.upgrade() {
                        let mut slot = cell.borrow_mut();
                        slot.contents = Weak::new();
                        slot.guard = None;
                    }
                }));
            }
            None => {
                slot.contents = Weak::new();
                slot.guard = None;
            }
        }
    }

    /// The externally associated contents, if still alive.
    pub fn associated_contents(&self) -> Option<Rc<WebContents>> {
        self.associated.borrow().contents.upgrade()
    }

    /// What this host currently shows: the associated contents when set,
    /// the host's own page for popups, otherwise nothing.
    pub fn visible_contents(&self) -> Option<Rc<WebContents>> {
        if let Some(contents) = self.associated_contents() {
            return Some(contents);
        }
        if self.kind == SurfaceKind::Popup {
            return Some(Rc::clone(&self.host_contents));
        }
        None
    }

    /// High-priority pass, before the page sees the event.
    ///
    /// A popup's Escape press is reported as a shortcut but left
    /// unconsumed: browser-level shortcuts must get a chance to intervene
    /// before the main handling pass closes the popup.
    pub fn pre_handle_keyboard_event(
        &self,
        source: &WebContents,
        event: &KeyEvent,
    ) -> ShortcutCheck {
        if self.kind == SurfaceKind::Popup && event.is_escape_press() {
            return ShortcutCheck::deferred_shortcut();
        }

        if let Some(browser) = &self.browser {
            return browser.pre_handle_keyboard_event(source, event);
        }

        ShortcutCheck::not_a_shortcut()
    }

    /// Main handling pass, after the page declined the event. Closes popup
    /// hosts on Escape; everything else falls through to unhandled-event
    /// routing.
    pub fn handle_keyboard_event(&mut self, source: &WebContents, event: &KeyEvent) {
        if self.kind == SurfaceKind::Popup && event.is_escape_press() {
            self.close();
            return;
        }
        self.unhandled_keyboard_event(source, event);
    }

    /// Last-resort routing for events nothing else claimed.
    pub fn unhandled_keyboard_event(&mut self, source: &WebContents, event: &KeyEvent) {
        if let Some(browser) = &self.browser {
            // Lower-priority browser shortcuts such as find-in-page.
            browser.handle_keyboard_event(source, event);
        } else if let Some(view) = self.view.as_mut() {
            // No parent browser (e.g. dialogs): the toolkit may still know
            // accelerators of its own.
            if !view.handle_keyboard_event(event) {
                debug!(id = %self.id, key = %event.key, "keyboard event dropped");
            }
        }
    }

    /// Loading finished; toolkits that defer showing the view are told.
    pub fn on_load_stopped(&mut self) {
        if let Some(view) = self.view.as_mut() {
            view.did_stop_loading();
        }
    }

    /// The document is available. Infobars get the chrome stylesheet; the
    /// other kinds need nothing.
    pub fn on_document_available(&mut self) {
        self.events.publish(Event::DocumentAvailable(self.id));
        if self.kind != SurfaceKind::Infobar {
            return;
        }
        match &self.render_view {
            Some(render_view) => render_view.insert_css(INFOBAR_CSS),
            None => warn!(id = %self.id, "document available before render view"),
        }
    }

    /// A render view exists for the hosted page. The platform view is told;
    /// a window-bound host additionally reports its window id so extension
    /// script can query its own window context.
    pub fn on_render_view_created(&mut self, render_view: Rc<dyn RenderViewHost>) {
        if let Some(view) = self.view.as_mut() {
            view.render_view_created();
        }

        if let Some(window) = self.window_controller() {
            render_view.send(RendererMessage::UpdateBrowserWindowId {
                routing_id: render_view.routing_id(),
                window_id: window.window_id(),
            });
        }

        self.render_view = Some(render_view);
    }

    /// Open a URL on behalf of hosted content.
    ///
    /// Only allow-listed dispositions get through, and only from a host
    /// bound to a browser: navigation needs a user-gesture-bearing browser
    /// context behind it.
    pub fn open_url_from_tab(
        &self,
        _source: &WebContents,
        params: &OpenUrlParams,
    ) -> Option<Rc<WebContents>> {
        if !params.disposition.allowed_from_surface() {
            debug!(
                id = %self.id,
                disposition = ?params.disposition,
                "navigation disposition rejected"
            );
            return None;
        }
        match &self.browser {
            Some(browser) => browser.open_url(params),
            None => None,
        }
    }

    /// Content auto-resized; forward to the platform view.
    pub fn resize_due_to_auto_resize(&mut self, _source: &WebContents, new_size: Size) {
        if let Some(view) = self.view.as_mut() {
            view.resize(new_size);
        }
    }

    /// Native handle of the platform view, or `None` before view creation.
    #[cfg(not(target_os = "android"))]
    pub fn host_view(&self) -> Option<ViewHandle> {
        self.view.as_ref().map(|view| view.native_view())
    }

    /// Window controller of the parent browser, if the host has one.
    pub fn window_controller(&self) -> Option<Rc<dyn WindowController>> {
        self.browser
            .as_ref()
            .and_then(|browser| browser.window_controller())
    }

    /// View-bound hosts are never background pages.
    pub fn is_background_page(&self) -> bool {
        debug_assert!(self.view.is_some(), "background-page query before view creation");
        false
    }

    /// Close this surface. The view withdraws from display; its disposal
    /// happens when the host is dropped.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Some(view) = self.view.as_mut() {
            view.close();
        }
        debug!(id = %self.id, "surface closed");
        self.events.publish(Event::SurfaceClosed(self.id));
    }
}
