//! Web contents handles and destruction observation.
//!
//! A [`WebContents`] stands for a page owned elsewhere in the browser — a
//! tab, another surface. Hosts keep weak references only and observe
//! destruction so a cleared reference is the worst they can see.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

/// Identifier for a piece of web contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentsId(pub u32);

impl fmt::Display for ContentsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contents-{}", self.0)
    }
}

type DestructionCallback = Box<dyn FnMut()>;

/// A page owned by some other part of the browser.
///
/// Carries a destruction-observer registry. Observers are registered
/// through a [`DestructionGuard`] that unregisters on drop; observers still
/// registered when the contents is destroyed fire exactly once.
pub struct WebContents {
    id: ContentsId,
    url: RefCell<String>,
    observers: RefCell<Vec<Option<DestructionCallback>>>,
}

impl WebContents {
    pub fn new(id: ContentsId, url: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            id,
            url: RefCell::new(url.into()),
            observers: RefCell::new(Vec::new()),
        })
    }

    pub fn id(&self) -> ContentsId {
        self.id
    }

    pub fn url(&self) -> String {
        self.url.borrow().clone()
    }

    pub fn set_url(&self, url: impl Into<String>) {
        *self.url.borrow_mut() = url.into();
    }

    /// Register a destruction observer. Dropping the returned guard
    /// unregisters it.
    pub fn observe_destruction(
        self: &Rc<Self>,
        callback: impl FnMut() + 'static,
    ) -> DestructionGuard {
        let mut observers = self.observers.borrow_mut();
        let slot = observers.len();
        observers.push(Some(Box::new(callback)));
        DestructionGuard {
            contents: Rc::downgrade(self),
            slot,
        }
    }

    /// How many destruction observers are currently registered.
    pub fn observer_count(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|entry| entry.is_some())
            .count()
    }
}

impl Drop for WebContents {
    fn drop(&mut self) {
        // Take each callback out of its slot so it fires exactly once.
        let observers = self.observers.get_mut();
        for entry in observers.iter_mut() {
            if let Some(mut callback) = entry.take() {
                callback();
            }
        }
    }
}

impl fmt::Debug for WebContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebContents")
            .field("id", &self.id)
            .field("url", &self.url.borrow())
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Unregisters its destruction observer when dropped.
pub struct DestructionGuard {
    contents: Weak<WebContents>,
    slot: usize,
}

impl Drop for DestructionGuard {
    fn drop(&mut self) {
        // If the contents is already gone (or mid-destruction), the
        // registry died with it and there is nothing to unregister.
        if let Some(contents) = self.contents.upgrade() {
            if let Some(entry) = contents.observers.borrow_mut().get_mut(self.slot) {
                *entry = None;
            }
        }
    }
}

impl fmt::Debug for DestructionGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DestructionGuard")
            .field("slot", &self.slot)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn id_and_url_accessors() {
        let contents = WebContents::new(ContentsId(4), "https://example.com");
        assert_eq!(contents.id(), ContentsId(4));
        assert_eq!(contents.url(), "https://example.com");

        contents.set_url("https://example.com/next");
        assert_eq!(contents.url(), "https://example.com/next");
    }

    #[test]
    fn contents_id_display() {
        assert_eq!(ContentsId(12).to_string(), "contents-12");
    }

    #[test]
    fn observer_fires_on_destruction() {
        let fired = Rc::new(Cell::new(false));
        let contents = WebContents::new(ContentsId(1), "about:blank");

        let flag = Rc::clone(&fired);
        let _guard = contents.observe_destruction(move || flag.set(true));

        assert!(!fired.get());
        drop(contents);
        assert!(fired.get());
    }

    #[test]
    fn dropping_guard_unregisters() {
        let fired = Rc::new(Cell::new(false));
        let contents = WebContents::new(ContentsId(1), "about:blank");

        let flag = Rc::clone(&fired);
        let guard = contents.observe_destruction(move || flag.set(true));
        assert_eq!(contents.observer_count(), 1);

        drop(guard);
        assert_eq!(contents.observer_count(), 0);

        drop(contents);
        assert!(!fired.get());
    }

    #[test]
    fn multiple_observers_all_fire() {
        let count = Rc::new(Cell::new(0));
        let contents = WebContents::new(ContentsId(1), "about:blank");

        let a = Rc::clone(&count);
        let _guard_a = contents.observe_destruction(move || a.set(a.get() + 1));
        let b = Rc::clone(&count);
        let _guard_b = contents.observe_destruction(move || b.set(b.get() + 1));

        drop(contents);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn guard_outliving_contents_is_harmless() {
        let contents = WebContents::new(ContentsId(1), "about:blank");
        let guard = contents.observe_destruction(|| {});

        drop(contents);
        drop(guard);
    }

    #[test]
    fn observer_count_tracks_registration() {
        let contents = WebContents::new(ContentsId(1), "about:blank");
        assert_eq!(contents.observer_count(), 0);

        let guard_a = contents.observe_destruction(|| {});
        let _guard_b = contents.observe_destruction(|| {});
        assert_eq!(contents.observer_count(), 2);

        drop(guard_a);
        assert_eq!(contents.observer_count(), 1);
    }
}
