//! Platform view layer for hosted extension surfaces.
//!
//! Provides the [`ExtensionView`] capability trait, the toolkit-backed
//! implementation, and a headless implementation for tests and windowless
//! environments. Toolkit selection happens at build time; a target with no
//! supported toolkit fails to configure rather than asserting at runtime.

pub mod headless;
pub mod view;

#[cfg(any(
    target_os = "macos",
    target_os = "windows",
    target_os = "linux",
    target_os = "android"
))]
pub mod wry_view;

#[cfg(not(any(
    target_os = "macos",
    target_os = "windows",
    target_os = "linux",
    target_os = "android"
)))]
compile_error!("no supported view toolkit for this target");

pub use headless::{HeadlessView, ViewLog};
pub use view::{create_extension_view, ExtensionView, ViewConfig, ViewHandle};

/// Window-handle bound required by view construction, re-exported so
/// callers don't need a direct wry dependency.
pub use wry::raw_window_handle::HasWindowHandle;

pub type Result<T> = std::result::Result<T, aster_common::errors::PlatformError>;
