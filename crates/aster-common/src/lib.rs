pub mod errors;
pub mod events;
pub mod input;
pub mod types;

pub use errors::{AsterError, PlatformError};
pub use events::{Event, EventBus};
pub use input::{KeyEvent, KeyEventKind, Modifiers, ShortcutCheck};
pub use types::{Rect, Size, SurfaceId, SurfaceKind, WindowId};

pub type Result<T> = std::result::Result<T, AsterError>;
