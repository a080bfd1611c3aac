use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

/// A width/height pair in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Identifier for one hosted extension surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub u32);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

/// Identifier of a browser window, as exposed to extension script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub i32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// The kind of extension surface a view host presents.
///
/// Fixed at construction. Decides which behaviors are active: infobars get
/// the chrome stylesheet, popups close on Escape. Panel-style hosts are not
/// view-bound and have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    Dialog,
    Infobar,
    Popup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_size() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let s = r.size();
        assert_eq!(s.width, 800.0);
        assert_eq!(s.height, 600.0);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect {
            x: 0.0,
            y: 0.0,
            width: 400.0,
            height: 300.0,
        };
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn surface_id_display() {
        let id = SurfaceId(42);
        assert_eq!(id.to_string(), "surface-42");
    }

    #[test]
    fn surface_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(SurfaceId(1));
        set.insert(SurfaceId(2));
        set.insert(SurfaceId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn window_id_display() {
        let id = WindowId(7);
        assert_eq!(id.to_string(), "window-7");
    }

    #[test]
    fn window_id_serialization() {
        let id = WindowId(-1);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: WindowId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn surface_kind_variants() {
        let kinds = [SurfaceKind::Dialog, SurfaceKind::Infobar, SurfaceKind::Popup];
        for kind in &kinds {
            let json = serde_json::to_string(kind).unwrap();
            let deserialized: SurfaceKind = serde_json::from_str(&json).unwrap();
            assert_eq!(*kind, deserialized);
        }
    }
}
