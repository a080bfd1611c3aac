//! Navigation dispositions and the extension-surface allow-list.

use serde::{Deserialize, Serialize};

/// Requested placement policy for a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    CurrentTab,
    SingletonTab,
    NewForegroundTab,
    NewBackgroundTab,
    NewPopup,
    NewWindow,
    SaveToDisk,
    OffTheRecord,
    IgnoreAction,
}

impl Disposition {
    /// Whether extension surfaces may open navigations with this
    /// disposition. Everything else is dropped before it reaches the
    /// browser.
    pub fn allowed_from_surface(self) -> bool {
        matches!(
            self,
            Disposition::SingletonTab
                | Disposition::NewForegroundTab
                | Disposition::NewBackgroundTab
                | Disposition::NewPopup
                | Disposition::NewWindow
                | Disposition::SaveToDisk
                | Disposition::OffTheRecord
        )
    }
}

/// Parameters of an open-URL request from hosted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenUrlParams {
    pub url: String,
    pub disposition: Disposition,
    /// Whether a user gesture initiated the request.
    pub user_gesture: bool,
}

impl OpenUrlParams {
    pub fn new(url: impl Into<String>, disposition: Disposition) -> Self {
        Self {
            url: url.into(),
            disposition,
            user_gesture: true,
        }
    }
}
