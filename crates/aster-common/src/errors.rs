#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("view creation error: {0}")]
    ViewCreation(String),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("window handle error: {0}")]
    WindowHandle(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AsterError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
