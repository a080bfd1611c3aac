//! Build-time-embedded resources injected into hosted documents.

/// Stylesheet injected into every infobar document once it is available.
///
/// Infobars render inside a strip owned by browser chrome; the sheet pins
/// the document to that strip's metrics. No stylesheet for other surface
/// kinds, at the moment.
pub const INFOBAR_CSS: &str = r#"html {
  height: 100%;
  width: 100%;
}

body {
  background: transparent;
  margin: 0;
  overflow: hidden;
  padding: 0;
}
"#;
