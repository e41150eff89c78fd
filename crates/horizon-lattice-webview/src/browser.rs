//! Opaque handles for the host's browser objects.
//!
//! A dialog request names two host objects: the embedding surface that owns the
//! browser (the web view widget) and the browser session inside it. Both are
//! owned by the host engine; this crate only carries their identifiers.

use std::fmt;

/// Identifies the embedding web view surface that issued a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WebViewId(u64);

impl WebViewId {
    /// Wrap a host-assigned surface identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-assigned identifier.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WebViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "webview#{}", self.0)
    }
}

/// Identifies a browser session within a web view.
///
/// Popups get their own session, so a single web view may issue requests
/// under several browser ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrowserId(i32);

impl BrowserId {
    /// Wrap a host-assigned browser identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The host-assigned identifier.
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for BrowserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "browser#{}", self.0)
    }
}
