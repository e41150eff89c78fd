//! The immutable description of one file dialog request.

use std::path::Path;

use crate::browser::{BrowserId, WebViewId};

use super::filter::AcceptFilters;
use super::mode::FileDialogMode;

/// Everything the host says about a file dialog it is about to show.
///
/// Requests are built once by the host integration and then only read.
/// Empty strings are meaningful: an empty title means "use the default title
/// for the mode" and an empty default path means "no initial selection".
///
/// # Example
///
/// ```
/// use horizon_lattice_webview::browser::{BrowserId, WebViewId};
/// use horizon_lattice_webview::dialog::{AcceptFilters, FileDialogMode, FileDialogRequest};
///
/// let request = FileDialogRequest::builder(WebViewId::new(1), BrowserId::new(1), FileDialogMode::Save)
///     .title("Export")
///     .default_file_path("report.csv")
///     .accept_filters(AcceptFilters::from_parallel([".csv"], [".csv"], ["CSV"]).unwrap())
///     .build();
///
/// assert_eq!(request.mode(), FileDialogMode::Save);
/// assert_eq!(request.title(), "Export");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDialogRequest {
    web_view: WebViewId,
    browser: BrowserId,
    mode: FileDialogMode,
    title: String,
    default_file_path: String,
    accept_filters: AcceptFilters,
}

impl FileDialogRequest {
    /// Create a request from all of its parts.
    pub fn new(
        web_view: WebViewId,
        browser: BrowserId,
        mode: FileDialogMode,
        title: impl Into<String>,
        default_file_path: impl Into<String>,
        accept_filters: AcceptFilters,
    ) -> Self {
        Self {
            web_view,
            browser,
            mode,
            title: title.into(),
            default_file_path: default_file_path.into(),
            accept_filters,
        }
    }

    /// Start building a request with an empty title, no default path and no filters.
    pub fn builder(
        web_view: WebViewId,
        browser: BrowserId,
        mode: FileDialogMode,
    ) -> FileDialogRequestBuilder {
        FileDialogRequestBuilder {
            request: Self::new(web_view, browser, mode, "", "", AcceptFilters::new()),
        }
    }

    /// The web view surface that issued the request.
    pub fn web_view(&self) -> WebViewId {
        self.web_view
    }

    /// The browser session that issued the request.
    pub fn browser(&self) -> BrowserId {
        self.browser
    }

    /// The kind of dialog requested.
    pub fn mode(&self) -> FileDialogMode {
        self.mode
    }

    /// The requested title. May be empty.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The requested title, or the mode's default title when empty.
    pub fn effective_title(&self) -> &str {
        if self.title.is_empty() {
            self.mode.default_title()
        } else {
            &self.title
        }
    }

    /// Path with optional directory and/or file name to select initially. May be empty.
    pub fn default_file_path(&self) -> &str {
        &self.default_file_path
    }

    /// The default file path as a [`Path`], or `None` when empty.
    pub fn default_path(&self) -> Option<&Path> {
        (!self.default_file_path.is_empty()).then(|| Path::new(&self.default_file_path))
    }

    /// The accepted file types, in host order.
    pub fn accept_filters(&self) -> &AcceptFilters {
        &self.accept_filters
    }
}

/// Builder for [`FileDialogRequest`].
#[derive(Debug, Clone)]
pub struct FileDialogRequestBuilder {
    request: FileDialogRequest,
}

impl FileDialogRequestBuilder {
    /// Set the dialog title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.request.title = title.into();
        self
    }

    /// Set the initially selected path.
    pub fn default_file_path(mut self, path: impl Into<String>) -> Self {
        self.request.default_file_path = path.into();
        self
    }

    /// Set the accepted file types.
    pub fn accept_filters(mut self, filters: AcceptFilters) -> Self {
        self.request.accept_filters = filters;
        self
    }

    /// Finish the request.
    pub fn build(self) -> FileDialogRequest {
        self.request
    }
}
