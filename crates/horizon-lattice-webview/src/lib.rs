//! Browser-embedding hooks for Horizon Lattice.
//!
//! This crate defines the handler side of the web view's file dialog hook:
//!
//! - **Requests**: [`FileDialogRequest`](dialog::FileDialogRequest) describes
//!   what the page asked for, including mode, title, default path and accept filters
//! - **Handlers**: [`DialogHandler`](dialog::DialogHandler) decides whether the
//!   host shows its own dialog or the application takes over
//! - **Callbacks**: [`FileDialogCallback`](dialog::FileDialogCallback) carries the
//!   eventual selection back to the host
//!
//! The browser engine itself, its threads and its other callbacks live
//! elsewhere; everything here runs inside the host's UI callback.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_webview::browser::{BrowserId, WebViewId};
//! use horizon_lattice_webview::dialog::{
//!     DefaultDialogHandler, FileDialogCompletion, FileDialogMode, FileDialogRequest,
//!     handle_dialog_request,
//! };
//!
//! let request = FileDialogRequest::builder(WebViewId::new(1), BrowserId::new(1), FileDialogMode::Open)
//!     .build();
//! let (callback, _receiver) = FileDialogCompletion::channel();
//!
//! // The default handler declines, so the host shows its own dialog.
//! assert!(!handle_dialog_request(&DefaultDialogHandler, &request, callback));
//! ```

pub mod browser;
pub mod dialog;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
