//! File dialog requests from the embedded browser.
//!
//! When a page opens a file chooser (an `<input type="file">`, a
//! `showSaveFilePicker()` call, and so on) the host engine describes it with a
//! [`FileDialogRequest`] and hands it to the web view's [`DialogHandler`]. The
//! handler either declines, and the host shows its built-in dialog, or takes
//! over and later resolves the accompanying [`FileDialogCallback`].
//!
//! # Built-in Handlers
//!
//! - [`DefaultDialogHandler`]: always declines
//! - [`FnDialogHandler`]: wraps a closure
//! - [`TempFileDialogHandler`]: answers with a fresh temporary path
//! - [`SuppressDialogHandler`]: cancels every request

mod callback;
mod filter;
mod handler;
mod mode;
mod request;
mod suppress;
mod temp_file;

pub use callback::{
    FileDialogCallback, FileDialogCompletion, FileDialogReceiver, FileDialogResult,
    SharedFileDialogCallback,
};
pub use filter::{AcceptFilter, AcceptFilterKind, AcceptFilters};
pub use handler::{DefaultDialogHandler, DialogHandler, FnDialogHandler, handle_dialog_request};
pub use mode::FileDialogMode;
pub use request::{FileDialogRequest, FileDialogRequestBuilder};
pub use suppress::SuppressDialogHandler;
pub use temp_file::{TempFileDialogConfig, TempFileDialogHandler};
