//! The file dialog handler hook.
//!
//! The host engine calls [`handle_dialog_request`] on its UI thread whenever a
//! page asks for a file chooser. The request is forwarded to
//! [`DialogHandler::on_file_dialog`], which by default declines so that the
//! host shows its own dialog.
//!
//! # Handler Contract
//!
//! - Return `false` to let the host show its default dialog. The callback must
//!   not be touched.
//! - Return `true` to take over. The callback must then be resolved exactly
//!   once, possibly later and from another thread.
//!
//! Neither rule is enforced here. A handler that returns `true` and never
//! resolves the callback leaves the page waiting on a dialog that will never
//! close; there is no timeout. Hosts that want to observe this can pass a
//! [`FileDialogCompletion`](super::FileDialogCompletion) and wait on it with a
//! deadline.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_webview::dialog::{
//!     DialogHandler, FileDialogMode, FileDialogRequest, SharedFileDialogCallback,
//! };
//!
//! /// Handles save dialogs itself; leaves everything else to the host.
//! struct SaveToDownloads;
//!
//! impl DialogHandler for SaveToDownloads {
//!     fn on_file_dialog(
//!         &self,
//!         request: &FileDialogRequest,
//!         callback: SharedFileDialogCallback,
//!     ) -> bool {
//!         if request.mode() != FileDialogMode::Save {
//!             return false;
//!         }
//!         callback.continue_with(vec!["/home/user/Downloads/page.html".into()]);
//!         true
//!     }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use super::callback::SharedFileDialogCallback;
use super::request::FileDialogRequest;

/// Extension point for host file dialog requests.
///
/// Methods are called on the host's UI thread.
///
/// # Thread Safety
///
/// Handlers must be `Send + Sync` so a single handler can be shared by every
/// web view in the application.
pub trait DialogHandler: Send + Sync {
    /// Run a file chooser for `request`.
    ///
    /// Returns `true` if this handler will resolve `callback`, or `false` to
    /// have the host show its default dialog. The default implementation
    /// returns `false` and does not touch `callback`.
    fn on_file_dialog(
        &self,
        _request: &FileDialogRequest,
        _callback: SharedFileDialogCallback,
    ) -> bool {
        false
    }
}

impl<H: DialogHandler + ?Sized> DialogHandler for Arc<H> {
    fn on_file_dialog(&self, request: &FileDialogRequest, callback: SharedFileDialogCallback) -> bool {
        (**self).on_file_dialog(request, callback)
    }
}

impl<H: DialogHandler + ?Sized> DialogHandler for Box<H> {
    fn on_file_dialog(&self, request: &FileDialogRequest, callback: SharedFileDialogCallback) -> bool {
        (**self).on_file_dialog(request, callback)
    }
}

impl<H: DialogHandler + ?Sized> DialogHandler for &H {
    fn on_file_dialog(&self, request: &FileDialogRequest, callback: SharedFileDialogCallback) -> bool {
        (**self).on_file_dialog(request, callback)
    }
}

/// Entry point for the host: dispatch one file dialog request to `handler`.
///
/// Returns the handler's answer unchanged. `callback` is moved into the
/// handler as-is and never invoked here.
#[inline]
pub fn handle_dialog_request<H: DialogHandler + ?Sized>(
    handler: &H,
    request: &FileDialogRequest,
    callback: SharedFileDialogCallback,
) -> bool {
    handler.on_file_dialog(request, callback)
}

/// A handler that always defers to the host's own dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultDialogHandler;

impl DialogHandler for DefaultDialogHandler {}

/// A handler backed by a closure.
///
/// # Example
///
/// ```
/// use horizon_lattice_webview::dialog::FnDialogHandler;
///
/// let handler = FnDialogHandler::new(|request, callback| {
///     if request.accept_filters().is_empty() {
///         return false;
///     }
///     callback.cancel();
///     true
/// });
/// ```
pub struct FnDialogHandler<F>
where
    F: Fn(&FileDialogRequest, SharedFileDialogCallback) -> bool + Send + Sync,
{
    handler_fn: F,
}

impl<F> FnDialogHandler<F>
where
    F: Fn(&FileDialogRequest, SharedFileDialogCallback) -> bool + Send + Sync,
{
    /// Wrap `handler_fn` as a [`DialogHandler`].
    pub fn new(handler_fn: F) -> Self {
        Self { handler_fn }
    }
}

impl<F> DialogHandler for FnDialogHandler<F>
where
    F: Fn(&FileDialogRequest, SharedFileDialogCallback) -> bool + Send + Sync,
{
    fn on_file_dialog(&self, request: &FileDialogRequest, callback: SharedFileDialogCallback) -> bool {
        (self.handler_fn)(request, callback)
    }
}

impl<F> fmt::Debug for FnDialogHandler<F>
where
    F: Fn(&FileDialogRequest, SharedFileDialogCallback) -> bool + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnDialogHandler").finish_non_exhaustive()
    }
}
