//! Completion callbacks for file dialog requests.
//!
//! When a [`DialogHandler`](super::DialogHandler) takes over a request it
//! receives the host's [`FileDialogCallback`] and must resolve it exactly once,
//! either with the selected paths or by cancelling. The callback is `Send +
//! Sync` so a handler may resolve it later from another thread.
//!
//! [`FileDialogCompletion`] is a ready-made callback for hosts (and tests) that
//! want to receive the resolution through a channel:
//!
//! ```
//! use horizon_lattice_webview::dialog::{FileDialogCallback, FileDialogCompletion, FileDialogResult};
//!
//! let (callback, receiver) = FileDialogCompletion::channel();
//! std::thread::spawn(move || callback.continue_with(vec!["/tmp/a.txt".into()]));
//!
//! let result = receiver.wait().unwrap();
//! assert_eq!(result.paths().len(), 1);
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::targets;

/// Resolution handle for one file dialog request.
///
/// Whoever accepts responsibility for a request must call exactly one of
/// [`continue_with`](Self::continue_with) or [`cancel`](Self::cancel), exactly
/// once.
pub trait FileDialogCallback: Send + Sync {
    /// Resolve the request with the selected paths.
    ///
    /// A single path for open, save and folder modes; any number for
    /// multi-select. An empty list is treated as a cancellation.
    fn continue_with(&self, file_paths: Vec<PathBuf>);

    /// Resolve the request without a selection.
    fn cancel(&self);

    /// Whether the underlying host object is gone or already resolved.
    fn is_disposed(&self) -> bool;
}

/// The reference-counted callback handle passed through dialog handlers.
pub type SharedFileDialogCallback = Arc<dyn FileDialogCallback>;

impl<C: FileDialogCallback + ?Sized> FileDialogCallback for Arc<C> {
    fn continue_with(&self, file_paths: Vec<PathBuf>) {
        (**self).continue_with(file_paths)
    }

    fn cancel(&self) {
        (**self).cancel()
    }

    fn is_disposed(&self) -> bool {
        (**self).is_disposed()
    }
}

impl<C: FileDialogCallback + ?Sized> FileDialogCallback for Box<C> {
    fn continue_with(&self, file_paths: Vec<PathBuf>) {
        (**self).continue_with(file_paths)
    }

    fn cancel(&self) {
        (**self).cancel()
    }

    fn is_disposed(&self) -> bool {
        (**self).is_disposed()
    }
}

/// How a file dialog request was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileDialogResult {
    /// The user picked these paths.
    Selected(Vec<PathBuf>),
    /// The dialog was dismissed.
    Cancelled,
}

impl FileDialogResult {
    /// The selected paths; empty when cancelled.
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            FileDialogResult::Selected(paths) => paths,
            FileDialogResult::Cancelled => &[],
        }
    }

    /// Whether the dialog was dismissed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FileDialogResult::Cancelled)
    }
}

/// A [`FileDialogCallback`] that delivers its resolution over a channel.
///
/// Only the first resolution is delivered; later ones are logged and ignored.
/// Dropping the last handle without resolving disconnects the channel, which
/// the [`FileDialogReceiver`] reports as [`Error::CallbackAbandoned`].
#[derive(Debug)]
pub struct FileDialogCompletion {
    sender: Mutex<Option<Sender<FileDialogResult>>>,
}

impl FileDialogCompletion {
    /// Create a completion callback and the receiver for its result.
    pub fn channel() -> (Arc<Self>, FileDialogReceiver) {
        let (sender, receiver) = bounded(1);
        let completion = Arc::new(Self {
            sender: Mutex::new(Some(sender)),
        });
        (completion, FileDialogReceiver { receiver })
    }

    fn resolve(&self, result: FileDialogResult) {
        let Some(sender) = self.sender.lock().take() else {
            tracing::warn!(target: targets::COMPLETION, ?result, "file dialog callback resolved more than once; ignoring");
            return;
        };
        tracing::debug!(target: targets::COMPLETION, ?result, "file dialog resolved");
        if sender.send(result).is_err() {
            tracing::debug!(target: targets::COMPLETION, "file dialog receiver already dropped");
        }
    }
}

impl FileDialogCallback for FileDialogCompletion {
    fn continue_with(&self, file_paths: Vec<PathBuf>) {
        if file_paths.is_empty() {
            self.resolve(FileDialogResult::Cancelled);
        } else {
            self.resolve(FileDialogResult::Selected(file_paths));
        }
    }

    fn cancel(&self) {
        self.resolve(FileDialogResult::Cancelled);
    }

    fn is_disposed(&self) -> bool {
        self.sender.lock().is_none()
    }
}

impl Drop for FileDialogCompletion {
    fn drop(&mut self) {
        if self.sender.get_mut().is_some() {
            tracing::warn!(target: targets::COMPLETION, "file dialog callback dropped without being resolved");
        }
    }
}

/// Receiving end of a [`FileDialogCompletion`].
///
/// Yields at most one result.
#[derive(Debug)]
pub struct FileDialogReceiver {
    receiver: Receiver<FileDialogResult>,
}

impl FileDialogReceiver {
    /// The result, if the callback has been resolved already.
    pub fn try_result(&self) -> Option<FileDialogResult> {
        self.receiver.try_recv().ok()
    }

    /// Block until the callback is resolved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CallbackAbandoned`] if every callback handle was dropped
    /// without resolving.
    pub fn wait(&self) -> Result<FileDialogResult> {
        self.receiver.recv().map_err(|_| Error::CallbackAbandoned)
    }

    /// Block until the callback is resolved or `timeout` elapses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] when the time runs out, or
    /// [`Error::CallbackAbandoned`] if every callback handle was dropped
    /// without resolving.
    pub fn wait_timeout(&self, timeout: Duration) -> Result<FileDialogResult> {
        self.receiver.recv_timeout(timeout).map_err(|err| match err {
            RecvTimeoutError::Timeout => Error::Timeout(timeout),
            RecvTimeoutError::Disconnected => Error::CallbackAbandoned,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continue_delivers_paths() {
        let (callback, receiver) = FileDialogCompletion::channel();
        assert!(!callback.is_disposed());
        assert!(receiver.try_result().is_none());

        callback.continue_with(vec![PathBuf::from("/tmp/a.txt"), PathBuf::from("/tmp/b.txt")]);

        assert!(callback.is_disposed());
        let result = receiver.try_result().unwrap();
        assert_eq!(result.paths().len(), 2);
        assert!(!result.is_cancelled());
    }

    #[test]
    fn test_cancel() {
        let (callback, receiver) = FileDialogCompletion::channel();
        callback.cancel();
        assert_eq!(receiver.wait().unwrap(), FileDialogResult::Cancelled);
    }

    #[test]
    fn test_empty_selection_is_cancel() {
        let (callback, receiver) = FileDialogCompletion::channel();
        callback.continue_with(Vec::new());
        assert!(receiver.wait().unwrap().is_cancelled());
    }

    #[test]
    fn test_only_first_resolution_counts() {
        let (callback, receiver) = FileDialogCompletion::channel();
        callback.cancel();
        callback.continue_with(vec![PathBuf::from("late.txt")]);

        assert_eq!(receiver.wait().unwrap(), FileDialogResult::Cancelled);
        assert!(receiver.try_result().is_none());
    }

    #[test]
    fn test_abandoned_callback() {
        let (callback, receiver) = FileDialogCompletion::channel();
        drop(callback);
        assert!(matches!(receiver.wait(), Err(Error::CallbackAbandoned)));
    }

    #[test]
    fn test_wait_timeout() {
        let (_callback, receiver) = FileDialogCompletion::channel();
        let err = receiver.wait_timeout(Duration::from_millis(10)).unwrap_err();
        assert!(matches!(err, Error::Timeout(d) if d == Duration::from_millis(10)));
    }

    #[test]
    fn test_resolve_from_other_thread() {
        let (callback, receiver) = FileDialogCompletion::channel();
        let handle = std::thread::spawn(move || callback.continue_with(vec!["x.bin".into()]));
        let result = receiver.wait_timeout(Duration::from_secs(5)).unwrap();
        handle.join().unwrap();
        assert_eq!(result.paths(), &[PathBuf::from("x.bin")]);
    }

    #[test]
    fn test_shared_handle_forwards() {
        let (completion, receiver) = FileDialogCompletion::channel();
        let shared: SharedFileDialogCallback = completion;
        let boxed: Box<dyn FileDialogCallback> = Box::new(shared.clone());
        boxed.cancel();
        assert!(shared.is_disposed());
        assert!(receiver.wait().unwrap().is_cancelled());
    }
}
