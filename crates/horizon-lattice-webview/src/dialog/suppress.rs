//! A dialog handler that never lets a file chooser appear.

use crate::logging::targets;

use super::callback::SharedFileDialogCallback;
use super::handler::DialogHandler;
use super::request::FileDialogRequest;

/// Takes over every file dialog request and cancels it immediately.
///
/// Meant for kiosk and headless hosts where a native dialog would block the
/// UI with nobody around to dismiss it. Pages see the chooser as cancelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuppressDialogHandler;

impl DialogHandler for SuppressDialogHandler {
    fn on_file_dialog(&self, request: &FileDialogRequest, callback: SharedFileDialogCallback) -> bool {
        tracing::debug!(
            target: targets::DIALOG,
            web_view = %request.web_view(),
            browser = %request.browser(),
            mode = ?request.mode(),
            "suppressing file dialog"
        );
        callback.cancel();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{BrowserId, WebViewId};
    use crate::dialog::callback::{FileDialogCallback, FileDialogCompletion, FileDialogResult};
    use crate::dialog::mode::FileDialogMode;

    #[test]
    fn test_cancels_every_mode() {
        for mode in [
            FileDialogMode::Open,
            FileDialogMode::OpenMultiple,
            FileDialogMode::OpenFolder,
            FileDialogMode::Save,
        ] {
            let request = FileDialogRequest::builder(WebViewId::new(3), BrowserId::new(4), mode).build();
            let (callback, receiver) = FileDialogCompletion::channel();

            assert!(SuppressDialogHandler.on_file_dialog(&request, callback.clone()));
            assert!(callback.is_disposed());
            assert_eq!(receiver.try_result(), Some(FileDialogResult::Cancelled));
        }
    }
}
