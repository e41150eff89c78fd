//! A dialog handler that answers every request with a fresh temporary path.
//!
//! Handy for automated page tests and demos: every file chooser the page opens
//! is resolved immediately, without user interaction, with a uniquely named
//! path that already exists on disk. The path is kept after the handler
//! returns; cleaning it up is the caller's business.
//!
//! ```ignore
//! use horizon_lattice_webview::dialog::{TempFileDialogConfig, TempFileDialogHandler};
//!
//! let handler = TempFileDialogHandler::new(
//!     TempFileDialogConfig::with_directory("/tmp/page-uploads").prefix("upload-"),
//! );
//! web_view.set_dialog_handler(handler);
//! ```

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::logging::targets;

use super::callback::SharedFileDialogCallback;
use super::handler::DialogHandler;
use super::request::FileDialogRequest;

/// Prefix used for generated names unless configured otherwise.
const DEFAULT_PREFIX: &str = "lattice-dialog-";

/// Configuration for [`TempFileDialogHandler`].
#[derive(Debug, Clone)]
pub struct TempFileDialogConfig {
    /// Directory to create paths in. `None` uses the system temp directory.
    pub directory: Option<PathBuf>,
    /// Prefix for generated file and folder names.
    pub prefix: String,
}

impl Default for TempFileDialogConfig {
    fn default() -> Self {
        Self {
            directory: None,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl TempFileDialogConfig {
    /// Create a configuration that places paths in `directory`.
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(directory.into()),
            ..Default::default()
        }
    }

    /// Set the name prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn resolved_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// Resolves every file dialog with a newly created temporary path.
///
/// Folder requests get a new empty directory; every other mode gets a new
/// empty file whose suffix is the first extension the request accepts. If the
/// path cannot be created the handler declines, so the host falls back to
/// its own dialog.
#[derive(Debug, Clone, Default)]
pub struct TempFileDialogHandler {
    config: TempFileDialogConfig,
}

impl TempFileDialogHandler {
    /// Create a handler with the given configuration.
    pub fn new(config: TempFileDialogConfig) -> Self {
        Self { config }
    }

    /// The handler's configuration.
    pub fn config(&self) -> &TempFileDialogConfig {
        &self.config
    }

    /// Create the temporary path that would answer `request`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TempPath`] if the file or directory cannot be created.
    pub fn create_path(&self, request: &FileDialogRequest) -> Result<PathBuf> {
        let directory = self.config.resolved_directory();
        let suffix = suffix_for(request);
        let mut builder = tempfile::Builder::new();
        builder.prefix(&self.config.prefix);

        if request.mode().is_directory_mode() {
            return builder
                .tempdir_in(&directory)
                .map(|dir| dir.keep())
                .map_err(|err| Error::temp_path(&directory, err));
        }

        builder.suffix(&suffix);
        builder
            .tempfile_in(&directory)
            .map_err(|err| Error::temp_path(&directory, err))?
            .into_temp_path()
            .keep()
            .map_err(|err| Error::temp_path(&directory, err.error))
    }
}

/// The first concrete extension the request accepts, with a leading dot.
fn suffix_for(request: &FileDialogRequest) -> String {
    request
        .accept_filters()
        .iter()
        .flat_map(|filter| filter.resolved_extensions())
        .find(|ext| !ext.contains('*') && !ext.contains(std::path::is_separator))
        .map(|ext| {
            if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{ext}")
            }
        })
        .unwrap_or_default()
}

impl DialogHandler for TempFileDialogHandler {
    fn on_file_dialog(&self, request: &FileDialogRequest, callback: SharedFileDialogCallback) -> bool {
        match self.create_path(request) {
            Ok(path) => {
                tracing::debug!(
                    target: targets::DIALOG,
                    web_view = %request.web_view(),
                    browser = %request.browser(),
                    mode = ?request.mode(),
                    path = %path.display(),
                    "answering file dialog with temporary path"
                );
                callback.continue_with(vec![path]);
                true
            }
            Err(err) => {
                tracing::warn!(target: targets::DIALOG, "temporary dialog path unavailable, deferring to host: {}", err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{BrowserId, WebViewId};
    use crate::dialog::filter::AcceptFilters;
    use crate::dialog::mode::FileDialogMode;

    fn request(mode: FileDialogMode, filters: AcceptFilters) -> FileDialogRequest {
        FileDialogRequest::builder(WebViewId::new(1), BrowserId::new(1), mode)
            .accept_filters(filters)
            .build()
    }

    #[test]
    fn test_config_defaults() {
        let config = TempFileDialogConfig::default();
        assert!(config.directory.is_none());
        assert_eq!(config.prefix, DEFAULT_PREFIX);
        assert_eq!(config.resolved_directory(), std::env::temp_dir());
    }

    #[test]
    fn test_suffix_from_first_concrete_extension() {
        let filters = AcceptFilters::from_parallel(
            ["*/*", "image/*"],
            [".*", ".png;.jpg"],
            ["All", "Images"],
        )
        .unwrap();
        assert_eq!(suffix_for(&request(FileDialogMode::Open, filters)), ".png");

        let bare = AcceptFilters::from_parallel(["Docs|md"], [""], [""]).unwrap();
        assert_eq!(suffix_for(&request(FileDialogMode::Open, bare)), ".md");

        assert_eq!(suffix_for(&request(FileDialogMode::Open, AcceptFilters::new())), "");
    }

    #[test]
    fn test_creates_file_in_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let handler = TempFileDialogHandler::new(
            TempFileDialogConfig::with_directory(dir.path()).prefix("upload-"),
        );
        let filters = AcceptFilters::from_parallel([".txt"], [".txt"], ["Text"]).unwrap();

        let path = handler
            .create_path(&request(FileDialogMode::Save, filters))
            .unwrap();

        assert!(path.is_file());
        assert_eq!(path.parent(), Some(dir.path()));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("upload-"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_creates_directory_for_folder_mode() {
        let dir = tempfile::tempdir().unwrap();
        let handler = TempFileDialogHandler::new(TempFileDialogConfig::with_directory(dir.path()));

        let path = handler
            .create_path(&request(FileDialogMode::OpenFolder, AcceptFilters::new()))
            .unwrap();

        assert!(path.is_dir());
        assert_eq!(path.parent(), Some(dir.path()));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let handler = TempFileDialogHandler::new(TempFileDialogConfig::with_directory(&missing));

        let err = handler
            .create_path(&request(FileDialogMode::Open, AcceptFilters::new()))
            .unwrap_err();
        assert!(matches!(err, Error::TempPath { directory, .. } if directory == missing));
    }
}
