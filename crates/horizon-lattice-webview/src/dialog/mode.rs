//! The kind of file dialog a host is asking for.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The mode of a host file dialog request.
///
/// The discriminants match the raw values the host engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileDialogMode {
    /// Select a single existing file.
    #[default]
    Open = 0,

    /// Select one or more existing files.
    OpenMultiple = 1,

    /// Select an existing folder.
    OpenFolder = 2,

    /// Select a file to save to, possibly one that does not exist yet.
    Save = 3,
}

impl FileDialogMode {
    /// The raw value the host uses for this mode.
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    /// Check if this mode allows selecting multiple items.
    pub fn is_multi_select(self) -> bool {
        matches!(self, FileDialogMode::OpenMultiple)
    }

    /// Check if this mode is for opening (vs saving).
    pub fn is_open_mode(self) -> bool {
        !matches!(self, FileDialogMode::Save)
    }

    /// Check if this mode selects directories.
    pub fn is_directory_mode(self) -> bool {
        matches!(self, FileDialogMode::OpenFolder)
    }

    /// Title the host shows when a request carries an empty title.
    pub fn default_title(self) -> &'static str {
        match self {
            FileDialogMode::Open => "Open",
            FileDialogMode::OpenMultiple => "Open Files",
            FileDialogMode::OpenFolder => "Select Folder",
            FileDialogMode::Save => "Save",
        }
    }
}

impl TryFrom<u32> for FileDialogMode {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(FileDialogMode::Open),
            1 => Ok(FileDialogMode::OpenMultiple),
            2 => Ok(FileDialogMode::OpenFolder),
            3 => Ok(FileDialogMode::Save),
            other => Err(Error::UnknownDialogMode(other)),
        }
    }
}
