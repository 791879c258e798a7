// SPDX-License-Identifier: MPL-2.0
//! Video selection types.

use std::path::{Path, PathBuf};

/// Media type prefix every accepted upload must declare.
pub const VIDEO_MEDIA_TYPE_PREFIX: &str = "video/";

/// A local file picked by the user, with the media type it declares.
///
/// The declared media type comes from the selection surface (file extension
/// for native dialogs and drops); the file content is never sniffed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedVideo {
    path: PathBuf,
    file_name: String,
    media_type: String,
    size_bytes: u64,
}

impl SelectedVideo {
    #[must_use]
    pub fn new(path: PathBuf, media_type: impl Into<String>, size_bytes: u64) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path,
            file_name,
            media_type: media_type.into(),
            size_bytes,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Declared media type, e.g. `video/mp4`.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Returns true if the declared media type is a video type.
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.media_type.starts_with(VIDEO_MEDIA_TYPE_PREFIX)
    }
}
