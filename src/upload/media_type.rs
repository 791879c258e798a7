// SPDX-License-Identifier: MPL-2.0
//! Declared media types for picked files.
//!
//! Native file dialogs and window drops only hand over a path, so the media
//! type a file "declares" is derived from its extension, the same way a
//! browser file input reports `File.type`.

use crate::domain::upload::SelectedVideo;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Extensions offered by the video file dialog.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "webm", "mkv", "avi", "ogv"];

const MEDIA_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    ("ogv", "video/ogg"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("ply", "application/octet-stream"),
    ("txt", "text/plain"),
];

/// Returns the media type a file with this path declares, or an empty string
/// when the extension is unknown.
#[must_use]
pub fn declared_media_type<P: AsRef<Path>>(path: P) -> &'static str {
    let Some(extension) = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
    else {
        return "";
    };

    MEDIA_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map_or("", |(_, media_type)| media_type)
}

/// Builds a [`SelectedVideo`] for a picked path.
///
/// The file is not required to be a video; acceptance is the form's call.
///
/// # Errors
///
/// Returns an error if the file metadata cannot be read.
pub fn inspect(path: PathBuf) -> Result<SelectedVideo> {
    let size_bytes = std::fs::metadata(&path)?.len();
    let media_type = declared_media_type(&path);
    Ok(SelectedVideo::new(path, media_type, size_bytes))
}
