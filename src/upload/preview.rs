// SPDX-License-Identifier: MPL-2.0
//! Transient preview references for selected videos.
//!
//! A preview reference is an opaque `preview://` URL that stays valid until it
//! is revoked. The form resolves its live reference when the user asks to
//! play the video, and releases it when the file is removed or submitted.

use crate::domain::upload::SelectedVideo;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

const PREVIEW_SCHEME: &str = "preview://";

/// Displayable reference to a selected local file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewUrl(String);

impl fmt::Display for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issues and revokes preview references.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    next_id: u64,
    live: HashMap<PreviewUrl, PathBuf>,
}

impl PreviewRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new reference for `video`.
    pub fn create(&mut self, video: &SelectedVideo) -> PreviewUrl {
        self.next_id += 1;
        let url = PreviewUrl(format!(
            "{PREVIEW_SCHEME}{}/{}",
            self.next_id,
            video.file_name()
        ));
        self.live.insert(url.clone(), video.path().to_path_buf());
        url
    }

    /// Releases `url`. Returns false if it was not live.
    pub fn revoke(&mut self, url: &PreviewUrl) -> bool {
        self.live.remove(url).is_some()
    }

    /// Resolves a live reference back to its file.
    #[must_use]
    pub fn resolve(&self, url: &PreviewUrl) -> Option<&Path> {
        self.live.get(url).map(PathBuf::as_path)
    }

    /// Number of references not yet revoked.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
