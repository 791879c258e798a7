// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the viewer and submission ports.

use crate::application::port::SplatViewer;
use crate::domain::scene::{SplatFormat, SplatKind, SplatScene};
use crate::error::SceneError;
use crate::upload::{Submission, SubmissionSink};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Viewer that answers every load with the same result.
pub struct FixedViewer(pub Result<SplatScene, SceneError>);

impl SplatViewer for FixedViewer {
    fn load_scene(&self, _path: &Path) -> Result<SplatScene, SceneError> {
        self.0.clone()
    }
}

/// Gaussian PLY scene named `file_name` with `splat_count` splats.
pub fn gaussian_scene(file_name: &str, splat_count: u64) -> SplatScene {
    SplatScene {
        path: PathBuf::from(file_name),
        format: SplatFormat::Ply,
        kind: SplatKind::Gaussians,
        splat_count,
    }
}

/// Keeps submissions in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: Mutex<Vec<Submission>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<Submission> {
        self.received
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Paths of the submitted videos, in submission order.
    pub fn video_paths(&self) -> Vec<PathBuf> {
        self.received()
            .into_iter()
            .map(|s| s.video.path().to_path_buf())
            .collect()
    }
}

impl SubmissionSink for RecordingSink {
    fn submit(&self, submission: &Submission) {
        if let Ok(mut guard) = self.received.lock() {
            guard.push(submission.clone());
        }
    }
}
