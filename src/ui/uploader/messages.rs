// SPDX-License-Identifier: MPL-2.0
//! Upload form message/event types re-exported by the facade.

use crate::domain::upload::{ReconstructionMethod, SelectedVideo};
use crate::upload::Submission;
use std::path::PathBuf;

/// Messages emitted by the upload form widgets and timers.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    MethodSelected(ReconstructionMethod),
    /// The drop zone was clicked; the parent opens a file dialog.
    BrowseRequested,
    FileSelected(SelectedVideo),
    RemoveFile,
    /// Play the selected video through its preview reference.
    OpenPreview,
    /// One period of the simulated upload elapsed.
    ProgressTick,
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    BrowseRequested,
    /// A picked file did not declare a video media type and was dropped.
    FileRejected { path: PathBuf, media_type: String },
    /// The live preview resolved to this file; the parent opens it.
    PreviewRequested(PathBuf),
    UploadStarted,
    UploadCompleted,
    Submitted(Submission),
}
