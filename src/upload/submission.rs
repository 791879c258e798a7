// SPDX-License-Identifier: MPL-2.0
//! Submission payload and the sink it is handed to.
//!
//! There is no upload transport. A [`SubmissionSink`] receives the payload the
//! form produced; the default sink only logs it. A real backend plugs in by
//! implementing the trait.

use crate::domain::upload::{ReconstructionMethod, SelectedVideo};

/// What the form hands over on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub email: String,
    pub method: ReconstructionMethod,
    pub video: SelectedVideo,
}

/// Receiver for completed submissions.
pub trait SubmissionSink: Send + Sync {
    fn submit(&self, submission: &Submission);
}

/// Logs each submission at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmissionSink;

impl SubmissionSink for LogSubmissionSink {
    fn submit(&self, submission: &Submission) {
        log::info!(
            "Form submitted: email={} method={} video={} ({}, {} bytes)",
            submission.email,
            submission.method.as_str(),
            submission.video.path().display(),
            submission.video.media_type(),
            submission.video.size_bytes(),
        );
    }
}
