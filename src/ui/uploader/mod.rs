// SPDX-License-Identifier: MPL-2.0
//! Upload form: email, reconstruction method, capture video, simulated upload.
//!
//! The form owns its [`State`] exclusively and follows the "state down,
//! messages up" pattern: widgets emit [`Message`]s, [`State::update`] applies
//! them and returns an [`Event`] for the parent when something leaves the
//! form (a dialog request, a rejected file, a submission).

use crate::domain::upload::{
    ProgressInterval, ProgressStep, ReconstructionMethod, SelectedVideo, UploadProgress,
};
use crate::upload::{
    email_error, is_valid_email, PreviewRegistry, PreviewUrl, ProgressDriver, Submission,
};

mod messages;
mod view;


pub use messages::{Event, Message};
pub use view::{view, ViewContext};

/// Local UI state for the upload form.
#[derive(Debug, Default)]
pub struct State {
    email: String,
    email_error: Option<&'static str>,
    method: Option<ReconstructionMethod>,
    video: Option<SelectedVideo>,
    preview: Option<PreviewUrl>,
    progress: ProgressDriver,
    previews: PreviewRegistry,
}

impl State {
    /// Creates an empty form whose simulated upload uses the given pacing.
    #[must_use]
    pub fn new(interval: ProgressInterval, step: ProgressStep) -> Self {
        Self {
            progress: ProgressDriver::new(interval, step),
            ..Self::default()
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(email) => {
                self.set_email(email);
                Event::None
            }
            Message::MethodSelected(method) => {
                self.method = Some(method);
                Event::None
            }
            Message::BrowseRequested => Event::BrowseRequested,
            Message::FileSelected(video) => self.select_file(video),
            Message::RemoveFile => {
                self.remove_file();
                Event::None
            }
            Message::OpenPreview => self
                .preview
                .as_ref()
                .and_then(|url| self.previews.resolve(url))
                .map_or(Event::None, |path| Event::PreviewRequested(path.to_path_buf())),
            Message::ProgressTick => {
                if !self.progress.is_running() {
                    return Event::None;
                }
                if self.progress.tick().is_complete() {
                    Event::UploadCompleted
                } else {
                    Event::None
                }
            }
            Message::Submit => self.submit(),
        }
    }

    fn set_email(&mut self, email: String) {
        self.email_error = email_error(&email);
        self.email = email;
    }

    fn select_file(&mut self, video: SelectedVideo) -> Event {
        if !video.is_video() {
            return Event::FileRejected {
                path: video.path().to_path_buf(),
                media_type: video.media_type().to_string(),
            };
        }

        if let Some(previous) = self.preview.take() {
            self.previews.revoke(&previous);
        }
        let preview = self.previews.create(&video);
        log::debug!("Created {preview} for {}", video.path().display());
        self.preview = Some(preview);
        self.video = Some(video);
        self.progress.restart();
        Event::UploadStarted
    }

    fn remove_file(&mut self) {
        if let Some(preview) = self.preview.take() {
            self.previews.revoke(&preview);
        }
        self.video = None;
        self.progress.cancel();
    }

    fn submit(&mut self) -> Event {
        if !self.is_submit_enabled() {
            return Event::None;
        }
        let (Some(method), Some(video)) = (self.method, self.video.clone()) else {
            return Event::None;
        };

        let submission = Submission {
            email: std::mem::take(&mut self.email),
            method,
            video,
        };

        self.email_error = None;
        self.method = None;
        self.remove_file();
        Event::Submitted(submission)
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// i18n key of the inline email error, if one is shown.
    #[must_use]
    pub fn email_error(&self) -> Option<&'static str> {
        self.email_error
    }

    #[must_use]
    pub fn selected_method(&self) -> Option<ReconstructionMethod> {
        self.method
    }

    #[must_use]
    pub fn video(&self) -> Option<&SelectedVideo> {
        self.video.as_ref()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&PreviewUrl> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn upload_progress(&self) -> UploadProgress {
        self.progress.progress()
    }

    /// True while the simulated upload needs ticks.
    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.progress.is_running()
    }

    #[must_use]
    pub fn progress_interval(&self) -> ProgressInterval {
        self.progress.interval()
    }

    /// Number of preview references still held.
    #[must_use]
    pub fn live_previews(&self) -> usize {
        self.previews.live_count()
    }

    /// Valid email, a method, a video, and a finished upload.
    #[must_use]
    pub fn is_submit_enabled(&self) -> bool {
        is_valid_email(&self.email)
            && self.method.is_some()
            && self.video.is_some()
            && self.progress.progress().is_complete()
    }
}
