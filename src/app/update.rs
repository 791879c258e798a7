// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components return events; the handlers here turn those events into side
//! effects: file dialogs, submissions, scene lifecycle and notifications.

use super::{config, Message, Screen};
use crate::domain::upload::SelectedVideo;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::scene::{self, Event as SceneEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::uploader::{self, Event as UploaderEvent};
use crate::upload::{media_type, SubmissionSink};
use iced::{Size, Task};
use std::path::PathBuf;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

/// Prefix shared by the i18n keys of scene load errors.
const SCENE_ERROR_PREFIX: &str = "error-scene-";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub uploader: &'a mut uploader::State,
    pub scene: &'a mut scene::State,
    pub sink: &'a Arc<dyn SubmissionSink>,
    pub notifications: &'a mut notifications::Manager,
    pub config: &'a mut config::Config,
    pub scene_asset: &'a Option<PathBuf>,
    pub window_size: &'a mut Size,
}

/// Handles upload form messages.
pub fn handle_uploader_message(
    ctx: &mut UpdateContext<'_>,
    message: uploader::Message,
) -> Task<Message> {
    match ctx.uploader.update(message) {
        UploaderEvent::None | UploaderEvent::UploadStarted => Task::none(),
        UploaderEvent::UploadCompleted => {
            log::debug!("Simulated upload completed");
            Task::none()
        }
        UploaderEvent::BrowseRequested => handle_open_file_dialog(ctx.i18n),
        UploaderEvent::PreviewRequested(path) => handle_open_preview(path),
        UploaderEvent::FileRejected { path, media_type } => {
            log::warn!(
                "Ignoring {}: declared type '{}' is not a video",
                path.display(),
                media_type
            );
            Task::none()
        }
        UploaderEvent::Submitted(submission) => {
            ctx.sink.submit(&submission);
            ctx.notifications
                .push(Notification::success("notification-submitted"));
            Task::none()
        }
    }
}

/// Handles scene messages and surfaces load results.
pub fn handle_scene_message(ctx: &mut UpdateContext<'_>, message: scene::Message) -> Task<Message> {
    match ctx.scene.update(message) {
        SceneEvent::None => {}
        SceneEvent::ViewerStarted(_) => ctx.notifications.clear_with_prefix(SCENE_ERROR_PREFIX),
        SceneEvent::LoadFailed(error) => {
            ctx.notifications.push(Notification::error(error.i18n_key()));
        }
    }
    Task::none()
}

/// Switches screens. Leaving the Scene screen stops the scene; entering it
/// bootstraps a fresh one.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }
    *ctx.screen = target;

    match target {
        Screen::Upload => {
            ctx.scene.stop();
            ctx.notifications.clear_with_prefix(SCENE_ERROR_PREFIX);
            Task::none()
        }
        Screen::Scene => bootstrap_scene(ctx),
    }
}

/// Starts the scene with the configured container and asset. The CLI asset
/// wins over the configured one.
pub fn bootstrap_scene(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let scene_config = &ctx.config.scene;
    let asset_path = ctx
        .scene_asset
        .clone()
        .or_else(|| scene_config.asset_path.clone());

    ctx.scene
        .bootstrap(
            scene_config.container_id.clone(),
            asset_path,
            *ctx.window_size,
            scene_config.field_of_view(),
        )
        .map(Message::Scene)
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    let event = navbar::update(
        message,
        &navbar::ViewContext {
            i18n: ctx.i18n,
            active: (*ctx.screen).into(),
        },
    );

    match event {
        NavbarEvent::None => Task::none(),
        NavbarEvent::SwitchTo(tab) => handle_screen_switch(ctx, tab.into()),
        NavbarEvent::LanguageChanged(locale) => {
            handle_language_changed(ctx, locale);
            Task::none()
        }
    }
}

/// Applies and persists a new UI language.
fn handle_language_changed(ctx: &mut UpdateContext<'_>, locale: LanguageIdentifier) {
    ctx.i18n.set_locale(locale.clone());
    ctx.config.general.language = Some(locale.to_string());

    if let Err(err) = config::save(ctx.config) {
        log::warn!("Failed to save language preference: {err}");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

/// Opens the native video picker.
pub fn handle_open_file_dialog(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("upload-dialog-title");
    let filter = i18n.tr("upload-dialog-filter");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter, media_type::VIDEO_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FileDialogResult,
    )
}

/// Hands the previewed video to the system player.
pub fn handle_open_preview(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                open::that(&path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))
            })
            .await
            .map_err(|e| Error::Io(e.to_string()))?
        },
        Message::PreviewOpened,
    )
}

pub fn handle_preview_opened(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), Error>,
) -> Task<Message> {
    if let Err(err) = result {
        log::warn!("Failed to open preview: {err}");
        ctx.notifications
            .push(Notification::warning("notification-preview-open-error"));
    }
    Task::none()
}

/// Inspects a picked or dropped path off the update loop.
pub fn handle_file_picked(path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media_type::inspect(path))
                .await
                .map_err(|e| Error::Io(e.to_string()))?
        },
        Message::FileInspected,
    )
}

/// Hands an inspected file to the form, which decides whether to accept it.
pub fn handle_file_inspected(
    ctx: &mut UpdateContext<'_>,
    result: Result<SelectedVideo, Error>,
) -> Task<Message> {
    match result {
        Ok(video) => handle_uploader_message(ctx, uploader::Message::FileSelected(video)),
        Err(err) => {
            log::warn!("Failed to inspect picked file: {err}");
            ctx.notifications
                .push(Notification::warning("notification-file-read-error"));
            Task::none()
        }
    }
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    handle_scene_message(ctx, scene::Message::Resized(size))
}
