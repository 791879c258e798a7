// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::upload::SelectedVideo;
use crate::error::Error;
use crate::scene;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::uploader;
use iced::Size;
use std::path::PathBuf;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Uploader(uploader::Message),
    Scene(scene::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    SwitchScreen(Screen),
    /// Result from the video file dialog.
    FileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A picked or dropped file was inspected.
    FileInspected(Result<SelectedVideo, Error>),
    /// The system player was asked to open the preview.
    PreviewOpened(Result<(), Error>),
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SPLAT_STUDIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Splat asset to open on the Scene screen at startup.
    pub scene_path: Option<PathBuf>,
}
