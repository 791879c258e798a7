// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the upload form and the
//! scene.
//!
//! The `App` struct wires together the components (uploader, scene,
//! localization, notifications) and translates their events into side
//! effects like file dialogs, submissions or config persistence.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::SplatViewer;
use crate::i18n::fluent::I18n;
use crate::infrastructure::HeaderProbe;
use crate::scene;
use crate::ui::notifications::{self, Notification};
use crate::ui::uploader;
use crate::upload::{LogSubmissionSink, SubmissionSink};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    uploader: uploader::State,
    scene: scene::State,
    sink: Arc<dyn SubmissionSink>,
    notifications: notifications::Manager,
    config: config::Config,
    /// Resolved once at startup; `System` queries the OS.
    theme: Theme,
    /// Asset passed with `--scene`, preferred over the configured one.
    scene_asset: Option<PathBuf>,
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("uploading", &self.uploader.is_uploading())
            .field("scene_running", &self.scene.is_running())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (mut app, task) = Self::with_config(
            flags,
            config,
            Arc::new(HeaderProbe),
            Arc::new(LogSubmissionSink),
        );

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        (app, task)
    }

    /// Builds the application from an already loaded configuration with the
    /// given viewer and submission sink.
    ///
    /// Starts on the Scene screen when `flags.scene_path` is set.
    pub fn with_config(
        flags: Flags,
        config: config::Config,
        viewer: Arc<dyn SplatViewer>,
        sink: Arc<dyn SubmissionSink>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);
        let uploader = uploader::State::new(
            config.upload.progress_interval(),
            config.upload.progress_step(),
        );

        let mut app = App {
            i18n,
            screen: Screen::Upload,
            uploader,
            scene: scene::State::new(viewer),
            sink,
            notifications: notifications::Manager::new(),
            theme: config.general.theme_mode.theme(),
            config,
            scene_asset: flags.scene_path,
            window_size: default_window_size(),
        };

        let task = if app.scene_asset.is_some() {
            app.update(Message::SwitchScreen(Screen::Scene))
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let asset_name = (self.screen == Screen::Scene)
            .then(|| self.scene.context())
            .flatten()
            .and_then(|context| match context.viewer_status() {
                scene::ViewerStatus::Running(loaded) => loaded.path.file_name(),
                _ => None,
            })
            .map(|name| name.to_string_lossy().into_owned());

        match asset_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_upload_subscription(
                self.uploader.is_uploading(),
                self.uploader.progress_interval(),
            ),
            subscription::create_frame_subscription(self.scene.is_running()),
            subscription::create_notification_subscription(
                self.notifications.has_notifications(),
            ),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            uploader: &mut self.uploader,
            scene: &mut self.scene,
            sink: &self.sink,
            notifications: &mut self.notifications,
            config: &mut self.config,
            scene_asset: &self.scene_asset,
            window_size: &mut self.window_size,
        };

        match message {
            Message::Uploader(uploader_message) => {
                update::handle_uploader_message(&mut ctx, uploader_message)
            }
            Message::Scene(scene_message) => update::handle_scene_message(&mut ctx, scene_message),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::FileDialogResult(path) => update::handle_file_picked(path),
            Message::FileDropped(path) => update::handle_file_picked(Some(path)),
            Message::FileInspected(result) => update::handle_file_inspected(&mut ctx, result),
            Message::PreviewOpened(result) => update::handle_preview_opened(&mut ctx, result),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            uploader: &self.uploader,
            scene: &self.scene,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn uploader(&self) -> &uploader::State {
        &self.uploader
    }

    #[must_use]
    pub fn scene(&self) -> &scene::State {
        &self.scene
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scene::SplatScene;
    use crate::domain::upload::{ReconstructionMethod, SelectedVideo};
    use crate::error::SceneError;
    use crate::test_utils::{gaussian_scene, FixedViewer, RecordingSink};

    fn garden_scene() -> SplatScene {
        gaussian_scene("garden.ply", 42)
    }

    fn app_with(
        flags: Flags,
        viewer: Result<SplatScene, SceneError>,
    ) -> (App, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let flags = Flags {
            lang: Some("en-US".to_string()),
            ..flags
        };
        let (app, _task) = App::with_config(
            flags,
            config::Config::default(),
            Arc::new(FixedViewer(viewer)),
            Arc::clone(&sink) as Arc<dyn SubmissionSink>,
        );
        (app, sink)
    }

    fn complete_form(app: &mut App) {
        let _ = app.update(Message::Uploader(uploader::Message::EmailChanged(
            "jane@example.com".to_string(),
        )));
        let _ = app.update(Message::Uploader(uploader::Message::MethodSelected(
            ReconstructionMethod::GaussianSplatting,
        )));
        let _ = app.update(Message::FileInspected(Ok(SelectedVideo::new(
            PathBuf::from("capture.mp4"),
            "video/mp4",
            2048,
        ))));
        for _ in 0..10 {
            let _ = app.update(Message::Uploader(uploader::Message::ProgressTick));
        }
    }

    #[test]
    fn starts_on_upload_screen_without_scene() {
        let (app, _) = app_with(Flags::default(), Ok(garden_scene()));
        assert_eq!(app.screen(), Screen::Upload);
        assert!(!app.scene().is_running());
        assert_eq!(app.title(), "Splat Studio");
    }

    #[test]
    fn scene_flag_opens_scene_screen() {
        let flags = Flags {
            scene_path: Some(PathBuf::from("garden.ply")),
            ..Flags::default()
        };
        let (app, _) = app_with(flags, Ok(garden_scene()));
        assert_eq!(app.screen(), Screen::Scene);
        assert!(app.scene().is_running());
    }

    #[test]
    fn submission_reaches_sink_and_resets_form() {
        let (mut app, sink) = app_with(Flags::default(), Ok(garden_scene()));
        complete_form(&mut app);
        assert!(app.uploader().is_submit_enabled());

        let _ = app.update(Message::Uploader(uploader::Message::Submit));

        let received = sink.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].email, "jane@example.com");
        assert!(!app.uploader().is_submit_enabled());
        assert!(app.uploader().video().is_none());
        assert!(app
            .notifications()
            .visible()
            .any(|n| n.message_key() == "notification-submitted"));
    }

    #[test]
    fn rejected_file_is_not_surfaced() {
        let (mut app, _) = app_with(Flags::default(), Ok(garden_scene()));
        let _ = app.update(Message::FileInspected(Ok(SelectedVideo::new(
            PathBuf::from("photo.png"),
            "image/png",
            10,
        ))));
        assert!(app.uploader().video().is_none());
        assert!(!app.uploader().is_uploading());
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn unreadable_file_raises_warning() {
        let (mut app, _) = app_with(Flags::default(), Ok(garden_scene()));
        let _ = app.update(Message::FileInspected(Err(crate::error::Error::Io(
            "denied".to_string(),
        ))));
        assert!(app
            .notifications()
            .visible()
            .any(|n| n.message_key() == "notification-file-read-error"));
    }

    #[test]
    fn failed_preview_launch_raises_warning() {
        let (mut app, _) = app_with(Flags::default(), Ok(garden_scene()));
        let _ = app.update(Message::PreviewOpened(Err(crate::error::Error::Io(
            "no player".to_string(),
        ))));
        assert!(app
            .notifications()
            .visible()
            .any(|n| n.message_key() == "notification-preview-open-error"));

        let (mut app, _) = app_with(Flags::default(), Ok(garden_scene()));
        let _ = app.update(Message::PreviewOpened(Ok(())));
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn switching_screens_starts_and_stops_scene() {
        let (mut app, _) = app_with(Flags::default(), Ok(garden_scene()));

        let _ = app.update(Message::SwitchScreen(Screen::Scene));
        assert!(app.scene().is_running());

        let _ = app.update(Message::SwitchScreen(Screen::Upload));
        assert!(!app.scene().is_running());
    }

    #[test]
    fn failed_scene_load_raises_error_until_scene_stops() {
        let flags = Flags {
            scene_path: Some(PathBuf::from("empty.ply")),
            ..Flags::default()
        };
        let (mut app, _) = app_with(flags, Err(SceneError::Empty));
        let generation = app.scene().generation();

        let _ = app.update(Message::Scene(scene::Message::Loaded {
            generation,
            result: Err(SceneError::Empty),
        }));
        assert!(app
            .notifications()
            .visible()
            .any(|n| n.message_key() == "error-scene-empty"));

        let _ = app.update(Message::SwitchScreen(Screen::Upload));
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn running_scene_names_the_window() {
        let flags = Flags {
            scene_path: Some(PathBuf::from("garden.ply")),
            ..Flags::default()
        };
        let (mut app, _) = app_with(flags, Ok(garden_scene()));
        let generation = app.scene().generation();

        let _ = app.update(Message::Scene(scene::Message::Loaded {
            generation,
            result: Ok(garden_scene()),
        }));
        assert_eq!(app.title(), "garden.ply - Splat Studio");
    }

    #[test]
    fn resize_updates_scene_camera() {
        let (mut app, _) = app_with(Flags::default(), Ok(garden_scene()));
        let _ = app.update(Message::SwitchScreen(Screen::Scene));
        let _ = app.update(Message::WindowResized(Size::new(1000.0, 500.0)));

        let aspect = app
            .scene()
            .context()
            .map(|context| context.camera().aspect());
        assert_eq!(aspect, Some(2.0));
    }
}
