// SPDX-License-Identifier: MPL-2.0
//! Scene bootstrap: a rotating placeholder cube and a splat viewer sharing one
//! rendering surface.
//!
//! The scene is lifecycle-scoped. [`State::bootstrap`] builds a fresh
//! [`SceneContext`] and returns the task that hands the asset to the viewer;
//! [`State::stop`] tears the context down. Each bootstrap bumps a generation
//! counter so that a load finishing after `stop()` (or after a newer
//! bootstrap) is discarded.

pub mod camera;
mod view;

pub use camera::{Camera, PlaceholderCube};
pub use view::{view, ViewContext};

use crate::application::port::SplatViewer;
use crate::domain::scene::SplatScene;
use crate::error::SceneError;
use iced::{Size, Task};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Default identifier of the surface the scene renders into.
pub const DEFAULT_CONTAINER_ID: &str = "scene";

/// What the viewer bound to the scene is doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerStatus {
    /// No asset path was provided; only the placeholder is drawn.
    Unbound,
    /// The asset is being handed to the viewer.
    Loading(PathBuf),
    /// The viewer accepted the asset and is running.
    Running(SplatScene),
    /// The viewer rejected the asset.
    Failed(SceneError),
}

/// Everything one bootstrapped scene owns.
#[derive(Debug, Clone)]
pub struct SceneContext {
    container_id: String,
    camera: Camera,
    cube: PlaceholderCube,
    viewer: ViewerStatus,
    frames: u64,
}

impl SceneContext {
    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn cube(&self) -> &PlaceholderCube {
        &self.cube
    }

    #[must_use]
    pub fn viewer_status(&self) -> &ViewerStatus {
        &self.viewer
    }

    /// Number of frames rendered since bootstrap.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The viewer finished loading an asset for the given bootstrap.
    Loaded {
        generation: u64,
        result: Result<SplatScene, SceneError>,
    },
    /// A window frame was presented.
    Frame,
    /// The rendering surface changed size.
    Resized(Size),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ViewerStarted(SplatScene),
    LoadFailed(SceneError),
}

/// Scene lifecycle state.
pub struct State {
    viewer: Arc<dyn SplatViewer>,
    context: Option<SceneContext>,
    generation: u64,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("context", &self.context)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Creates a stopped scene bound to `viewer`.
    pub fn new(viewer: Arc<dyn SplatViewer>) -> Self {
        Self {
            viewer,
            context: None,
            generation: 0,
        }
    }

    /// Builds a new scene context and starts loading `asset_path` into the
    /// viewer.
    ///
    /// Any previous context is replaced. Without an asset path the scene runs
    /// with the placeholder cube only and no task is issued.
    pub fn bootstrap(
        &mut self,
        container_id: impl Into<String>,
        asset_path: Option<PathBuf>,
        viewport: Size,
        field_of_view_deg: f32,
    ) -> Task<Message> {
        self.generation += 1;
        let generation = self.generation;
        let container_id = container_id.into();

        log::info!(
            "Bootstrapping scene '{}' ({}x{})",
            container_id,
            viewport.width,
            viewport.height
        );

        let viewer_status = match &asset_path {
            Some(path) => ViewerStatus::Loading(path.clone()),
            None => ViewerStatus::Unbound,
        };

        self.context = Some(SceneContext {
            container_id,
            camera: Camera::new(field_of_view_deg, viewport),
            cube: PlaceholderCube::default(),
            viewer: viewer_status,
            frames: 0,
        });

        let Some(path) = asset_path else {
            return Task::none();
        };

        let viewer = Arc::clone(&self.viewer);
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || viewer.load_scene(&path))
                    .await
                    .map_err(|e| SceneError::Io(e.to_string()))?
            },
            move |result| Message::Loaded { generation, result },
        )
    }

    /// Tears the scene down. Loads still in flight are ignored when they
    /// complete.
    pub fn stop(&mut self) {
        if self.context.take().is_some() {
            self.generation += 1;
            log::info!("Scene stopped");
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Loaded { generation, result } => self.handle_loaded(generation, result),
            Message::Frame => {
                if let Some(context) = self.context.as_mut() {
                    context.cube.advance();
                    context.frames += 1;
                }
                Event::None
            }
            Message::Resized(size) => {
                if let Some(context) = self.context.as_mut() {
                    context.camera.set_viewport(size);
                }
                Event::None
            }
        }
    }

    fn handle_loaded(&mut self, generation: u64, result: Result<SplatScene, SceneError>) -> Event {
        if generation != self.generation {
            log::debug!("Discarding scene load from stale bootstrap {generation}");
            return Event::None;
        }
        let Some(context) = self.context.as_mut() else {
            return Event::None;
        };

        match result {
            Ok(scene) => {
                log::info!(
                    "Viewer started with {} ({} {})",
                    scene.path.display(),
                    scene.splat_count,
                    scene.kind
                );
                context.viewer = ViewerStatus::Running(scene.clone());
                Event::ViewerStarted(scene)
            }
            Err(error) => {
                log::error!("Failed to load scene asset: {error}");
                context.viewer = ViewerStatus::Failed(error.clone());
                Event::LoadFailed(error)
            }
        }
    }

    /// Returns true while a scene context exists and frames should be
    /// delivered.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.context.is_some()
    }

    #[must_use]
    pub fn context(&self) -> Option<&SceneContext> {
        self.context.as_ref()
    }

    /// Generation of the most recent bootstrap or stop.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scene::{SplatFormat, SplatKind};
    use std::path::Path;

    struct StubViewer;

    impl SplatViewer for StubViewer {
        fn load_scene(&self, path: &Path) -> Result<SplatScene, SceneError> {
            Ok(sample_scene(path))
        }
    }

    fn sample_scene(path: &Path) -> SplatScene {
        SplatScene {
            path: path.to_path_buf(),
            format: SplatFormat::Ply,
            kind: SplatKind::Gaussians,
            splat_count: 42,
        }
    }

    fn state() -> State {
        State::new(Arc::new(StubViewer))
    }

    fn viewport() -> Size {
        Size::new(800.0, 600.0)
    }

    #[test]
    fn new_scene_is_stopped() {
        let state = state();
        assert!(!state.is_running());
        assert!(state.context().is_none());
    }

    #[test]
    fn bootstrap_builds_context() {
        let mut state = state();
        let _ = state.bootstrap("scene", Some(PathBuf::from("a.ply")), viewport(), 75.0);

        let context = state.context().expect("context after bootstrap");
        assert_eq!(context.container_id(), "scene");
        assert!((context.camera().aspect() - 800.0 / 600.0).abs() < f32::EPSILON);
        assert_eq!(context.camera().field_of_view_deg(), 75.0);
        assert_eq!(
            context.viewer_status(),
            &ViewerStatus::Loading(PathBuf::from("a.ply"))
        );
        assert!(state.is_running());
    }

    #[test]
    fn bootstrap_without_asset_is_unbound() {
        let mut state = state();
        let _ = state.bootstrap("scene", None, viewport(), 75.0);
        let context = state.context().expect("context after bootstrap");
        assert_eq!(context.viewer_status(), &ViewerStatus::Unbound);
    }

    #[test]
    fn successful_load_starts_viewer() {
        let mut state = state();
        let _ = state.bootstrap("scene", Some(PathBuf::from("a.ply")), viewport(), 75.0);
        let scene = sample_scene(Path::new("a.ply"));

        let event = state.update(Message::Loaded {
            generation: state.generation(),
            result: Ok(scene.clone()),
        });

        assert_eq!(event, Event::ViewerStarted(scene.clone()));
        assert_eq!(
            state.context().map(SceneContext::viewer_status),
            Some(&ViewerStatus::Running(scene))
        );
    }

    #[test]
    fn failed_load_is_kept_and_reported() {
        let mut state = state();
        let _ = state.bootstrap("scene", Some(PathBuf::from("a.ply")), viewport(), 75.0);

        let event = state.update(Message::Loaded {
            generation: state.generation(),
            result: Err(SceneError::Empty),
        });

        assert_eq!(event, Event::LoadFailed(SceneError::Empty));
        assert_eq!(
            state.context().map(SceneContext::viewer_status),
            Some(&ViewerStatus::Failed(SceneError::Empty))
        );
    }

    #[test]
    fn load_after_stop_is_discarded() {
        let mut state = state();
        let _ = state.bootstrap("scene", Some(PathBuf::from("a.ply")), viewport(), 75.0);
        let stale = state.generation();
        state.stop();

        let event = state.update(Message::Loaded {
            generation: stale,
            result: Ok(sample_scene(Path::new("a.ply"))),
        });

        assert_eq!(event, Event::None);
        assert!(!state.is_running());
    }

    #[test]
    fn load_from_previous_bootstrap_is_discarded() {
        let mut state = state();
        let _ = state.bootstrap("scene", Some(PathBuf::from("old.ply")), viewport(), 75.0);
        let stale = state.generation();
        let _ = state.bootstrap("scene", Some(PathBuf::from("new.ply")), viewport(), 75.0);

        let event = state.update(Message::Loaded {
            generation: stale,
            result: Ok(sample_scene(Path::new("old.ply"))),
        });

        assert_eq!(event, Event::None);
        assert_eq!(
            state.context().map(SceneContext::viewer_status),
            Some(&ViewerStatus::Loading(PathBuf::from("new.ply")))
        );
    }

    #[test]
    fn frames_rotate_cube_only_while_running() {
        let mut state = state();
        state.update(Message::Frame);
        assert!(state.context().is_none());

        let _ = state.bootstrap("scene", None, viewport(), 75.0);
        state.update(Message::Frame);
        state.update(Message::Frame);

        let context = state.context().expect("context after bootstrap");
        assert_eq!(context.frames(), 2);
        let (x, y) = context.cube().rotation();
        assert!((x - 0.02).abs() < 1e-6);
        assert!((y - 0.02).abs() < 1e-6);
    }

    #[test]
    fn resize_updates_camera_aspect() {
        let mut state = state();
        let _ = state.bootstrap("scene", None, viewport(), 75.0);
        state.update(Message::Resized(Size::new(1000.0, 500.0)));

        let aspect = state.context().map(|c| c.camera().aspect());
        assert_eq!(aspect, Some(2.0));
    }

    #[test]
    fn stop_is_idempotent() {
        let mut state = state();
        state.stop();
        assert_eq!(state.generation(), 0);

        let _ = state.bootstrap("scene", None, viewport(), 75.0);
        state.stop();
        state.stop();
        assert_eq!(state.generation(), 2);
        assert!(!state.is_running());
    }
}
