// SPDX-License-Identifier: MPL-2.0
//! Splat viewer port definition.
//!
//! This module defines the [`SplatViewer`] trait through which the scene
//! bootstrap hands an asset path to whatever viewer is bound to the scene.
//!
//! # Design Notes
//!
//! - Loading is synchronous; callers run it inside an Iced `Task` on a
//!   blocking worker
//! - The viewer reports failures as [`SceneError`] instead of panicking
//! - Starting and stopping the viewer's own loop is owned by the scene state,
//!   not by the implementation

use crate::domain::scene::SplatScene;
use crate::error::SceneError;
use std::path::Path;

/// Port for loading splat assets into a viewer.
pub trait SplatViewer: Send + Sync {
    /// Loads the asset at `path` and describes what was accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`SceneError`] if:
    /// - The file cannot be read
    /// - The format is not supported
    /// - The header is malformed or the body is truncated
    fn load_scene(&self, path: &Path) -> Result<SplatScene, SceneError>;
}
