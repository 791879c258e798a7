// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Upload**: Simulated progress pacing
//! - **Scene**: Rendering surface and camera

use crate::domain::upload::progress_bounds;

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Default delay between two simulated progress ticks (in milliseconds).
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = progress_bounds::DEFAULT_INTERVAL_MS;

/// Minimum tick interval (in milliseconds).
pub const MIN_PROGRESS_INTERVAL_MS: u64 = progress_bounds::MIN_INTERVAL_MS;

/// Maximum tick interval (in milliseconds).
pub const MAX_PROGRESS_INTERVAL_MS: u64 = progress_bounds::MAX_INTERVAL_MS;

/// Default percentage added per tick.
pub const DEFAULT_PROGRESS_STEP: u8 = progress_bounds::DEFAULT_STEP;

/// Minimum percentage added per tick.
pub const MIN_PROGRESS_STEP: u8 = progress_bounds::MIN_STEP;

/// Maximum percentage added per tick.
pub const MAX_PROGRESS_STEP: u8 = progress_bounds::MAX_STEP;

// ==========================================================================
// Scene Defaults
// ==========================================================================

/// Default identifier of the scene surface.
pub const DEFAULT_SCENE_CONTAINER_ID: &str = crate::scene::DEFAULT_CONTAINER_ID;

/// Default vertical field of view (in degrees).
pub const DEFAULT_FIELD_OF_VIEW_DEG: f32 = crate::scene::camera::DEFAULT_FIELD_OF_VIEW_DEG;

/// Minimum field of view (in degrees).
pub const MIN_FIELD_OF_VIEW_DEG: f32 = crate::scene::camera::MIN_FIELD_OF_VIEW_DEG;

/// Maximum field of view (in degrees).
pub const MAX_FIELD_OF_VIEW_DEG: f32 = crate::scene::camera::MAX_FIELD_OF_VIEW_DEG;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PROGRESS_INTERVAL_MS < DEFAULT_PROGRESS_INTERVAL_MS);
    assert!(DEFAULT_PROGRESS_INTERVAL_MS < MAX_PROGRESS_INTERVAL_MS);
    assert!(MIN_PROGRESS_STEP <= DEFAULT_PROGRESS_STEP);
    assert!(DEFAULT_PROGRESS_STEP <= MAX_PROGRESS_STEP);
    assert!(MIN_FIELD_OF_VIEW_DEG < DEFAULT_FIELD_OF_VIEW_DEG);
    assert!(DEFAULT_FIELD_OF_VIEW_DEG < MAX_FIELD_OF_VIEW_DEG);
};
