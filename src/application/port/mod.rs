// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`viewer`]: Splat asset loading for the scene viewer
//!
//! # Example
//!
//! ```ignore
//! use splat_studio::application::port::SplatViewer;
//! use std::path::Path;
//!
//! fn count_splats(viewer: &impl SplatViewer, path: &Path) -> Option<u64> {
//!     viewer.load_scene(path).ok().map(|scene| scene.splat_count)
//! }
//! ```

pub mod viewer;

pub use viewer::SplatViewer;
