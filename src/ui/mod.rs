// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`uploader`] - Capture upload form with simulated progress
//! - The scene screen lives in [`crate::scene`]
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Screen tabs and language selector
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (cube shader)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod uploader;
pub mod widgets;
