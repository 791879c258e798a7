// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`splat`]: Header-only splat asset probe (implements [`SplatViewer`])
//!
//! [`SplatViewer`]: crate::application::port::SplatViewer

pub mod splat;

pub use splat::HeaderProbe;
