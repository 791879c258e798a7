// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`scene`]: Splat asset description ([`SplatScene`](scene::SplatScene))
//! - [`upload`]: Upload form values ([`UploadProgress`](upload::UploadProgress),
//!   [`ReconstructionMethod`](upload::ReconstructionMethod),
//!   [`SelectedVideo`](upload::SelectedVideo))

pub mod scene;
pub mod upload;
