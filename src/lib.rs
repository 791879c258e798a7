// SPDX-License-Identifier: MPL-2.0
//! `splat_studio` is a small desktop tool built with the Iced GUI framework.
//!
//! It offers an upload form for capture videos (email, reconstruction method,
//! simulated upload) and a scene screen that boots a rotating placeholder cube
//! next to a splat asset viewer.

#![doc(html_root_url = "https://docs.rs/splat_studio/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod scene;
pub mod ui;
pub mod upload;

#[cfg(test)]
mod test_utils;

pub use app::config;
