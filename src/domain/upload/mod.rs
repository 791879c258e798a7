// SPDX-License-Identifier: MPL-2.0
//! Upload domain types.

pub mod newtypes;
mod video;

pub use newtypes::{
    progress_bounds, ProgressInterval, ProgressStep, ReconstructionMethod, UploadProgress,
};
pub use video::{SelectedVideo, VIDEO_MEDIA_TYPE_PREFIX};
