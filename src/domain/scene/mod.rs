// SPDX-License-Identifier: MPL-2.0
//! Scene domain types.
//!
//! Describes a splat asset once a viewer has accepted it. Nothing here knows
//! how the asset is read or drawn.

use std::fmt;
use std::path::{Path, PathBuf};

/// Container format of a splat asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplatFormat {
    /// Stanford PLY (ascii or binary).
    Ply,
    /// Packed 32-byte-per-splat `.splat` file.
    Splat,
}

impl SplatFormat {
    /// Guesses the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "ply" => Some(SplatFormat::Ply),
            "splat" => Some(SplatFormat::Splat),
            _ => None,
        }
    }
}

/// What the vertices of an asset describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplatKind {
    /// Anisotropic gaussians (opacity, scale, rotation, SH color).
    Gaussians,
    /// Plain positions, optionally colored.
    PointCloud,
}

impl fmt::Display for SplatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplatKind::Gaussians => f.write_str("gaussians"),
            SplatKind::PointCloud => f.write_str("point cloud"),
        }
    }
}

/// A splat asset a viewer accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplatScene {
    pub path: PathBuf,
    pub format: SplatFormat,
    pub kind: SplatKind,
    pub splat_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path_is_case_insensitive() {
        assert_eq!(
            SplatFormat::from_path(Path::new("models/scene.PLY")),
            Some(SplatFormat::Ply)
        );
        assert_eq!(
            SplatFormat::from_path(Path::new("garden.splat")),
            Some(SplatFormat::Splat)
        );
        assert_eq!(SplatFormat::from_path(Path::new("scene.ksplat")), None);
        assert_eq!(SplatFormat::from_path(Path::new("scene")), None);
    }
}
