// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Scene Error: {0}")]
    Scene(#[from] SceneError),
}

/// Reasons a splat asset could not be handed to the viewer.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The asset path does not exist.
    #[error("Asset not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Extension or header names a format the viewer cannot show.
    #[error("Unsupported scene format: {0}")]
    UnsupportedFormat(String),

    /// The header could not be parsed.
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// The body is shorter than the header announces.
    #[error("Truncated asset: expected {expected} bytes, found {actual}")]
    Truncated { expected: u64, actual: u64 },

    /// The asset declares no splats.
    #[error("Scene contains no splats")]
    Empty,

    /// I/O error while reading the asset.
    #[error("I/O error: {0}")]
    Io(String),
}

impl SceneError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SceneError::NotFound(_) => "error-scene-not-found",
            SceneError::UnsupportedFormat(_) => "error-scene-unsupported-format",
            SceneError::MalformedHeader(_) => "error-scene-malformed",
            SceneError::Truncated { .. } => "error-scene-truncated",
            SceneError::Empty => "error-scene-empty",
            SceneError::Io(_) => "error-scene-io",
        }
    }

    /// Maps an I/O failure on `path` to the closest scene error.
    pub fn from_io(path: &std::path::Path, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            SceneError::NotFound(path.to_path_buf())
        } else {
            SceneError::Io(err.to_string())
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn scene_error_converts_into_error() {
        let err: Error = SceneError::Empty.into();
        assert!(matches!(err, Error::Scene(SceneError::Empty)));
        assert_eq!(err.to_string(), "Scene Error: Scene contains no splats");
    }

    #[test]
    fn scene_error_from_io_not_found() {
        let io_error = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = SceneError::from_io(Path::new("missing.ply"), &io_error);
        assert_eq!(err, SceneError::NotFound(PathBuf::from("missing.ply")));
    }

    #[test]
    fn scene_error_from_io_other() {
        let io_error = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = SceneError::from_io(Path::new("locked.ply"), &io_error);
        assert!(matches!(err, SceneError::Io(_)));
    }

    #[test]
    fn scene_error_i18n_keys() {
        assert_eq!(
            SceneError::UnsupportedFormat("ksplat".into()).i18n_key(),
            "error-scene-unsupported-format"
        );
        assert_eq!(
            SceneError::Truncated {
                expected: 10,
                actual: 2
            }
            .i18n_key(),
            "error-scene-truncated"
        );
        assert_eq!(SceneError::Empty.i18n_key(), "error-scene-empty");
    }

    #[test]
    fn truncated_display_mentions_sizes() {
        let err = SceneError::Truncated {
            expected: 320,
            actual: 64,
        };
        let message = err.to_string();
        assert!(message.contains("320"));
        assert!(message.contains("64"));
    }
}
