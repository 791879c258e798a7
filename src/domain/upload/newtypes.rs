// SPDX-License-Identifier: MPL-2.0
//! Upload newtypes.
//!
//! Type-safe wrappers for the values the upload form and the simulated
//! progress driver work with, ensuring they always stay within valid ranges.

use std::fmt;
use std::time::Duration;

// =============================================================================
// Progress Bounds
// =============================================================================

/// Upload progress bounds.
pub mod progress_bounds {
    /// Progress of an idle upload.
    pub const MIN_PERCENT: u8 = 0;
    /// Progress of a complete upload.
    pub const MAX_PERCENT: u8 = 100;
    /// Minimum increment per tick.
    pub const MIN_STEP: u8 = 1;
    /// Maximum increment per tick.
    pub const MAX_STEP: u8 = 100;
    /// Default increment per tick.
    pub const DEFAULT_STEP: u8 = 10;
    /// Minimum delay between ticks in milliseconds.
    pub const MIN_INTERVAL_MS: u64 = 50;
    /// Maximum delay between ticks in milliseconds.
    pub const MAX_INTERVAL_MS: u64 = 5_000;
    /// Default delay between ticks in milliseconds.
    pub const DEFAULT_INTERVAL_MS: u64 = 500;
}

// =============================================================================
// UploadProgress
// =============================================================================

/// Upload progress percentage, guaranteed to be within 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UploadProgress(u8);

impl UploadProgress {
    /// No progress.
    pub const ZERO: Self = Self(progress_bounds::MIN_PERCENT);
    /// Upload finished.
    pub const COMPLETE: Self = Self(progress_bounds::MAX_PERCENT);

    /// Creates a new progress value, clamping to 100.
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.min(progress_bounds::MAX_PERCENT))
    }

    /// Returns the raw percentage.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the progress as a fraction in `0.0..=1.0`.
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        f32::from(self.0) / f32::from(progress_bounds::MAX_PERCENT)
    }

    /// Advances by `step`, saturating at 100.
    #[must_use]
    pub fn advance(self, step: ProgressStep) -> Self {
        Self::new(self.0.saturating_add(step.value()))
    }

    /// Returns true once the upload reached 100%.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= progress_bounds::MAX_PERCENT
    }

    /// Returns true while some, but not all, of the upload is done.
    #[must_use]
    pub fn is_partial(self) -> bool {
        self.0 > progress_bounds::MIN_PERCENT && !self.is_complete()
    }
}

impl fmt::Display for UploadProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// ProgressStep
// =============================================================================

/// Amount of progress added per tick (1–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep(u8);

impl ProgressStep {
    /// Creates a new step, clamping to the valid range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(progress_bounds::MIN_STEP, progress_bounds::MAX_STEP))
    }

    /// Returns the step as u8.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for ProgressStep {
    fn default() -> Self {
        Self(progress_bounds::DEFAULT_STEP)
    }
}

// =============================================================================
// ProgressInterval
// =============================================================================

/// Delay between two progress ticks (50 ms – 5 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressInterval(u64);

impl ProgressInterval {
    /// Creates a new interval from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(
            progress_bounds::MIN_INTERVAL_MS,
            progress_bounds::MAX_INTERVAL_MS,
        ))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ProgressInterval {
    fn default() -> Self {
        Self(progress_bounds::DEFAULT_INTERVAL_MS)
    }
}

// =============================================================================
// ReconstructionMethod
// =============================================================================

/// Reconstruction technique the uploaded capture should be processed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReconstructionMethod {
    Nerf,
    GaussianSplatting,
    Nerolangelo,
}

impl ReconstructionMethod {
    /// Every method, in the order the selection control lists them.
    pub const ALL: [ReconstructionMethod; 3] = [
        ReconstructionMethod::Nerf,
        ReconstructionMethod::GaussianSplatting,
        ReconstructionMethod::Nerolangelo,
    ];

    /// Value sent with the submission payload.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReconstructionMethod::Nerf => "nerf",
            ReconstructionMethod::GaussianSplatting => "gaussian-splatting",
            ReconstructionMethod::Nerolangelo => "nerolangelo",
        }
    }

    /// Parses a payload value back into a method.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == value)
    }

    /// Human readable label shown in the selection control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ReconstructionMethod::Nerf => "NERF",
            ReconstructionMethod::GaussianSplatting => "Gaussian Splatting",
            ReconstructionMethod::Nerolangelo => "Nerolangelo",
        }
    }
}

impl fmt::Display for ReconstructionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
