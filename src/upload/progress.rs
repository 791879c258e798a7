// SPDX-License-Identifier: MPL-2.0
//! Simulated upload progress.
//!
//! Stands in for a real transfer feed: once started, every tick adds a fixed
//! step until the counter reaches 100. The driver holds no timer itself; the
//! application subscribes to a periodic tick only while
//! [`ProgressDriver::is_running`] is true, so cancelling the driver also
//! drops the timer.
//!
//! # Example
//!
//! ```
//! use splat_studio::upload::progress::{ProgressDriver, ProgressPhase};
//!
//! let mut driver = ProgressDriver::default();
//! assert!(driver.start());
//! assert!(!driver.start()); // already running
//!
//! for _ in 0..10 {
//!     driver.tick();
//! }
//! assert_eq!(driver.progress().value(), 100);
//! assert_eq!(driver.phase(), ProgressPhase::Complete);
//! ```

use crate::domain::upload::{ProgressInterval, ProgressStep, UploadProgress};

/// Lifecycle of a simulated upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    /// Nothing uploading, progress is 0.
    Idle,
    /// Ticks are advancing the counter.
    Running,
    /// Counter reached 100; no further ticks are consumed.
    Complete,
}

/// Timer-driven stand-in for upload progress.
#[derive(Debug, Clone)]
pub struct ProgressDriver {
    progress: UploadProgress,
    step: ProgressStep,
    interval: ProgressInterval,
    phase: ProgressPhase,
}

impl Default for ProgressDriver {
    fn default() -> Self {
        Self::new(ProgressInterval::default(), ProgressStep::default())
    }
}

impl ProgressDriver {
    #[must_use]
    pub fn new(interval: ProgressInterval, step: ProgressStep) -> Self {
        Self {
            progress: UploadProgress::ZERO,
            step,
            interval,
            phase: ProgressPhase::Idle,
        }
    }

    /// Starts a fresh upload from 0.
    ///
    /// Returns false and changes nothing if an upload is already running.
    pub fn start(&mut self) -> bool {
        if self.phase == ProgressPhase::Running {
            return false;
        }
        self.progress = UploadProgress::ZERO;
        self.phase = ProgressPhase::Running;
        true
    }

    /// Cancels whatever is in flight and starts again from 0.
    pub fn restart(&mut self) {
        self.cancel();
        self.start();
    }

    /// Advances by one step. Ticks outside the running phase are ignored.
    pub fn tick(&mut self) -> UploadProgress {
        if self.phase != ProgressPhase::Running {
            return self.progress;
        }
        self.progress = self.progress.advance(self.step);
        if self.progress.is_complete() {
            self.phase = ProgressPhase::Complete;
        }
        self.progress
    }

    /// Stops the upload and resets progress to 0.
    pub fn cancel(&mut self) {
        self.progress = UploadProgress::ZERO;
        self.phase = ProgressPhase::Idle;
    }

    #[must_use]
    pub fn progress(&self) -> UploadProgress {
        self.progress
    }

    #[must_use]
    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == ProgressPhase::Running
    }

    /// Delay the tick subscription should use.
    #[must_use]
    pub fn interval(&self) -> ProgressInterval {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_driver_is_idle_at_zero() {
        let driver = ProgressDriver::default();
        assert_eq!(driver.phase(), ProgressPhase::Idle);
        assert_eq!(driver.progress(), UploadProgress::ZERO);
        assert!(!driver.is_running());
    }

    #[test]
    fn reaches_exactly_hundred_after_ten_ticks() {
        let mut driver = ProgressDriver::default();
        driver.start();

        let mut seen = Vec::new();
        for _ in 0..10 {
            seen.push(driver.tick().value());
        }

        assert_eq!(seen, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(driver.phase(), ProgressPhase::Complete);
    }

    #[test]
    fn stops_advancing_once_complete() {
        let mut driver = ProgressDriver::default();
        driver.start();
        for _ in 0..25 {
            driver.tick();
        }
        assert_eq!(driver.progress().value(), 100);
        assert!(!driver.is_running());
    }

    #[test]
    fn uneven_step_never_exceeds_hundred() {
        let mut driver = ProgressDriver::new(ProgressInterval::default(), ProgressStep::new(30));
        driver.start();
        let values: Vec<u8> = (0..4).map(|_| driver.tick().value()).collect();
        assert_eq!(values, vec![30, 60, 90, 100]);
    }

    #[test]
    fn start_is_guarded_while_running() {
        let mut driver = ProgressDriver::default();
        assert!(driver.start());
        driver.tick();
        driver.tick();

        assert!(!driver.start());
        assert_eq!(driver.progress().value(), 20);
    }

    #[test]
    fn start_after_completion_begins_again() {
        let mut driver = ProgressDriver::new(ProgressInterval::default(), ProgressStep::new(100));
        driver.start();
        driver.tick();
        assert_eq!(driver.phase(), ProgressPhase::Complete);

        assert!(driver.start());
        assert_eq!(driver.progress(), UploadProgress::ZERO);
        assert!(driver.is_running());
    }

    #[test]
    fn ticks_before_start_are_ignored() {
        let mut driver = ProgressDriver::default();
        assert_eq!(driver.tick(), UploadProgress::ZERO);
        assert_eq!(driver.phase(), ProgressPhase::Idle);
    }

    #[test]
    fn cancel_resets_and_ignores_late_ticks() {
        let mut driver = ProgressDriver::default();
        driver.start();
        driver.tick();
        driver.cancel();

        assert_eq!(driver.progress(), UploadProgress::ZERO);
        assert_eq!(driver.tick(), UploadProgress::ZERO);
        assert_eq!(driver.phase(), ProgressPhase::Idle);
    }

    #[test]
    fn restart_discards_running_progress() {
        let mut driver = ProgressDriver::default();
        driver.start();
        driver.tick();
        driver.tick();
        driver.restart();

        assert!(driver.is_running());
        assert_eq!(driver.progress(), UploadProgress::ZERO);
    }
}
