// SPDX-License-Identifier: MPL-2.0
//! Upload form services.
//!
//! Everything the upload form needs that is not presentation:
//!
//! - [`validation`]: email syntax check
//! - [`progress`]: simulated upload progress driver
//! - [`preview`]: transient preview references for picked files
//! - [`media_type`]: declared media types for picked paths
//! - [`submission`]: submission payload and sinks

pub mod media_type;
pub mod preview;
pub mod progress;
pub mod submission;
pub mod validation;

pub use preview::{PreviewRegistry, PreviewUrl};
pub use progress::{ProgressDriver, ProgressPhase};
pub use submission::{LogSubmissionSink, Submission, SubmissionSink};
pub use validation::{email_error, is_valid_email};
