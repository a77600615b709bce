//! Error type shared by the core crate.
//!
//! Nothing in the per-frame path returns these; they surface at the edges
//! where external input is parsed (shape names from the UI, landmark payloads
//! from the detector) or where the capture device reports a failure.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("unknown shape name: {0:?}")]
    UnknownShape(String),

    #[error("expected {expected} landmark values, got {got}")]
    LandmarkCount { expected: usize, got: usize },

    #[error("landmark {index} has a non-finite coordinate")]
    NonFiniteLandmark { index: usize },

    #[error("gesture tracking unavailable: {0}")]
    TrackingUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
