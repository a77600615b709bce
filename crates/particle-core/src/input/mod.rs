//! Input aggregation: pointer drag and hand gestures.

pub mod detection;
pub mod hand;
pub mod pointer;

pub use detection::{DetectionMailbox, DetectionSender};
pub use hand::{desired_scale, HandAggregator, HandLandmarks, HAND_LANDMARK_COUNT};
pub use pointer::PointerAggregator;
