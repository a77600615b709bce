pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod morph;
pub mod point_set;
pub mod registry;
pub mod render;
pub mod session;
pub mod shapes;
pub mod sprite;

pub use camera::Camera;
pub use clock::FrameClock;
pub use config::{FlickerParams, HandParams, PointerParams, SessionConfig};
pub use error::{Error, Result};
pub use input::{
    DetectionMailbox, DetectionSender, HandAggregator, HandLandmarks, PointerAggregator,
};
pub use morph::MorphBuffer;
pub use point_set::PointSet;
pub use registry::ShapeRegistry;
pub use render::{FrameSnapshot, NullBackend, RenderBackend};
pub use session::{FrameStats, GestureTracking, Session};
pub use shapes::ShapeKind;
pub use sprite::radial_sprite;
