// Element ids the front-end binds to.
pub const CANVAS_ID: &str = "app-canvas";
pub const SHAPE_SELECT_ID: &str = "shape-select";
pub const COLOR_INPUT_ID: &str = "color-input";
pub const TOGGLE_HANDS_ID: &str = "toggle-hands";
pub const SCALE_VALUE_ID: &str = "scale-value";
pub const WEBCAM_ID: &str = "webcam";
pub const DEBUG_CANVAS_ID: &str = "debug-canvas";

// Debug overlay
pub const DEBUG_CANVAS_WIDTH: u32 = 320;
pub const DEBUG_CANVAS_HEIGHT: u32 = 180;
pub const LANDMARK_DOT_RADIUS: f64 = 3.0;
pub const LANDMARK_DOT_COLOR: &str = "#00ffcc";
