// Pixel-space helpers shared by the canvas and the debug overlay.

/// Upper bound on the device pixel ratio used for the backing store.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Backing-store size for a canvas of the given CSS size.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    };
    let w = (css_width.max(0.0) * dpr).round() as u32;
    let h = (css_height.max(0.0) * dpr).round() as u32;
    (w.max(1), h.max(1))
}

/// Map a normalized landmark (x, y in `[0, 1]`) onto an overlay canvas.
#[inline]
pub fn landmark_to_overlay(x: f32, y: f32, width: u32, height: u32) -> (f64, f64) {
    (x as f64 * width as f64, y as f64 * height as f64)
}
