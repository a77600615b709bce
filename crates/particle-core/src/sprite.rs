/// Alpha stops of the particle sprite as `(radius fraction, alpha)`.
const SPRITE_STOPS: [(f32, f32); 4] = [(0.0, 1.0), (0.25, 0.9), (0.5, 0.4), (1.0, 0.0)];

/// Alpha at normalized distance `t` from the sprite centre.
pub fn sprite_alpha(t: f32) -> f32 {
    let t = t.max(0.0);
    for pair in SPRITE_STOPS.windows(2) {
        let (t0, a0) = pair[0];
        let (t1, a1) = pair[1];
        if t <= t1 {
            let f = (t - t0) / (t1 - t0);
            return a0 + (a1 - a0) * f;
        }
    }
    0.0
}

/// White RGBA8 disc, `size * size` texels, alpha falling off radially.
pub fn radial_sprite(size: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    if size == 0 {
        return data;
    }
    let radius = size as f32 * 0.5;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let t = (dx * dx + dy * dy).sqrt() / radius;
            let a = (sprite_alpha(t) * 255.0).round() as u8;
            data.extend_from_slice(&[255, 255, 255, a]);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_follows_stops() {
        assert!((sprite_alpha(0.0) - 1.0).abs() < 1e-6);
        assert!((sprite_alpha(0.25) - 0.9).abs() < 1e-6);
        assert!((sprite_alpha(0.5) - 0.4).abs() < 1e-6);
        assert!((sprite_alpha(0.75) - 0.2).abs() < 1e-6);
        assert_eq!(sprite_alpha(1.0), 0.0);
        assert_eq!(sprite_alpha(1.5), 0.0);
    }

    #[test]
    fn sprite_is_bright_in_the_middle() {
        let size = 16;
        let data = radial_sprite(size);
        assert_eq!(data.len(), (size * size * 4) as usize);
        let texel = |x: u32, y: u32| data[((y * size + x) * 4 + 3) as usize];
        assert!(texel(8, 8) > 200);
        assert_eq!(texel(0, 0), 0);
    }
}
