/// Parse a colour-input value (`#rrggbb`, leading `#` optional) into RGB in `[0, 1]`.
pub fn parse_hex_color(value: &str) -> Option<[f32; 3]> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Inverse of [`parse_hex_color`], used to seed the colour input.
pub fn format_hex_color(rgb: [f32; 3]) -> String {
    let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", byte(rgb[0]), byte(rgb[1]), byte(rgb[2]))
}

/// Text shown in the scale readout.
#[inline]
pub fn format_scale(scale: f32) -> String {
    format!("{:.2}", scale)
}
