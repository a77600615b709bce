// Host-side tests for pure front-end helpers.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod color {
    include!("../src/color.rs");
}
mod layout {
    include!("../src/layout.rs");
}

use color::*;
use layout::*;

fn close(a: [f32; 3], b: [f32; 3]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-3)
}

#[test]
fn parses_picker_values() {
    let rgb = parse_hex_color("#ffcc88").expect("valid colour");
    assert!(close(rgb, [1.0, 0.8, 0.533]));
    assert_eq!(parse_hex_color("000000"), Some([0.0, 0.0, 0.0]));
    assert!(parse_hex_color(" #FFFFFF ").is_some());
}

#[test]
fn rejects_malformed_colours() {
    assert_eq!(parse_hex_color(""), None);
    assert_eq!(parse_hex_color("#fff"), None);
    assert_eq!(parse_hex_color("#gg0000"), None);
    assert_eq!(parse_hex_color("#+f0000"), None);
    assert_eq!(parse_hex_color("#ffcc8"), None);
    assert_eq!(parse_hex_color("#ffcc88aa"), None);
}

#[test]
fn hex_formatting_inverts_parsing() {
    assert_eq!(format_hex_color([1.0, 0.8, 0.533]), "#ffcc88");
    assert_eq!(format_hex_color([2.0, -1.0, 0.0]), "#ff0000");
}

#[test]
fn scale_readout_has_two_decimals() {
    assert_eq!(format_scale(1.0), "1.00");
    assert_eq!(format_scale(2.0849), "2.08");
    assert_eq!(format_scale(0.5), "0.50");
}

#[test]
fn backing_size_caps_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 1.5), (1200, 900));
    assert_eq!(backing_size(800.0, 600.0, 3.0), (1600, 1200));
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(100.0, 50.0, f64::NAN), (100, 50));
}

#[test]
fn landmarks_map_onto_the_overlay() {
    assert_eq!(landmark_to_overlay(0.0, 0.0, 320, 180), (0.0, 0.0));
    assert_eq!(landmark_to_overlay(0.5, 1.0, 320, 180), (160.0, 180.0));
}
