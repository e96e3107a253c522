// Host-side tests for hex color parsing.

use paint_core::*;

#[test]
fn parses_six_digit_hex_in_either_case() {
    let lower = HexColor::parse("#ff00aa").unwrap();
    let upper = HexColor::parse("#FF00AA").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.rgb(), [0xff, 0x00, 0xaa]);
    assert_eq!(upper.to_hex(), "#ff00aa", "display is normalized to lowercase");
}

#[test]
fn rejects_everything_but_hash_rrggbb() {
    for bad in [
        "", "#", "ff00aa", "#fff", "#ff00aa00", "#gggggg", "red", "rgb(1,2,3)", " #ff00aa",
        "#ff00a", "#ff 0aa",
    ] {
        match HexColor::parse(bad) {
            Err(ConfigError::InvalidOption { field, value }) => {
                assert_eq!(field, Field::Color);
                assert_eq!(value, bad);
            }
            other => panic!("expected rejection of {:?}, got {:?}", bad, other),
        }
    }
}

#[test]
fn rejects_multibyte_input_without_panicking() {
    assert!(HexColor::parse("#ffé0a").is_err());
    assert!(HexColor::parse("#日本語").is_err());
}

#[test]
fn linear_conversion_endpoints_and_midpoint() {
    let white = HexColor::from_rgb(255, 255, 255).to_linear();
    assert!((white.x - 1.0).abs() < 1e-5);
    let black = HexColor::from_rgb(0, 0, 0).to_linear();
    assert_eq!(black.x, 0.0);
    // sRGB 0x80 is about 0.2158 in linear light
    let mid = HexColor::from_rgb(0x80, 0x80, 0x80).to_linear();
    assert!((mid.x - 0.2158).abs() < 1e-3, "got {}", mid.x);
}

#[test]
fn from_str_matches_parse() {
    let c: HexColor = "#7c3aed".parse().unwrap();
    assert_eq!(c, HexColor::from_rgb(0x7c, 0x3a, 0xed));
}
