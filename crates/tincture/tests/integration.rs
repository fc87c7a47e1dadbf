//! Integration tests for tincture.
//!
//! These tests verify the public API works correctly end-to-end.

use tincture::{palette, Appearance, Color, ColorParseError, SystemColor};

// =============================================================================
// Color Integration Tests
// =============================================================================

#[test]
fn test_color_documented_outputs() {
    let red = Color::from_hex("#ff3b30").expect("valid hex");

    assert_eq!(red.to_hex(), "#FF3B30");
    assert_eq!(red.to_hex_with_alpha(), "#FF3B30FF");
    assert_eq!(red.rgba_description(), "rgba(255, 59, 48, 1)");
    assert_eq!(
        red.opacity(0.3).rgba_description(),
        "rgba(255, 59, 48, 0.3)"
    );
    assert_eq!(Color::rgb(255.0 / 255.0, 59.0 / 255.0, 48.0 / 255.0), red);
    assert_eq!(
        Color::display_p3_rgb(0.5, 0.5, 0.5).rgba_description(),
        "color(display-p3 0.5 0.5 0.5 / 1)"
    );
}

#[test]
fn test_color_parse_errors() {
    assert_eq!(Color::from_hex("abc"), Err(ColorParseError::InvalidLength(3)));
    assert_eq!(Color::from_hex(""), Err(ColorParseError::InvalidLength(0)));

    let err = "#12345z".parse::<Color>().unwrap_err();
    assert_eq!(err.to_string(), "invalid hex digit 'Z'");
}

#[test]
fn test_adaptive_color_for_theme() {
    let accent = palette::orange().opacity(0.8);

    let light = accent.resolve(Appearance::Light);
    let dark = accent.resolve(Appearance::Dark);

    assert_eq!(light.rgba_description(), "rgba(255, 149, 0, 0.8)");
    assert_eq!(dark.rgba_description(), "rgba(255, 159, 10, 1)");
}

#[test]
fn test_palette_lookup_by_name() {
    let by_name: Vec<(&str, String)> = SystemColor::ALL
        .iter()
        .map(|c| (c.name(), c.color().to_hex()))
        .collect();

    assert_eq!(by_name.len(), 9);
    assert_eq!(by_name[0], ("red", "#FF3B30".to_string()));
    assert_eq!(by_name[8], ("indigo", "#5856D6".to_string()));
    assert_eq!(palette::indigo().dark().map(Color::to_hex).as_deref(), Some("#5E5CE6"));
}

// =============================================================================
// Serialization Integration Tests
// =============================================================================

#[test]
fn test_color_json_round_trip_keeps_dark_and_space() {
    let original = Color::display_p3(0.25, 0.5, 0.75, 0.5)
        .adaptive_to_dark_theme(Color::rgb(0.1, 0.2, 0.3));

    let json = serde_json::to_string(&original).expect("serialize");
    let parsed: Color = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(parsed, original);
    assert!(parsed.is_display_p3());
    assert_eq!(parsed.rgba_description(), original.rgba_description());
    assert_eq!(parsed.dark(), original.dark());
}

#[test]
fn test_color_json_defaults() {
    let parsed: Color =
        serde_json::from_str(r#"{"red": 1.0, "green": 0.0, "blue": 0.0}"#).expect("deserialize");

    assert_eq!(parsed.alpha(), 1.0);
    assert!(!parsed.is_display_p3());
    assert!(parsed.dark().is_none());

    let json = serde_json::to_value(&parsed).expect("serialize");
    assert!(json.get("dark").is_none());
}

#[test]
fn test_appearance_json_names() {
    let dark: Appearance = serde_json::from_str("\"dark\"").expect("deserialize");
    assert_eq!(dark, Appearance::Dark);
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn test_parse_failure_with_subscriber_installed() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert!(Color::from_hex("#12").is_err());
        assert!(Color::from_hex("#123456").is_ok());
    });
}
