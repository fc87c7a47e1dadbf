//! Color representation with hex and CSS serialization.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::css;
use crate::error::ColorParseError;

/// Display appearance a color is rendered under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Light appearance
    #[default]
    Light,
    /// Dark appearance
    Dark,
}

/// RGBA color with components conventionally in the range [0.0, 1.0].
///
/// Components are stored as given; nothing is clamped at construction.
/// A color may carry a dark variant to use under [`Appearance::Dark`].
///
/// Two colors are equal when their byte-quantized RGBA values match, i.e.
/// when [`Color::to_hex_with_alpha`] yields the same string. The color space
/// tag and the dark variant do not take part in equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
    #[serde(default = "opaque")]
    alpha: f32,
    #[serde(default)]
    display_p3: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dark: Option<Box<Color>>,
}

const fn opaque() -> f32 {
    1.0
}

impl Color {
    /// Create an sRGB color from components and alpha.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            display_p3: false,
            dark: None,
        }
    }

    /// Create an opaque sRGB color.
    #[must_use]
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Create a color tagged with the Display P3 color space.
    ///
    /// Components are not converted; the tag only selects the
    /// `color(display-p3 ...)` grammar in [`Color::rgba_description`].
    #[must_use]
    pub const fn display_p3(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            display_p3: true,
            dark: None,
        }
    }

    /// Create an opaque color tagged with the Display P3 color space.
    #[must_use]
    pub const fn display_p3_rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::display_p3(red, green, blue, 1.0)
    }

    /// Parse a 6-digit hex color string (e.g., "#ff3b30" or "FF3B30").
    ///
    /// Surrounding whitespace is ignored, as is a single leading `#`.
    /// Digits are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError::InvalidLength`] unless exactly six
    /// characters remain, and [`ColorParseError::InvalidDigit`] for any
    /// character that is not a hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let len = digits.chars().count();
        if len != 6 {
            tracing::debug!(input = hex, len, "rejected hex color: wrong length");
            return Err(ColorParseError::InvalidLength(len));
        }

        let mut value: u32 = 0;
        for ch in digits.chars() {
            let Some(digit) = ch.to_digit(16) else {
                tracing::debug!(input = hex, digit = %ch, "rejected hex color: bad digit");
                return Err(ColorParseError::InvalidDigit(ch.to_ascii_uppercase()));
            };
            value = (value << 4) | digit;
        }

        Ok(Self::from_rgb24(value))
    }

    /// Create an opaque sRGB color from a packed `0xRRGGBB` value.
    #[must_use]
    pub(crate) fn from_rgb24(value: u32) -> Self {
        let channel = |shift: u32| f32::from(((value >> shift) & 0xff) as u8) / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Red component.
    #[must_use]
    pub const fn red(&self) -> f32 {
        self.red
    }

    /// Green component.
    #[must_use]
    pub const fn green(&self) -> f32 {
        self.green
    }

    /// Blue component.
    #[must_use]
    pub const fn blue(&self) -> f32 {
        self.blue
    }

    /// Alpha component.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Whether the color is tagged with the Display P3 color space.
    #[must_use]
    pub const fn is_display_p3(&self) -> bool {
        self.display_p3
    }

    /// The dark variant, if any.
    #[must_use]
    pub fn dark(&self) -> Option<&Self> {
        self.dark.as_deref()
    }

    /// Pick the color to render under the given appearance.
    ///
    /// Falls back to `self` when no dark variant is attached.
    #[must_use]
    pub fn resolve(&self, appearance: Appearance) -> &Self {
        match (appearance, self.dark()) {
            (Appearance::Dark, Some(dark)) => dark,
            _ => self,
        }
    }

    /// Convert to hex string (RGB only), e.g. `#FF3B30`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.quantized();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Convert to hex string with alpha, e.g. `#FF3B30FF`.
    #[must_use]
    pub fn to_hex_with_alpha(&self) -> String {
        let [r, g, b, a] = self.quantized();
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }

    /// CSS representation of the color.
    ///
    /// sRGB colors produce `rgba(255, 59, 48, 0.3)`; Display P3 colors
    /// produce `color(display-p3 0.5 0.5 0.5 / 1)`.
    #[must_use]
    pub fn rgba_description(&self) -> String {
        let alpha = css::general(f64::from(self.alpha));
        if self.display_p3 {
            format!(
                "color(display-p3 {} {} {} / {alpha})",
                css::general(f64::from(self.red)),
                css::general(f64::from(self.green)),
                css::general(f64::from(self.blue)),
            )
        } else {
            format!(
                "rgba({}, {}, {}, {alpha})",
                css::integral(f64::from(self.red * 255.0)),
                css::integral(f64::from(self.green * 255.0)),
                css::integral(f64::from(self.blue * 255.0)),
            )
        }
    }

    /// Copy of this color with a different alpha.
    ///
    /// The color space tag and any dark variant are kept; the dark variant's
    /// own alpha is left untouched.
    #[must_use]
    pub fn opacity(&self, alpha: f32) -> Self {
        Self {
            alpha,
            ..self.clone()
        }
    }

    /// Copy of this color paired with `dark` for dark appearances.
    ///
    /// Replaces any dark variant already attached.
    #[must_use]
    pub fn adaptive_to_dark_theme(&self, dark: Self) -> Self {
        Self {
            dark: Some(Box::new(dark)),
            ..*self
        }
    }

    /// Byte-quantized RGBA: each component clamped to [0, 1], scaled to 255
    /// and truncated.
    fn quantized(&self) -> [u8; 4] {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
        [
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            byte(self.alpha),
        ]
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.quantized() == other.quantized()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quantized().hash(state);
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rgba_description())
    }
}
