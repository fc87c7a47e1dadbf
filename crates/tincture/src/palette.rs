//! Named system colors with dark-theme variants.
//!
//! Values follow the iOS system palette (`UIColor.systemRed` and friends).

use serde::{Deserialize, Serialize};

use crate::color::Color;

fn adaptive(light: u32, dark: u32) -> Color {
    Color::from_rgb24(light).adaptive_to_dark_theme(Color::from_rgb24(dark))
}

/// Red (`#ff3b30`, dark `#ff453a`).
#[must_use]
pub fn red() -> Color {
    adaptive(0xff3b30, 0xff453a)
}

/// Blue (`#007aff`, dark `#0a84ff`).
#[must_use]
pub fn blue() -> Color {
    adaptive(0x007aff, 0x0a84ff)
}

/// Green (`#34c759`, dark `#30d158`).
#[must_use]
pub fn green() -> Color {
    adaptive(0x34c759, 0x30d158)
}

/// Teal (`#5ac8fa`, dark `#64d2ff`).
#[must_use]
pub fn teal() -> Color {
    adaptive(0x5ac8fa, 0x64d2ff)
}

/// Yellow (`#ffcc00`, dark `#ffd60a`).
#[must_use]
pub fn yellow() -> Color {
    adaptive(0xffcc00, 0xffd60a)
}

/// Pink (`#ff2d55`, dark `#ff375f`).
#[must_use]
pub fn pink() -> Color {
    adaptive(0xff2d55, 0xff375f)
}

/// Purple (`#af52de`, dark `#bf5af2`).
#[must_use]
pub fn purple() -> Color {
    adaptive(0xaf52de, 0xbf5af2)
}

/// Orange (`#ff9500`, dark `#ff9f0a`).
#[must_use]
pub fn orange() -> Color {
    adaptive(0xff9500, 0xff9f0a)
}

/// Indigo (`#5856d6`, dark `#5e5ce6`).
#[must_use]
pub fn indigo() -> Color {
    adaptive(0x5856d6, 0x5e5ce6)
}

/// The named system colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemColor {
    Red,
    Blue,
    Green,
    Teal,
    Yellow,
    Pink,
    Purple,
    Orange,
    Indigo,
}

impl SystemColor {
    /// All named colors in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Teal,
        Self::Yellow,
        Self::Pink,
        Self::Purple,
        Self::Orange,
        Self::Indigo,
    ];

    /// Lowercase name, e.g. `"teal"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Indigo => "indigo",
        }
    }

    /// The adaptive color for this name.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Red => red(),
            Self::Blue => blue(),
            Self::Green => green(),
            Self::Teal => teal(),
            Self::Yellow => yellow(),
            Self::Pink => pink(),
            Self::Purple => purple(),
            Self::Orange => orange(),
            Self::Indigo => indigo(),
        }
    }
}
