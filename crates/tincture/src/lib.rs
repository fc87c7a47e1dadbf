//! Color value type with hex and CSS serialization.
//!
//! This crate provides:
//! - [`Color`]: RGBA components with `#RRGGBB`, `#RRGGBBAA` and CSS output
//! - Display P3 tagging, selecting the `color(display-p3 ...)` CSS grammar
//! - Dark-theme variants via [`Color::adaptive_to_dark_theme`] and [`Appearance`]
//! - The named [`palette`] of system colors
//!
//! ```
//! use tincture::Color;
//!
//! let red = Color::from_hex("#ff3b30")?;
//! assert_eq!(red.rgba_description(), "rgba(255, 59, 48, 1)");
//! assert_eq!(red.opacity(0.3).rgba_description(), "rgba(255, 59, 48, 0.3)");
//! # Ok::<(), tincture::ColorParseError>(())
//! ```

mod color;
mod css;
mod error;
pub mod palette;

pub use color::{Appearance, Color};
pub use error::ColorParseError;
pub use palette::SystemColor;
