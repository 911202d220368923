//! contrast calculates the WCAG 2.x relative luminance of sRGB colors and the
//! contrast ratio between them, and classifies the ratio against the AA and
//! AAA conformance levels.
//!
//! ```rust
//! use contrast::{Color, Level, TextSize};
//!
//! let text: Color = "#767676".parse().unwrap();
//! let result = text.contrast_ratio(&Color::WHITE);
//!
//! assert!(result.passes(Level::AA, TextSize::Normal));
//! assert!(!result.passes(Level::AAA, TextSize::Normal));
//! assert_eq!(result.to_string(), "4.54:1");
//! ```

#![deny(missing_docs)]

mod color;
mod contrast;
mod convert;
mod error;
mod luminance;
mod math;
pub mod models;
mod parse;

#[cfg(test)]
mod test;

pub use color::{Color, Component, Components};
pub use contrast::{contrast_ratio, ContrastResult, Level, Levels, TextSize, MAX_RATIO, MIN_RATIO};
pub use error::{Error, InvalidReason};
pub use luminance::{relative_luminance, RelativeLuminance};
pub use parse::parse_color;
