//! WCAG 2.x contrast ratio and conformance levels.
//! <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>
//!
//! | Text size | AA    | AAA   |
//! |-----------|-------|-------|
//! | Normal    | 4.5:1 | 7:1   |
//! | Large     | 3:1   | 4.5:1 |

use std::fmt;

use bitflags::bitflags;

use crate::{color::Color, luminance::relative_luminance, Component};

/// The lowest possible ratio, between two colors of equal luminance.
pub const MIN_RATIO: Component = 1.0;

/// The highest possible ratio, between black and white.
pub const MAX_RATIO: Component = 21.0;

/// Scale applied to both luminances so the 0.05 flare term becomes 1.
/// `(L1 + 0.05) / (L2 + 0.05)` equals `(20 * L1 + 1) / (20 * L2 + 1)`, and the
/// scaled form is exact at both ends in `f32`.
const FLARE_SCALE: Component = 20.0;

bitflags! {
    /// The set of WCAG conformance levels a contrast ratio satisfies.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Levels : u8 {
        /// AA for large text and UI components (3:1).
        const AA_LARGE = 1 << 0;
        /// AA for normal text (4.5:1).
        const AA = 1 << 1;
        /// AAA for large text (4.5:1).
        const AAA_LARGE = 1 << 2;
        /// AAA for normal text (7:1).
        const AAA = 1 << 3;
    }
}

impl Levels {
    /// Return every level the given ratio satisfies.
    pub fn from_ratio(ratio: Component) -> Self {
        let mut levels = Levels::empty();
        for size in [TextSize::Normal, TextSize::Large] {
            for level in [Level::AA, Level::AAA] {
                if ratio >= level.min_ratio(size) {
                    levels |= level.flag(size);
                }
            }
        }
        levels
    }
}

/// The size of the text the contrast is evaluated for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextSize {
    /// Body text.
    #[default]
    Normal,
    /// At least 18pt, or 14pt bold. UI components and graphical objects use
    /// the same thresholds.
    Large,
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            TextSize::Normal => "normal",
            TextSize::Large => "large",
        })
    }
}

/// A WCAG conformance level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Level AA, the common legal baseline.
    AA,
    /// Level AAA, the enhanced level.
    AAA,
}

impl Level {
    /// Return the minimum contrast ratio this level requires for text of the
    /// given size.
    pub const fn min_ratio(self, size: TextSize) -> Component {
        match (self, size) {
            (Level::AA, TextSize::Normal) => 4.5,
            (Level::AAA, TextSize::Normal) => 7.0,
            (Level::AA, TextSize::Large) => 3.0,
            (Level::AAA, TextSize::Large) => 4.5,
        }
    }

    fn flag(self, size: TextSize) -> Levels {
        match (self, size) {
            (Level::AA, TextSize::Normal) => Levels::AA,
            (Level::AAA, TextSize::Normal) => Levels::AAA,
            (Level::AA, TextSize::Large) => Levels::AA_LARGE,
            (Level::AAA, TextSize::Large) => Levels::AAA_LARGE,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Level::AA => "AA",
            Level::AAA => "AAA",
        })
    }
}

/// The contrast between two colors and the conformance levels it meets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContrastResult {
    ratio: Component,
    levels: Levels,
}

impl ContrastResult {
    fn new(ratio: Component) -> Self {
        let ratio = ratio.clamp(MIN_RATIO, MAX_RATIO);
        Self {
            ratio,
            levels: Levels::from_ratio(ratio),
        }
    }

    /// Return the contrast ratio, in `[1.0, 21.0]`.
    pub fn ratio(&self) -> Component {
        self.ratio
    }

    /// Return the ratio truncated to two decimals. Unlike rounding, this
    /// never shows a failing ratio at or above a threshold.
    pub fn truncated_ratio(&self) -> Component {
        (self.ratio * 100.0).floor() / 100.0
    }

    /// Return every conformance level this contrast satisfies.
    pub fn levels(&self) -> Levels {
        self.levels
    }

    /// Returns true if the contrast meets `level` for text of the given size.
    pub fn passes(&self, level: Level, size: TextSize) -> bool {
        self.levels.contains(level.flag(size))
    }

    /// Return the strictest level met for text of the given size, or `None`
    /// when not even AA is met.
    pub fn highest_level(&self, size: TextSize) -> Option<Level> {
        [Level::AAA, Level::AA]
            .into_iter()
            .find(|level| self.passes(*level, size))
    }
}

impl fmt::Display for ContrastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}:1", self.truncated_ratio())
    }
}

/// Calculate the WCAG contrast ratio between two colors and classify it.
///
/// The order of the colors does not matter.
pub fn contrast_ratio(a: &Color, b: &Color) -> ContrastResult {
    let a_luminance = relative_luminance(a).value();
    let b_luminance = relative_luminance(b).value();

    let lighter = a_luminance.max(b_luminance);
    let darker = a_luminance.min(b_luminance);

    let result = ContrastResult::new(
        (FLARE_SCALE * lighter + 1.0) / (FLARE_SCALE * darker + 1.0),
    );
    log::trace!("contrast between {a} and {b} is {result}");
    result
}

impl Color {
    /// Calculate the contrast ratio between this color and another.
    /// See [`contrast_ratio`].
    pub fn contrast_ratio(&self, other: &Color) -> ContrastResult {
        contrast_ratio(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn gray(value: u8) -> Color {
        Color::new(value, value, value)
    }

    #[test]
    fn same_color_has_no_contrast() {
        for color in [Color::BLACK, Color::WHITE, Color::new(12, 200, 99), gray(0x76)] {
            let result = contrast_ratio(&color, &color);
            assert_eq!(result.ratio(), 1.0);
            assert_eq!(result.levels(), Levels::empty());
            assert_eq!(result.highest_level(TextSize::Large), None);
        }
    }

    #[test]
    fn black_on_white_is_the_maximum() {
        let result = contrast_ratio(&Color::BLACK, &Color::WHITE);
        assert_eq!(result.ratio(), MAX_RATIO);
        assert_eq!(result.levels(), Levels::all());
        assert_eq!(result.to_string(), "21.00:1");
    }

    #[test]
    fn contrast_is_symmetric() {
        let colors = [
            Color::BLACK,
            Color::WHITE,
            Color::new(255, 0, 0),
            Color::new(0x1e, 0x29, 0x3b),
            gray(0x59),
            Color::new(3, 250, 128),
        ];
        for a in colors.iter() {
            for b in colors.iter() {
                assert_eq!(a.contrast_ratio(b), b.contrast_ratio(a), "{a} {b}");
            }
        }
    }

    #[test]
    fn gray_767676_on_white_passes_aa_only() {
        let result = contrast_ratio(&Color::WHITE, &gray(0x76));
        assert_component_eq!(result.ratio(), 4.54, 0.01);
        assert!(result.passes(Level::AA, TextSize::Normal));
        assert!(!result.passes(Level::AAA, TextSize::Normal));
        assert_eq!(result.highest_level(TextSize::Normal), Some(Level::AA));
        assert_eq!(result.highest_level(TextSize::Large), Some(Level::AAA));
        assert_eq!(result.levels(), Levels::AA | Levels::AA_LARGE | Levels::AAA_LARGE);
    }

    #[test]
    fn gray_595959_on_white_passes_aaa() {
        let result = contrast_ratio(&Color::WHITE, &gray(0x59));
        assert_component_eq!(result.ratio(), 7.0, 0.01);
        assert!(result.ratio() >= 7.0);
        assert_eq!(result.highest_level(TextSize::Normal), Some(Level::AAA));
    }

    #[test]
    fn white_on_red_passes_large_aa_only() {
        let result = contrast_ratio(&Color::new(255, 0, 0), &Color::WHITE);
        assert_component_eq!(result.ratio(), 4.0, 0.01);
        assert!(!result.passes(Level::AA, TextSize::Normal));
        assert!(result.passes(Level::AA, TextSize::Large));
        assert!(!result.passes(Level::AAA, TextSize::Large));
        assert_eq!(result.highest_level(TextSize::Normal), None);
        assert_eq!(result.highest_level(TextSize::Large), Some(Level::AA));
    }

    #[test]
    fn display_never_rounds_up_to_a_threshold() {
        let result = contrast_ratio(&Color::new(0x15, 0x8a, 0x00), &Color::WHITE);
        assert!(result.ratio() < 4.5);
        assert!(!result.passes(Level::AA, TextSize::Normal));
        assert_eq!(result.truncated_ratio(), 4.49);
        assert_eq!(result.to_string(), "4.49:1");

        let result = contrast_ratio(&gray(0x95), &Color::WHITE);
        assert!(!result.passes(Level::AA, TextSize::Large));
        assert_eq!(result.to_string(), "2.99:1");

        let result = contrast_ratio(&Color::new(255, 0, 0), &Color::WHITE);
        assert_eq!(result.to_string(), "3.99:1");
    }

    #[test]
    fn levels_at_exact_thresholds() {
        assert_eq!(Levels::from_ratio(2.99), Levels::empty());
        assert_eq!(Levels::from_ratio(3.0), Levels::AA_LARGE);
        assert_eq!(
            Levels::from_ratio(4.5),
            Levels::AA_LARGE | Levels::AA | Levels::AAA_LARGE
        );
        assert_eq!(Levels::from_ratio(7.0), Levels::all());
    }

    #[test]
    fn ratio_stays_in_range() {
        for a in (0..=255u8).step_by(15) {
            for b in (0..=255u8).step_by(17) {
                let ratio = gray(a).contrast_ratio(&Color::new(b, 255 - b, a)).ratio();
                assert!((MIN_RATIO..=MAX_RATIO).contains(&ratio), "{a} {b} {ratio}");
            }
        }
    }
}
