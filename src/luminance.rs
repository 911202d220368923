//! WCAG 2.x relative luminance.
//! <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>

use std::fmt;

use crate::{
    color::{Color, Component, Components},
    math::weighted_sum,
};

/// Weights of the linear red, green and blue channels.
const WEIGHTS: Components = Components(0.2126, 0.7152, 0.0722);

/// The perceptually weighted brightness of a color, from `0.0` for black to
/// `1.0` for white.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct RelativeLuminance(Component);

impl RelativeLuminance {
    /// The luminance of black.
    pub const MIN: RelativeLuminance = RelativeLuminance(0.0);

    /// The luminance of white.
    pub const MAX: RelativeLuminance = RelativeLuminance(1.0);

    /// Return the luminance as a plain value.
    pub fn value(&self) -> Component {
        self.0
    }
}

impl From<RelativeLuminance> for Component {
    fn from(value: RelativeLuminance) -> Self {
        value.0
    }
}

impl fmt::Display for RelativeLuminance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Calculate the relative luminance of a color.
///
/// Each channel is normalized, linearized with the sRGB transfer function and
/// then weighted. Alpha is ignored.
pub fn relative_luminance(color: &Color) -> RelativeLuminance {
    let linear = color.to_srgb().to_linear_light();
    let luminance = weighted_sum(&WEIGHTS, &linear.to_components());

    // The weights sum to one, so only rounding can push this out of range.
    RelativeLuminance(luminance.clamp(0.0, 1.0))
}

impl Color {
    /// Calculate the relative luminance of this color.
    /// See [`relative_luminance`].
    pub fn relative_luminance(&self) -> RelativeLuminance {
        relative_luminance(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn black_and_white_are_the_extremes() {
        assert_eq!(relative_luminance(&Color::BLACK), RelativeLuminance::MIN);
        assert_eq!(relative_luminance(&Color::WHITE).value(), 1.0);
    }

    #[test]
    fn primaries_take_their_weight() {
        assert_component_eq!(Color::new(255, 0, 0).relative_luminance().value(), 0.2126);
        assert_component_eq!(Color::new(0, 255, 0).relative_luminance().value(), 0.7152);
        assert_component_eq!(Color::new(0, 0, 255).relative_luminance().value(), 0.0722);
    }

    #[test]
    fn grays() {
        assert_component_eq!(Color::new(0x76, 0x76, 0x76).relative_luminance().value(), 0.18116);
        assert_component_eq!(Color::new(0x59, 0x59, 0x59).relative_luminance().value(), 0.09989);
        // 10 / 255 sits on the linear segment.
        assert_component_eq!(
            Color::new(10, 10, 10).relative_luminance().value(),
            10.0 / 255.0 / 12.92
        );
    }

    #[test]
    fn alpha_is_ignored() {
        let opaque = Color::new(30, 60, 90);
        let translucent = opaque.with_alpha(0.1).unwrap();
        assert_eq!(opaque.relative_luminance(), translucent.relative_luminance());
    }

    #[test]
    fn luminance_increases_with_each_channel() {
        let mut previous = RelativeLuminance::MIN;
        for value in 1..=255u8 {
            let current = Color::new(value, value, value).relative_luminance();
            assert!(current > previous, "{value}");
            previous = current;
        }
    }
}
