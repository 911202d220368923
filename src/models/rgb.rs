//! Model a color in the sRGB color space, with or without gamma encoding.

use crate::color::Component;

use super::Model;

pub mod encoding {
    //! Tags for the transfer function applied to RGB components.

    use std::fmt::Debug;

    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding: Clone + Copy + Debug + PartialEq {}

    /// Components are gamma encoded, the way they are written in CSS.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

/// Encoded values at or below this sit on the linear segment of the sRGB
/// transfer curve, as defined for WCAG 2.x relative luminance.
const ENCODED_THRESHOLD: Component = 0.03928;

/// The same knee, expressed in linear light.
const LINEAR_THRESHOLD: Component = ENCODED_THRESHOLD / 12.92;

contrast_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

impl Srgb {
    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        self.to_components()
            .map(|value| {
                if value <= ENCODED_THRESHOLD {
                    value / 12.92
                } else {
                    ((value + 0.055) / 1.055).powf(2.4)
                }
            })
            .into()
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Srgb {
        self.to_components()
            .map(|value| {
                if value <= LINEAR_THRESHOLD {
                    value * 12.92
                } else {
                    1.055 * value.powf(1.0 / 2.4) - 0.055
                }
            })
            .into()
    }
}

impl Model for Srgb {
    fn to_srgb(&self) -> Srgb {
        *self
    }
}

impl Model for SrgbLinear {
    fn to_srgb(&self) -> Srgb {
        self.to_gamma_encoded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, color::Components};

    #[test]
    fn basic_rgb_models() {
        let srgb = Srgb::new(0.1, 0.2, 0.3);
        assert_eq!(srgb.red, 0.1);
        assert_eq!(srgb.green, 0.2);
        assert_eq!(srgb.blue, 0.3);
        assert_eq!(srgb.to_components(), Components(0.1, 0.2, 0.3));
    }

    #[test]
    fn linear_segment_below_threshold() {
        let linear = Srgb::new(0.03, 0.0, ENCODED_THRESHOLD).to_linear_light();
        assert_component_eq!(linear.red, 0.03 / 12.92);
        assert_eq!(linear.green, 0.0);
        assert_component_eq!(linear.blue, ENCODED_THRESHOLD / 12.92);
    }

    #[test]
    fn power_curve_above_threshold() {
        // #808080
        let linear = Srgb::new(128.0 / 255.0, 1.0, 0.5).to_linear_light();
        assert_component_eq!(linear.red, 0.21586);
        assert_component_eq!(linear.green, 1.0);
        assert_component_eq!(linear.blue, 0.21404);
    }

    #[test]
    fn gamma_encoding_inverts_linear_light() {
        for value in [0.0, 0.02, 0.03928, 0.2, 0.5, 0.77, 1.0] {
            let srgb = Srgb::new(value, value, value);
            let back = srgb.to_linear_light().to_gamma_encoded();
            assert_component_eq!(back.red, value);
        }
    }
}
