//! Model a color with the HSL notation in the sRGB color space.

use crate::{color::Component, convert};

use super::{Model, Srgb};

contrast_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The saturation component of the color, in `[0, 1]`.
        saturation: Component,
        /// The lightness component of the color, in `[0, 1]`.
        lightness: Component,
    }
}

impl Model for Hsl {
    fn to_srgb(&self) -> Srgb {
        convert::hsl_to_rgb(&self.to_components()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Components;

    #[test]
    fn components_in_declaration_order() {
        let hsl = Hsl::new(210.0, 0.5, 0.25);
        assert_eq!(hsl.to_components(), Components(210.0, 0.5, 0.25));
        assert_eq!(Hsl::from(Components(1.0, 0.0, 0.5)), Hsl::new(1.0, 0.0, 0.5));
    }
}
