//! Model a color with the HWB notation in the sRGB color space.

use crate::{color::Component, convert};

use super::{Model, Srgb};

contrast_macros::gen_model! {
    /// A color specified with the HWB notation in the sRGB color space.
    pub struct Hwb {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The whiteness component of the color, in `[0, 1]`.
        pub whiteness: Component,
        /// The blackness component of the color, in `[0, 1]`.
        pub blackness: Component,
    }
}

impl Model for Hwb {
    fn to_srgb(&self) -> Srgb {
        convert::hwb_to_rgb(&self.to_components()).into()
    }
}
