//! Models are floating point representations of a color in a specific form.
//! They are used to convert between notations and to get to linear light,
//! where luminance is calculated.

use crate::{
    color::{Color, Component},
    error::Error,
};

mod hsl;
mod hwb;
mod rgb;

pub use hsl::Hsl;
pub use hwb::Hwb;
pub use rgb::{encoding, Rgb, Srgb, SrgbLinear};

/// A trait implemented for color models that can be converted to a [`Color`].
pub trait Model {
    /// Convert the model to gamma encoded sRGB.
    fn to_srgb(&self) -> Srgb;

    /// Quantize the model to a [`Color`] with 8-bit channels. Fails if the
    /// model lies outside the sRGB gamut.
    fn to_color(&self, alpha: Option<Component>) -> Result<Color, Error> {
        let color = crate::convert::quantize(&self.to_srgb())?;
        match alpha {
            Some(alpha) => color.with_alpha(alpha),
            None => Ok(color),
        }
    }
}
