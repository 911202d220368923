//! Conversions between a [`Color`] and the floating point models.
//!
//! Going from a [`Color`] to a model is always possible. Going back requires
//! quantizing to 8-bit channels, which fails when the model lies outside the
//! sRGB gamut.
//!
//! NOTE: When a conversion yields a NaN hue, the hue is powerless (the color
//!       has no chroma) and should be treated as missing.

use crate::{
    color::{Color, Component, Components},
    error::{Error, InvalidReason},
    math::{almost_zero, normalize, normalize_hue},
    models::{Hsl, Hwb, Srgb},
};

/// How far outside `[0, 1]` a component may drift through floating point error
/// before it is considered out of gamut.
const GAMUT_TOLERANCE: Component = 1.0e-4;

impl Color {
    /// Convert this color to the gamma encoded sRGB model.
    pub fn to_srgb(&self) -> Srgb {
        self.to_components().into()
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        self.to_srgb().to_hsl()
    }

    /// Convert this color to the HWB notation.
    pub fn to_hwb(&self) -> Hwb {
        self.to_srgb().to_hwb()
    }
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(&self.to_components()).into()
    }

    /// Convert a color specified in the sRGB color space to the HWB notation.
    pub fn to_hwb(&self) -> Hwb {
        rgb_to_hwb(&self.to_components()).into()
    }
}

/// Round gamma encoded sRGB components to 8-bit channels.
pub(crate) fn quantize(srgb: &Srgb) -> Result<Color, Error> {
    let components = srgb.to_components();

    let channel = |value: Component| -> Result<u8, Error> {
        if value.is_nan() || value < -GAMUT_TOLERANCE || value > 1.0 + GAMUT_TOLERANCE {
            log::debug!("component {value} is outside the sRGB gamut");
            return Err(Error::invalid(
                components.to_string(),
                InvalidReason::OutOfGamut,
            ));
        }
        Ok((value.clamp(0.0, 1.0) * 255.0).round() as u8)
    };

    Ok(Color::new(
        channel(components.0)?,
        channel(components.1)?,
        channel(components.2)?,
    ))
}

/// Calculate the hue from RGB components and return it along with the min
/// and max RGB values.
fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if almost_zero(delta) {
        Component::NAN
    } else if max == red {
        60.0 * ((green - blue) / delta + if green < blue { 6.0 } else { 0.0 })
    } else if max == green {
        60.0 * ((blue - red) / delta + 2.0)
    } else {
        60.0 * ((red - green) / delta + 4.0)
    };

    (hue, min, max)
}

/// Convert from RGB notation to HSL notation.
/// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
pub(crate) fn rgb_to_hsl(from: &Components) -> Components {
    let (hue, min, max) = rgb_to_hue_with_min_max(from);

    let lightness = (min + max) / 2.0;
    let delta = max - min;

    let saturation =
        if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
            0.0
        } else {
            (max - lightness) / lightness.min(1.0 - lightness)
        };

    Components(hue, saturation, lightness)
}

/// Convert from HSL notation to RGB notation.
/// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
pub(crate) fn hsl_to_rgb(from: &Components) -> Components {
    let Components(hue, saturation, lightness) = from.map(normalize);

    if saturation <= 0.0 {
        return Components(lightness, lightness, lightness);
    }

    let hue = normalize_hue(hue);
    let a = saturation * lightness.min(1.0 - lightness);

    let f = |n: Component| {
        let k = (n + hue / 30.0) % 12.0;
        lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };

    Components(f(0.0), f(8.0), f(4.0))
}

/// Convert from RGB notation to HWB notation.
/// <https://drafts.csswg.org/css-color-4/#rgb-to-hwb>
pub(crate) fn rgb_to_hwb(from: &Components) -> Components {
    let (hue, min, max) = rgb_to_hue_with_min_max(from);

    Components(hue, min, 1.0 - max)
}

/// Convert from HWB notation to RGB notation.
/// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
pub(crate) fn hwb_to_rgb(from: &Components) -> Components {
    let Components(hue, whiteness, blackness) = from.map(normalize);

    if whiteness + blackness >= 1.0 {
        let gray = whiteness / (whiteness + blackness);
        return Components(gray, gray, gray);
    }

    hsl_to_rgb(&Components(hue, 1.0, 0.5)).map(|v| v * (1.0 - whiteness - blackness) + whiteness)
}
