//! A [`Color`] is an sRGB color with 8-bit channels, the value every contrast
//! calculation operates on.

use std::fmt;

use crate::error::{Error, InvalidReason};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all model components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all model components are stored as.
pub type Component = f64;

/// Represent the three components of a color model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0, self.1, self.2)
    }
}

/// An sRGB color with 8-bit red, green and blue channels and an optional
/// alpha.
///
/// Alpha is carried along for round trips through text, but it never takes
/// part in luminance or contrast calculations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    alpha: Option<Component>,
}

impl Color {
    /// Opaque black, `#000000`.
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Opaque white, `#ffffff`.
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a new color from 8-bit channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    /// Create a new color from channels that might be out of range.
    ///
    /// ```rust
    /// use contrast::Color;
    /// assert!(Color::from_channels(255, 0, 0).is_ok());
    /// assert!(Color::from_channels(256, 0, 0).is_err());
    /// ```
    pub fn from_channels(red: i32, green: i32, blue: i32) -> Result<Self, Error> {
        Ok(Self::new(
            checked_channel(red)?,
            checked_channel(green)?,
            checked_channel(blue)?,
        ))
    }

    /// Return a copy of this color with the given alpha, which must be in
    /// `[0.0, 1.0]`.
    pub fn with_alpha(self, alpha: Component) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(Error::invalid(alpha.to_string(), InvalidReason::AlphaOutOfRange));
        }

        Ok(Self {
            alpha: Some(alpha),
            ..self
        })
    }

    /// Return the alpha of the color, if one was specified.
    pub fn alpha(&self) -> Option<Component> {
        self.alpha
    }

    /// Return the three channels normalized to `[0.0, 1.0]`.
    pub fn to_components(&self) -> Components {
        Components(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }
}

fn checked_channel(value: i32) -> Result<u8, Error> {
    u8::try_from(value)
        .map_err(|_| Error::invalid(value.to_string(), InvalidReason::ChannelOutOfRange))
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl TryFrom<[i32; 3]> for Color {
    type Error = Error;

    fn try_from([red, green, blue]: [i32; 3]) -> Result<Self, Self::Error> {
        Self::from_channels(red, green, blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;
        if let Some(alpha) = self.alpha {
            write!(f, "{:02x}", (alpha * 255.0).round() as u8)?;
        }
        Ok(())
    }
}
