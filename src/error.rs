//! Errors reported when a value can not be turned into a [`Color`].
//!
//! [`Color`]: crate::Color

use thiserror::Error;

/// Why a value was rejected as a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    /// A channel was outside `[0, 255]`.
    ChannelOutOfRange,
    /// A percentage was outside `[0%, 100%]`.
    PercentageOutOfRange,
    /// An alpha value was outside `[0.0, 1.0]`.
    AlphaOutOfRange,
    /// A model component fell outside the sRGB gamut.
    OutOfGamut,
    /// The input was empty.
    Empty,
    /// A hex color did not have 3, 4, 6 or 8 digits.
    InvalidHexLength,
    /// A hex color contained something other than hex digits.
    InvalidHexDigit,
    /// A functional notation had the wrong shape or unparsable arguments.
    InvalidFunction,
    /// The input was not a recognized notation or named color.
    UnknownFormat,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InvalidReason::*;

        f.write_str(match self {
            ChannelOutOfRange => "channel out of range 0..=255",
            PercentageOutOfRange => "percentage out of range 0..=100",
            AlphaOutOfRange => "alpha out of range 0..=1",
            OutOfGamut => "component outside the sRGB gamut",
            Empty => "empty color string",
            InvalidHexLength => "hex color must have 3, 4, 6 or 8 digits",
            InvalidHexDigit => "invalid hex digit",
            InvalidFunction => "malformed color function",
            UnknownFormat => "unrecognized color format",
        })
    }
}

/// The error type for all fallible operations in this crate.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A channel or alpha was out of range, or a string could not be parsed as
    /// a color.
    #[error("invalid color value `{input}`: {reason}")]
    InvalidColorValue {
        /// The offending input, as written.
        input: String,
        /// What was wrong with it.
        reason: InvalidReason,
    },
}

impl Error {
    pub(crate) fn invalid(input: impl Into<String>, reason: InvalidReason) -> Self {
        Error::InvalidColorValue {
            input: input.into(),
            reason,
        }
    }

    /// Return the reason the value was rejected.
    pub fn reason(&self) -> InvalidReason {
        match self {
            Error::InvalidColorValue { reason, .. } => *reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_input_and_reason() {
        let err = Error::invalid("#12", InvalidReason::InvalidHexLength);
        assert_eq!(
            err.to_string(),
            "invalid color value `#12`: hex color must have 3, 4, 6 or 8 digits"
        );
        assert_eq!(err.reason(), InvalidReason::InvalidHexLength);
    }

    #[test]
    fn percentage_message_names_its_range() {
        let err = Error::invalid("hsl(0 120% 50%)", InvalidReason::PercentageOutOfRange);
        assert_eq!(
            err.to_string(),
            "invalid color value `hsl(0 120% 50%)`: percentage out of range 0..=100"
        );
    }
}
