//! Parse CSS-like color notations into a [`Color`].
//!
//! Supported notations (case-insensitive, surrounding whitespace ignored):
//! * `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, with or without the `#`
//! * `rgb()` / `rgba()` with integer or percentage channels
//! * `hsl()` / `hsla()`
//! * `hwb()`
//! * the sixteen CSS basic named colors
//!
//! Functions take comma separated arguments (`rgb(255, 0, 0, 0.5)`) or space
//! separated arguments with an optional slash before the alpha
//! (`rgb(255 0 0 / 50%)`).

use std::str::FromStr;

use crate::{
    color::{Color, Component},
    error::{Error, InvalidReason},
    models::{Hsl, Hwb, Model},
};

use InvalidReason::*;

const NAMED_COLORS: [(&str, [u8; 3]); 16] = [
    ("black", [0x00, 0x00, 0x00]),
    ("silver", [0xc0, 0xc0, 0xc0]),
    ("gray", [0x80, 0x80, 0x80]),
    ("white", [0xff, 0xff, 0xff]),
    ("maroon", [0x80, 0x00, 0x00]),
    ("red", [0xff, 0x00, 0x00]),
    ("purple", [0x80, 0x00, 0x80]),
    ("fuchsia", [0xff, 0x00, 0xff]),
    ("green", [0x00, 0x80, 0x00]),
    ("lime", [0x00, 0xff, 0x00]),
    ("olive", [0x80, 0x80, 0x00]),
    ("yellow", [0xff, 0xff, 0x00]),
    ("navy", [0x00, 0x00, 0x80]),
    ("blue", [0x00, 0x00, 0xff]),
    ("teal", [0x00, 0x80, 0x80]),
    ("aqua", [0x00, 0xff, 0xff]),
];

/// Parse a color from a string in any of the supported notations.
pub fn parse_color(input: &str) -> Result<Color, Error> {
    let trimmed = input.trim();

    parse_trimmed(trimmed)
        .inspect(|color| log::trace!("parsed `{trimmed}` as {color}"))
        .map_err(|reason| {
            log::debug!("could not parse `{trimmed}`: {reason}");
            Error::invalid(trimmed, reason)
        })
}

fn parse_trimmed(s: &str) -> Result<Color, InvalidReason> {
    if s.is_empty() {
        return Err(Empty);
    }

    let lower = s.to_ascii_lowercase();

    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some((name, args)) = split_function(&lower) {
        return match name {
            "rgb" | "rgba" => parse_rgb(args),
            "hsl" | "hsla" => parse_hsl(args),
            "hwb" => parse_hwb(args),
            _ => Err(InvalidFunction),
        };
    }

    if let Some((_, [red, green, blue])) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
        return Ok(Color::new(*red, *green, *blue));
    }

    // A bare hex color, e.g. "ff8800".
    if lower.bytes().all(|b| b.is_ascii_hexdigit()) {
        return parse_hex(&lower);
    }

    Err(UnknownFormat)
}

/// Parse the digits of a hex color (without the `#`).
fn parse_hex(hex: &str) -> Result<Color, InvalidReason> {
    let nibble = |c: u8| -> Result<u8, InvalidReason> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(InvalidHexDigit),
        }
    };

    let bytes = hex.as_bytes();
    let digits = bytes
        .iter()
        .map(|b| nibble(*b))
        .collect::<Result<Vec<_>, _>>();

    let channels: Vec<u8> = match bytes.len() {
        // #rgb, #rgba
        3 | 4 => digits?.into_iter().map(|d| d * 17).collect(),
        // #rrggbb, #rrggbbaa
        6 | 8 => digits?.chunks(2).map(|pair| pair[0] << 4 | pair[1]).collect(),
        _ => return Err(InvalidHexLength),
    };

    let color = Color::new(channels[0], channels[1], channels[2]);
    match channels.get(3) {
        Some(alpha) => with_alpha(color, Some(*alpha as Component / 255.0)),
        None => Ok(color),
    }
}

/// Split `name(args)` into its name and arguments.
fn split_function(s: &str) -> Option<(&str, &str)> {
    let (name, rest) = s.split_once('(')?;
    let args = rest.strip_suffix(')')?;
    Some((name.trim_end(), args))
}

/// Split function arguments into exactly three components and an optional
/// alpha.
fn split_args(args: &str) -> Result<([&str; 3], Option<&str>), InvalidReason> {
    let (main, slash_alpha) = match args.split_once('/') {
        Some((main, alpha)) => (main, Some(alpha.trim())),
        None => (args, None),
    };

    let tokens: Vec<&str> = if main.contains(',') {
        if slash_alpha.is_some() {
            return Err(InvalidFunction);
        }
        main.split(',').map(str::trim).collect()
    } else {
        main.split_whitespace().collect()
    };

    match (tokens.as_slice(), slash_alpha) {
        ([a, b, c], alpha) => Ok(([*a, *b, *c], alpha)),
        ([a, b, c, alpha], None) if main.contains(',') => Ok(([*a, *b, *c], Some(*alpha))),
        _ => Err(InvalidFunction),
    }
}

fn parse_number(token: &str) -> Result<Component, InvalidReason> {
    token
        .parse::<Component>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(InvalidFunction)
}

/// Parse a percentage (`"50%"`) or a bare number in `0..=100` into
/// `[0.0, 1.0]`.
fn parse_percentage(token: &str) -> Result<Component, InvalidReason> {
    let value = parse_number(token.strip_suffix('%').unwrap_or(token))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(PercentageOutOfRange);
    }
    Ok(value / 100.0)
}

/// Parse an 8-bit channel given as a number in `0..=255` or a percentage.
fn parse_channel(token: &str) -> Result<u8, InvalidReason> {
    let value = match token.strip_suffix('%') {
        Some(_) => parse_percentage(token)? * 255.0,
        None => parse_number(token)?,
    };

    if !(0.0..=255.0).contains(&value) {
        return Err(ChannelOutOfRange);
    }
    Ok(value.round() as u8)
}

/// Parse an alpha given as a number in `0..=1` or a percentage.
fn parse_alpha(token: &str) -> Result<Component, InvalidReason> {
    let value = match token.strip_suffix('%') {
        Some(percent) => parse_number(percent)? / 100.0,
        None => parse_number(token)?,
    };

    if !(0.0..=1.0).contains(&value) {
        return Err(AlphaOutOfRange);
    }
    Ok(value)
}

/// Parse a hue in degrees. Accepts the `deg`, `grad`, `rad` and `turn` units.
fn parse_hue(token: &str) -> Result<Component, InvalidReason> {
    const UNITS: [(&str, Component); 4] = [
        ("deg", 1.0),
        ("grad", 0.9),
        ("rad", 180.0 / std::f64::consts::PI as Component),
        ("turn", 360.0),
    ];

    // "grad" ends with "rad", so it has to be checked first.
    for (unit, degrees) in UNITS {
        if let Some(value) = token.strip_suffix(unit) {
            return Ok(parse_number(value)? * degrees);
        }
    }

    parse_number(token)
}

fn with_alpha(color: Color, alpha: Option<Component>) -> Result<Color, InvalidReason> {
    match alpha {
        Some(alpha) => color.with_alpha(alpha).map_err(|err| err.reason()),
        None => Ok(color),
    }
}

fn parse_rgb(args: &str) -> Result<Color, InvalidReason> {
    let ([red, green, blue], alpha) = split_args(args)?;

    let color = Color::new(
        parse_channel(red)?,
        parse_channel(green)?,
        parse_channel(blue)?,
    );

    with_alpha(color, alpha.map(parse_alpha).transpose()?)
}

fn parse_hsl(args: &str) -> Result<Color, InvalidReason> {
    let ([hue, saturation, lightness], alpha) = split_args(args)?;

    Hsl::new(
        parse_hue(hue)?,
        parse_percentage(saturation)?,
        parse_percentage(lightness)?,
    )
    .to_color(alpha.map(parse_alpha).transpose()?)
    .map_err(|err| err.reason())
}

fn parse_hwb(args: &str) -> Result<Color, InvalidReason> {
    let ([hue, whiteness, blackness], alpha) = split_args(args)?;

    Hwb::new(
        parse_hue(hue)?,
        parse_percentage(whiteness)?,
        parse_percentage(blackness)?,
    )
    .to_color(alpha.map(parse_alpha).transpose()?)
    .map_err(|err| err.reason())
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
