// Copyright 2026 chroma-core contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! String parsing for [`Rgba8`].
//!
//! Three grammars are accepted, tried in order, first match wins:
//!
//! 1. Hex with a `#` or `0x`/`0X` prefix: digits group into 2-digit
//!    channels consumed left-to-right as `RRGGBB[AA]`. A trailing lone
//!    digit is the low nibble of its channel; more than 8 digits truncate
//!    to 8. Channels not covered by the input stay 0, alpha stays 255.
//! 2. Comma-separated decimal `r,g,b[,a]`.
//! 3. Anything else: [`Rgba8::parse`] falls back to the opaque-white
//!    sentinel without raising; [`Rgba8::try_parse`] reports a
//!    [`ColorParseError`].

use crate::color::rgba8::Rgba8;
use std::fmt;
use std::str::FromStr;

/// An error produced when a color string matches none of the accepted
/// grammars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input was empty after trimming whitespace.
    Empty,
    /// A character after a recognized hex prefix was not a hex digit.
    InvalidHexDigit(char),
    /// A comma-separated component was not an integer in channel range.
    InvalidDecimalComponent(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::Empty => {
                write!(f, "Empty color string")
            }
            ColorParseError::InvalidHexDigit(c) => {
                write!(f, "Invalid hex digit '{c}' in color string")
            }
            ColorParseError::InvalidDecimalComponent(token) => {
                write!(f, "Invalid decimal component '{token}' in color string")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

impl Rgba8 {
    /// Parses a color string, falling back to the opaque-white sentinel
    /// ([`Rgba8::WHITE`]) on any malformed input.
    ///
    /// This is the legacy "fails soft" contract: no error ever reaches the
    /// caller. Use [`Rgba8::try_parse`] (or [`str::parse`]) when the
    /// failure needs to be observed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_core::Rgba8;
    /// assert_eq!(Rgba8::parse("#FF0000"), Rgba8::new(255, 0, 0, 255));
    /// assert_eq!(Rgba8::parse("0,0,0"), Rgba8::new(0, 0, 0, 255));
    /// assert_eq!(Rgba8::parse("not a color"), Rgba8::WHITE);
    /// ```
    pub fn parse(input: &str) -> Rgba8 {
        match Self::try_parse(input) {
            Ok(color) => color,
            Err(err) => {
                log::trace!("color parse failed ({err}); using opaque white");
                Rgba8::WHITE
            }
        }
    }

    /// Parses a color string, reporting malformed input as a
    /// [`ColorParseError`].
    ///
    /// Leading and trailing spaces, tabs, newlines, and carriage returns
    /// are trimmed and the input is lower-cased before prefix detection,
    /// so `0X` works as a hex prefix.
    pub fn try_parse(input: &str) -> Result<Rgba8, ColorParseError> {
        let trimmed = input.trim_matches(['\t', '\n', '\r', ' ']);
        let lowered = trimmed.to_lowercase();
        if lowered.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(digits) = lowered.strip_prefix('#') {
            parse_hex(digits)
        } else if let Some(digits) = lowered.strip_prefix("0x") {
            parse_hex(digits)
        } else {
            parse_decimal(&lowered)
        }
    }
}

impl FromStr for Rgba8 {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba8::try_parse(s)
    }
}

/// Decodes one lower-case hex digit.
#[inline]
fn nibble(digit: u8) -> Result<u8, ColorParseError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        _ => Err(ColorParseError::InvalidHexDigit(digit as char)),
    }
}

/// Parses the digits after a hex prefix into channels, left to right.
///
/// Channels start from `[0, 0, 0, 255]`; each 2-digit group overwrites the
/// next channel in R, G, B, A order. An odd digit count leaves a trailing
/// lone digit, which becomes the low nibble of its channel. Inputs longer
/// than 8 digits are truncated to the first 8, which also disables the
/// lone-digit rule (the input is treated as already channel-aligned).
fn parse_hex(digits: &str) -> Result<Rgba8, ColorParseError> {
    let bytes = digits.as_bytes();
    let bytes = if bytes.len() > 8 { &bytes[..8] } else { bytes };

    let mut channels = [0x00, 0x00, 0x00, 0xFF];
    let mut i = 0;
    while i < bytes.len() {
        let hi = nibble(bytes[i])?;
        channels[i / 2] = if i + 1 < bytes.len() {
            (hi << 4) | nibble(bytes[i + 1])?
        } else {
            hi
        };
        i += 2;
    }
    Ok(Rgba8::from_array(channels))
}

/// Parses comma-separated decimal components into channels.
///
/// Missing trailing components keep their defaults: 0 for the color
/// channels and the literal 255 for alpha (which for 8-bit channels
/// coincides with the channel maximum). Components past the fourth are
/// ignored.
fn parse_decimal(input: &str) -> Result<Rgba8, ColorParseError> {
    let mut channels = [0, 0, 0, 255];
    for (slot, token) in channels.iter_mut().zip(input.split(',')) {
        let token = token.trim();
        *slot = token
            .parse::<u8>()
            .map_err(|_| ColorParseError::InvalidDecimalComponent(token.to_string()))?;
    }
    Ok(Rgba8::from_array(channels))
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_full_rgb() {
        assert_eq!(Rgba8::parse("#FF0000"), Rgba8::new(255, 0, 0, 255));
        assert_eq!(Rgba8::parse("#06a49b"), Rgba8::new(0x06, 0xA4, 0x9B, 255));
    }

    #[test]
    fn test_hex_full_rgba() {
        assert_eq!(
            Rgba8::parse("#06a49b99"),
            Rgba8::new(0x06, 0xA4, 0x9B, 0x99)
        );
    }

    #[test]
    fn test_hex_0x_prefix() {
        assert_eq!(Rgba8::parse("0xFF0000"), Rgba8::new(255, 0, 0, 255));
        assert_eq!(Rgba8::parse("0X11223344"), Rgba8::new(0x11, 0x22, 0x33, 0x44));
    }

    #[test]
    fn test_hex_digit_counts_exhaustive() {
        // One case per digit count, 0 through 8. A trailing lone digit is
        // the low nibble of its channel; untouched channels stay 0 and
        // alpha stays 255.
        assert_eq!(Rgba8::parse("#"), Rgba8::new(0, 0, 0, 255));
        assert_eq!(Rgba8::parse("#5"), Rgba8::new(0x05, 0, 0, 255));
        assert_eq!(Rgba8::parse("#5a"), Rgba8::new(0x5A, 0, 0, 255));
        assert_eq!(Rgba8::parse("#f00"), Rgba8::new(0xF0, 0x00, 0, 255));
        assert_eq!(Rgba8::parse("#f00d"), Rgba8::new(0xF0, 0x0D, 0, 255));
        assert_eq!(Rgba8::parse("#f00d1"), Rgba8::new(0xF0, 0x0D, 0x01, 255));
        assert_eq!(Rgba8::parse("#f00d11"), Rgba8::new(0xF0, 0x0D, 0x11, 255));
        assert_eq!(Rgba8::parse("#f00d112"), Rgba8::new(0xF0, 0x0D, 0x11, 0x02));
        assert_eq!(Rgba8::parse("#f00d1122"), Rgba8::new(0xF0, 0x0D, 0x11, 0x22));
    }

    #[test]
    fn test_hex_truncates_past_eight_digits() {
        // Digits past the eighth are dropped, including a would-be lone
        // ninth digit.
        assert_eq!(
            Rgba8::parse("#112233445"),
            Rgba8::new(0x11, 0x22, 0x33, 0x44)
        );
        assert_eq!(
            Rgba8::parse("#1122334455667788"),
            Rgba8::new(0x11, 0x22, 0x33, 0x44)
        );
    }

    #[test]
    fn test_hex_case_insensitive_and_whitespace() {
        assert_eq!(Rgba8::parse(" \t#AbCdEf\n\r"), Rgba8::new(0xAB, 0xCD, 0xEF, 255));
    }

    #[test]
    fn test_hex_invalid_digit_is_error() {
        assert_eq!(
            Rgba8::try_parse("#12zz34"),
            Err(ColorParseError::InvalidHexDigit('z'))
        );
    }

    #[test]
    fn test_decimal_rgb_defaults_alpha() {
        assert_eq!(Rgba8::parse("0,0,0"), Rgba8::new(0, 0, 0, 255));
        assert_eq!(Rgba8::parse("12, 34, 56"), Rgba8::new(12, 34, 56, 255));
    }

    #[test]
    fn test_decimal_rgba() {
        assert_eq!(Rgba8::parse("12,34,56,78"), Rgba8::new(12, 34, 56, 78));
    }

    #[test]
    fn test_decimal_partial_components() {
        assert_eq!(Rgba8::parse("128"), Rgba8::new(128, 0, 0, 255));
        assert_eq!(Rgba8::parse("128,64"), Rgba8::new(128, 64, 0, 255));
    }

    #[test]
    fn test_decimal_out_of_range_is_error() {
        assert_eq!(
            Rgba8::try_parse("256,0,0"),
            Err(ColorParseError::InvalidDecimalComponent("256".into()))
        );
    }

    #[test]
    fn test_sentinel_on_malformed_input() {
        // The silent-failure contract: every unrecognized input maps to
        // opaque white.
        assert_eq!(Rgba8::parse("not a color"), Rgba8::new(255, 255, 255, 255));
        assert_eq!(Rgba8::parse(""), Rgba8::WHITE);
        assert_eq!(Rgba8::parse("#12zz34"), Rgba8::WHITE);
        assert_eq!(Rgba8::parse("1,2,x"), Rgba8::WHITE);
        assert_eq!(Rgba8::parse("300,0,0"), Rgba8::WHITE);
    }

    #[test]
    fn test_try_parse_reports_errors() {
        assert_eq!(Rgba8::try_parse(""), Err(ColorParseError::Empty));
        assert_eq!(Rgba8::try_parse("  \t "), Err(ColorParseError::Empty));
        assert!(Rgba8::try_parse("nope").is_err());
        assert_eq!(Rgba8::try_parse("#ff0000"), Ok(Rgba8::RED));
    }

    #[test]
    fn test_from_str_round_trips_to_hex() {
        let color: Rgba8 = "#06A49B99".parse().unwrap();
        assert_eq!(color.to_hex(), "#06A49B99");
    }
}
