//! # Color Utilities
//!
//! Parsing and formatting of `#rgb` / `#rrggbb` hex colors as used by theme files.

use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

/// Parse a `#rgb` or `#rrggbb` color. The leading `#` is optional.
pub fn parse_hex(input: &str) -> Result<Rgb, Error> {
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex(input.to_string()));
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| Error::InvalidHex(input.to_string()));

    match digits.len() {
        3 => {
            // #abc expands to #aabbcc
            let expand = |i: usize| channel(&digits[i..=i].repeat(2));
            Ok(Rgb::new(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Ok(Rgb::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => Err(Error::InvalidLength(input.to_string())),
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidHex(String),
    InvalidLength(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
