//! Color value types.
//!
//! - [`Rgb`] - device-space red/green/blue with alpha
//! - [`Hsl`] - cylindrical hue/saturation/lightness with alpha
//! - [`Hex`] - `#RRGGBB[AA]` text, always derived from or parsed into RGB
//! - [`Color`] - tagged union over the three
//!
//! Values are plain `Copy`/`Clone` data. They may hold out-of-range
//! channels between construction and constraining; `tinct-color` provides
//! `constrain` to bring them back into the [`registry`](crate::registry)
//! ranges.
//!
//! ```rust
//! use tinct_core::{Color, ColorKind, Rgb};
//!
//! let c = Color::from(Rgb::new(255.0, 0.0, 0.0));
//! assert_eq!(c.kind(), ColorKind::Rgb);
//! assert_eq!(c.as_rgb().unwrap().a, 100.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::range::registry;

/// Red, green, blue and alpha in registry ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red, `[0, 255]`.
    pub r: f64,
    /// Green, `[0, 255]`.
    pub g: f64,
    /// Blue, `[0, 255]`.
    pub b: f64,
    /// Alpha, `[0, alpha max]`. Defaults to fully opaque.
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    registry().alpha()
}

impl Rgb {
    /// Opaque color.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: opaque() }
    }

    /// Color with explicit alpha.
    pub fn with_alpha(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray with all three channels set to `v`.
    pub fn gray(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Builds from a channel slice.
    ///
    /// A single value is broadcast like [`Rgb::gray`]. Otherwise missing
    /// entries are 0 and index 3, when present, is alpha.
    pub fn from_slice(values: &[f64]) -> Self {
        match values {
            [] => Self::default(),
            [v] => Self::gray(*v),
            _ => {
                let at = |i: usize| values.get(i).copied().unwrap_or(0.0);
                Self {
                    r: at(0),
                    g: at(1),
                    b: at(2),
                    a: values.get(3).copied().unwrap_or_else(opaque),
                }
            }
        }
    }

    /// Channels as `[r, g, b]`.
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// True when alpha equals the registry's opaque value.
    pub fn is_opaque(&self) -> bool {
        self.a == opaque()
    }
}

impl Default for Rgb {
    /// Opaque black.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Hue, saturation, lightness and alpha in registry ranges.
///
/// Hue is circular: out-of-range values wrap, they are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation, `[0, 100]`.
    pub s: f64,
    /// Lightness, `[0, 100]`.
    pub l: f64,
    /// Alpha, `[0, alpha max]`. Defaults to fully opaque.
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Hsl {
    /// Opaque color.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: opaque() }
    }

    /// Color with explicit alpha.
    pub fn with_alpha(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// True when alpha equals the registry's opaque value.
    pub fn is_opaque(&self) -> bool {
        self.a == opaque()
    }
}

impl Default for Hsl {
    /// Opaque black, all channels zero.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Validated hex color text: `#` followed by 3, 4, 6 or 8 hex digits.
///
/// The text is kept as written so formatting a parsed hex returns it
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hex(String);

impl Hex {
    /// Validates hex color text.
    ///
    /// ```rust
    /// use tinct_core::Hex;
    ///
    /// assert!(Hex::parse("#f0c").is_ok());
    /// assert!(Hex::parse("#ff00cc80").is_ok());
    /// assert!(Hex::parse("ff00cc").is_err());
    /// assert!(Hex::parse("#ff00c").is_err());
    /// ```
    pub fn parse(text: &str) -> CoreResult<Self> {
        if is_hex_str(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(CoreError::InvalidHex(text.to_string()))
        }
    }

    /// Encodes bytes as lowercase `#rrggbb`, or `#rrggbbaa` when an alpha
    /// byte is given.
    pub fn from_bytes(r: u8, g: u8, b: u8, a: Option<u8>) -> Self {
        match a {
            Some(a) => Self(format!("#{r:02x}{g:02x}{b:02x}{a:02x}")),
            None => Self(format!("#{r:02x}{g:02x}{b:02x}")),
        }
    }

    /// Decodes to `[r, g, b]` bytes plus the alpha byte if present.
    ///
    /// Short forms expand each nibble by duplication: `#f0c` reads as
    /// `#ff00cc`.
    pub fn bytes(&self) -> ([u8; 3], Option<u8>) {
        let digits = &self.0.as_bytes()[1..];
        let nibble = |i: usize| hex_value(digits[i]);
        let pair = |i: usize| (nibble(i) << 4) | nibble(i + 1);
        match digits.len() {
            3 | 4 => {
                let short = |i: usize| nibble(i) * 17;
                let a = (digits.len() == 4).then(|| short(3));
                ([short(0), short(1), short(2)], a)
            }
            _ => {
                let a = (digits.len() == 8).then(|| pair(6));
                ([pair(0), pair(2), pair(4)], a)
            }
        }
    }

    /// The text as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Hex {
    /// `#000000`.
    fn default() -> Self {
        Self::from_bytes(0, 0, 0, None)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Hex {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Hex {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        if is_hex_str(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidHex(value))
        }
    }
}

impl From<Hex> for String {
    fn from(hex: Hex) -> Self {
        hex.0
    }
}

impl AsRef<str> for Hex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// True for `#` followed by 3, 4, 6 or 8 hex digits.
pub fn is_hex_str(text: &str) -> bool {
    matches!(text.len(), 4 | 5 | 7 | 9)
        && text.starts_with('#')
        && text[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

/// Discriminant of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    /// [`Rgb`].
    #[default]
    Rgb,
    /// [`Hsl`].
    Hsl,
    /// [`Hex`].
    Hex,
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorKind::Rgb => "rgb",
            ColorKind::Hsl => "hsl",
            ColorKind::Hex => "hex",
        })
    }
}

impl FromStr for ColorKind {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorKind::Rgb),
            "hsl" => Ok(ColorKind::Hsl),
            "hex" => Ok(ColorKind::Hex),
            _ => Err(CoreError::InvalidKind(s.to_string())),
        }
    }
}

/// A color in one of the three representations.
///
/// The tag is fixed at construction; nothing is inferred from field
/// shapes once a value is a `Color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Color {
    /// RGB value.
    Rgb(Rgb),
    /// HSL value.
    Hsl(Hsl),
    /// Hex text.
    Hex(Hex),
}

impl Color {
    /// Which variant this is.
    pub fn kind(&self) -> ColorKind {
        match self {
            Color::Rgb(_) => ColorKind::Rgb,
            Color::Hsl(_) => ColorKind::Hsl,
            Color::Hex(_) => ColorKind::Hex,
        }
    }

    /// True for [`Color::Rgb`].
    pub fn is_rgb(&self) -> bool {
        matches!(self, Color::Rgb(_))
    }

    /// True for [`Color::Hsl`].
    pub fn is_hsl(&self) -> bool {
        matches!(self, Color::Hsl(_))
    }

    /// True for [`Color::Hex`].
    pub fn is_hex(&self) -> bool {
        matches!(self, Color::Hex(_))
    }

    /// The RGB payload, if this is RGB.
    pub fn as_rgb(&self) -> Option<&Rgb> {
        match self {
            Color::Rgb(rgb) => Some(rgb),
            _ => None,
        }
    }

    /// The HSL payload, if this is HSL.
    pub fn as_hsl(&self) -> Option<&Hsl> {
        match self {
            Color::Hsl(hsl) => Some(hsl),
            _ => None,
        }
    }

    /// The hex payload, if this is hex.
    pub fn as_hex(&self) -> Option<&Hex> {
        match self {
            Color::Hex(hex) => Some(hex),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Rgb(Rgb::default())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Color::Hsl(hsl)
    }
}

impl From<Hex> for Color {
    fn from(hex: Hex) -> Self {
        Color::Hex(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_constructors() {
        assert_eq!(Rgb::default(), Rgb::with_alpha(0.0, 0.0, 0.0, 100.0));
        assert_eq!(Rgb::gray(42.0), Rgb::new(42.0, 42.0, 42.0));
        assert_eq!(Rgb::from_slice(&[7.0]), Rgb::gray(7.0));
        assert_eq!(Rgb::from_slice(&[1.0, 2.0]), Rgb::new(1.0, 2.0, 0.0));
        assert_eq!(
            Rgb::from_slice(&[1.0, 2.0, 3.0, 50.0]),
            Rgb::with_alpha(1.0, 2.0, 3.0, 50.0)
        );
        assert!(Rgb::new(1.0, 2.0, 3.0).is_opaque());
        assert!(!Rgb::with_alpha(1.0, 2.0, 3.0, 0.5).is_opaque());
    }

    #[test]
    fn hsl_defaults() {
        let hsl = Hsl::default();
        assert_eq!((hsl.h, hsl.s, hsl.l, hsl.a), (0.0, 0.0, 0.0, 100.0));
    }

    #[test]
    fn hex_validation() {
        for ok in ["#000", "#f0cA", "#00ff00", "#00FF0080"] {
            assert!(is_hex_str(ok), "{ok}");
        }
        for bad in ["", "#", "#12", "#12345", "#1234567", "000000", "#gg0000", "#ff00cc8000"] {
            assert!(!is_hex_str(bad), "{bad}");
        }
        assert!(matches!(Hex::parse("nope"), Err(CoreError::InvalidHex(_))));
    }

    #[test]
    fn hex_bytes() {
        assert_eq!(Hex::parse("#f0c").unwrap().bytes(), ([255, 0, 204], None));
        assert_eq!(Hex::parse("#00f8").unwrap().bytes(), ([0, 0, 255], Some(136)));
        assert_eq!(Hex::parse("#12AbEf").unwrap().bytes(), ([0x12, 0xab, 0xef], None));
        assert_eq!(
            Hex::parse("#ff000080").unwrap().bytes(),
            ([255, 0, 0], Some(0x80))
        );
    }

    #[test]
    fn hex_from_bytes() {
        assert_eq!(Hex::from_bytes(255, 0, 0, None).as_str(), "#ff0000");
        assert_eq!(Hex::from_bytes(1, 2, 3, Some(4)).as_str(), "#01020304");
        assert_eq!(Hex::default().as_str(), "#000000");
    }

    #[test]
    fn hex_kept_verbatim() {
        assert_eq!(Hex::parse("#F0C").unwrap().to_string(), "#F0C");
    }

    #[test]
    fn color_tags() {
        let c: Color = Hsl::new(120.0, 100.0, 50.0).into();
        assert_eq!(c.kind(), ColorKind::Hsl);
        assert!(c.is_hsl() && !c.is_rgb() && !c.is_hex());
        assert!(c.as_rgb().is_none());
        assert_eq!(Color::default().kind(), ColorKind::Rgb);
        assert_eq!("HEX".parse::<ColorKind>().unwrap(), ColorKind::Hex);
    }

    #[test]
    fn serde_shapes() {
        let c = Color::Rgb(Rgb::new(1.0, 2.0, 3.0));
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["kind"], "rgb");
        assert_eq!(json["value"]["a"], 100.0);

        let hex: Color = serde_json::from_str(r##"{"kind":"hex","value":"#0f0"}"##).unwrap();
        assert_eq!(hex.as_hex().unwrap().as_str(), "#0f0");

        let rgb: Rgb = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
        assert_eq!(rgb.a, 100.0);
        assert!(serde_json::from_str::<Hex>(r##""#zz""##).is_err());
    }
}
