//! Range registry: the numeric domain of every color channel.
//!
//! Each channel key maps to `[0, max]`:
//!
//! | key         | default max | behavior past the range |
//! |-------------|-------------|-------------------------|
//! | `r` `g` `b` | 255         | clamped                 |
//! | `h`         | 360         | wrapped modulo 360      |
//! | `s` `l`     | 100         | clamped                 |
//! | `a`         | 100 or 1    | clamped                 |
//!
//! Alpha is stored in the registry's alpha scale. The default
//! [`AlphaProfile::Percent`] uses `[0, 100]`; [`AlphaProfile::Unit`] uses
//! `[0, 1]`. Anything leaving the library (CSS strings, hex bytes)
//! converts by the factor `a / alpha_max`.
//!
//! # Process registry
//!
//! [`registry`] returns the table used by every conversion. It is set at
//! most once with [`install`] before the first conversion; afterwards it is
//! read-only and needs no locking.
//!
//! ```rust
//! use tinct_core::{registry, Channel};
//!
//! let ranges = registry();
//! assert_eq!(ranges.max(Channel::H), 360.0);
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// A channel key of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red.
    R,
    /// Green.
    G,
    /// Blue.
    B,
    /// Hue.
    H,
    /// Saturation.
    S,
    /// Lightness.
    L,
    /// Alpha.
    A,
}

impl Channel {
    /// All seven keys in registry order.
    pub const ALL: [Channel; 7] = [
        Channel::R,
        Channel::G,
        Channel::B,
        Channel::H,
        Channel::S,
        Channel::L,
        Channel::A,
    ];

    /// Single-letter key.
    pub fn key(self) -> &'static str {
        match self {
            Channel::R => "r",
            Channel::G => "g",
            Channel::B => "b",
            Channel::H => "h",
            Channel::S => "s",
            Channel::L => "l",
            Channel::A => "a",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Channel {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "r" => Ok(Channel::R),
            "g" => Ok(Channel::G),
            "b" => Ok(Channel::B),
            "h" => Ok(Channel::H),
            "s" => Ok(Channel::S),
            "l" => Ok(Channel::L),
            "a" => Ok(Channel::A),
            other => Err(CoreError::InvalidChannel(other.to_string())),
        }
    }
}

/// Closed interval `[min, max]` of one channel. `min` is always 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl ChannelRange {
    /// Decimal digits kept when rounding a fractional value of this range.
    ///
    /// Ranges up to 1 keep 3 digits, up to 10 keep 2, up to 100 keep 1,
    /// larger ranges round to integers.
    pub fn precision(&self) -> u32 {
        match self.max {
            m if m <= 1.0 => 3,
            m if m <= 10.0 => 2,
            m if m <= 100.0 => 1,
            _ => 0,
        }
    }
}

/// Which scale alpha is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphaProfile {
    /// `[0, 100]`.
    #[default]
    Percent,
    /// `[0, 1]`.
    Unit,
}

impl AlphaProfile {
    /// Maximum alpha value of this profile.
    pub fn max(self) -> f64 {
        match self {
            AlphaProfile::Percent => 100.0,
            AlphaProfile::Unit => 1.0,
        }
    }
}

/// Immutable table of channel maxima.
///
/// Every constructor validates, so a `Ranges` value always holds
/// positive integer maxima.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranges {
    rgb: f64,
    h: f64,
    s: f64,
    l: f64,
    a: f64,
}

impl Ranges {
    /// 255 / 360 / 100 / 100 with percent alpha.
    pub const DEFAULT: Ranges = Ranges {
        rgb: 255.0,
        h: 360.0,
        s: 100.0,
        l: 100.0,
        a: 100.0,
    };

    /// Default maxima with alpha in `[0, 1]`.
    pub const UNIT_ALPHA: Ranges = Ranges {
        a: 1.0,
        ..Ranges::DEFAULT
    };

    /// Builds a table, failing fast on any maximum that is not a positive
    /// integer.
    pub fn new(rgb: f64, h: f64, s: f64, l: f64, a: f64) -> CoreResult<Self> {
        Ok(Self {
            rgb: check("rgb", rgb)?,
            h: check("h", h)?,
            s: check("s", s)?,
            l: check("l", l)?,
            a: check("a", a)?,
        })
    }

    /// Default maxima with the given alpha profile.
    pub fn with_alpha(profile: AlphaProfile) -> Self {
        Self {
            a: profile.max(),
            ..Self::DEFAULT
        }
    }

    /// Maximum shared by `r`, `g` and `b`.
    pub fn rgb(&self) -> f64 {
        self.rgb
    }

    /// Hue period.
    pub fn hue(&self) -> f64 {
        self.h
    }

    /// Saturation maximum.
    pub fn saturation(&self) -> f64 {
        self.s
    }

    /// Lightness maximum.
    pub fn lightness(&self) -> f64 {
        self.l
    }

    /// Alpha maximum (fully opaque).
    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// Maximum of a channel.
    pub fn max(&self, channel: Channel) -> f64 {
        match channel {
            Channel::R | Channel::G | Channel::B => self.rgb,
            Channel::H => self.h,
            Channel::S => self.s,
            Channel::L => self.l,
            Channel::A => self.a,
        }
    }

    /// Range of a channel.
    pub fn range(&self, channel: Channel) -> ChannelRange {
        ChannelRange {
            min: 0.0,
            max: self.max(channel),
        }
    }

    /// Range of a channel given by its key.
    ///
    /// Unknown keys fail with [`CoreError::InvalidChannel`].
    pub fn range_of(&self, key: &str) -> CoreResult<ChannelRange> {
        Ok(self.range(key.parse()?))
    }

    /// Parses a YAML range file.
    ///
    /// Keys are optional and default to [`Ranges::DEFAULT`]:
    ///
    /// ```yaml
    /// rgb: 255
    /// h: 360
    /// s: 100
    /// l: 100
    /// alpha: unit   # or `a: 1`
    /// ```
    pub fn from_yaml_str(yaml: &str) -> CoreResult<Self> {
        let raw: RangeFile = serde_yaml::from_str(yaml)?;
        raw.into_ranges()
    }

    /// Reads and parses a YAML range file.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }
}

impl Default for Ranges {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn check(channel: &'static str, value: f64) -> CoreResult<f64> {
    let reason = if !value.is_finite() {
        "not a finite number"
    } else if value.fract() != 0.0 {
        "not an integer"
    } else if value <= 0.0 {
        "must be greater than zero"
    } else {
        return Ok(value);
    };
    Err(CoreError::InvalidRange {
        channel,
        value,
        reason,
    })
}

/// On-disk shape of a range file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RangeFile {
    rgb: Option<f64>,
    h: Option<f64>,
    s: Option<f64>,
    l: Option<f64>,
    a: Option<f64>,
    alpha: Option<AlphaProfile>,
}

impl RangeFile {
    fn into_ranges(self) -> CoreResult<Ranges> {
        let d = Ranges::DEFAULT;
        let a = match (self.a, self.alpha) {
            (Some(a), _) => a,
            (None, Some(profile)) => profile.max(),
            (None, None) => d.a,
        };
        Ranges::new(
            self.rgb.unwrap_or(d.rgb),
            self.h.unwrap_or(d.h),
            self.s.unwrap_or(d.s),
            self.l.unwrap_or(d.l),
            a,
        )
    }
}

static REGISTRY: OnceLock<Ranges> = OnceLock::new();

/// Installs the process-wide range table.
///
/// Must run before the first conversion. Fails with
/// [`CoreError::AlreadyInstalled`] once the registry holds a value,
/// including the default filled in by an earlier [`registry`] call.
pub fn install(ranges: Ranges) -> CoreResult<()> {
    REGISTRY
        .set(ranges)
        .map_err(|_| CoreError::AlreadyInstalled)
}

/// The process-wide range table, [`Ranges::DEFAULT`] unless
/// [`install`] ran first.
pub fn registry() -> &'static Ranges {
    REGISTRY.get_or_init(|| Ranges::DEFAULT)
}

/// Range of a channel key in the process registry.
///
/// ```rust
/// use tinct_core::range_of;
///
/// assert_eq!(range_of("r").unwrap().max, 255.0);
/// assert!(range_of("x").is_err());
/// ```
pub fn range_of(key: &str) -> CoreResult<ChannelRange> {
    registry().range_of(key)
}
