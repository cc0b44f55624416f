//! Structural validators for loosely typed input.
//!
//! Colors coming from outside (JSON payloads, UI bindings) are classified
//! by shape before they become a tagged [`Color`]:
//!
//! - RGB: an object with numeric `r`, `g`, `b`
//! - HSL: an object with numeric `h`, `s`, `l`
//! - HEX: a string passing [`is_hex_str`]
//!
//! The predicates never fail; anything unrecognized is simply `false`.
//!
//! ```rust
//! use serde_json::json;
//! use tinct_core::{is_color, is_hex, is_rgb};
//!
//! assert!(is_rgb(&json!({"r": 255, "g": 0, "b": 0})));
//! assert!(is_hex(&json!("#f0c")));
//! assert!(!is_color(&json!([1, 2, 3])));
//! ```

use serde_json::{Map, Value};

use crate::color::{is_hex_str, Color, Hex, Hsl, Rgb};
use crate::range::registry;

/// True for an object with numeric `r`, `g` and `b`.
pub fn is_rgb(value: &Value) -> bool {
    numeric_fields(value, ["r", "g", "b"]).is_some()
}

/// True for an object with numeric `h`, `s` and `l`.
pub fn is_hsl(value: &Value) -> bool {
    numeric_fields(value, ["h", "s", "l"]).is_some()
}

/// True for a string of `#` plus 3, 4, 6 or 8 hex digits.
pub fn is_hex(value: &Value) -> bool {
    value.as_str().is_some_and(is_hex_str)
}

/// True when any of [`is_rgb`], [`is_hsl`] or [`is_hex`] holds.
pub fn is_color(value: &Value) -> bool {
    is_rgb(value) || is_hsl(value) || is_hex(value)
}

fn numeric_fields<'a>(
    value: &'a Value,
    keys: [&str; 3],
) -> Option<(&'a Map<String, Value>, [f64; 3])> {
    let object = value.as_object()?;
    let mut out = [0.0; 3];
    for (slot, key) in out.iter_mut().zip(keys) {
        *slot = object.get(key)?.as_f64()?;
    }
    Some((object, out))
}

fn alpha_of(object: &Map<String, Value>) -> f64 {
    object
        .get("a")
        .and_then(Value::as_f64)
        .unwrap_or_else(|| registry().alpha())
}

impl Color {
    /// Classifies loosely typed input into a tagged color.
    ///
    /// RGB shape is checked first, then HSL, then hex, so an object
    /// carrying both channel sets is read as RGB. A missing or
    /// non-numeric `a` means fully opaque. Returns `None` for anything
    /// else.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use tinct_core::{Color, ColorKind};
    ///
    /// let c = Color::from_value(&json!({"h": 120, "s": 100, "l": 50})).unwrap();
    /// assert_eq!(c.kind(), ColorKind::Hsl);
    /// ```
    pub fn from_value(value: &Value) -> Option<Color> {
        if let Some((object, [r, g, b])) = numeric_fields(value, ["r", "g", "b"]) {
            return Some(Color::Rgb(Rgb::with_alpha(r, g, b, alpha_of(object))));
        }
        if let Some((object, [h, s, l])) = numeric_fields(value, ["h", "s", "l"]) {
            return Some(Color::Hsl(Hsl::with_alpha(h, s, l, alpha_of(object))));
        }
        value
            .as_str()
            .and_then(|text| Hex::parse(text).ok())
            .map(Color::Hex)
    }
}
