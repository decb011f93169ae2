//! Serde form for `f64` values that must keep NaN payloads and infinities.
//!
//! Finite values are written as JSON numbers. Non-finite values are written as
//! the string [`render_bound`] produces (`NaN(<hex>)`, `inf`, `-inf`), since
//! JSON has no literal for them.

use std::fmt;

use serde::{Deserializer, Serializer, de};

use crate::foundation::error::render_bound;

/// Write `value`, keeping the raw bits of NaN.
pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&render_bound(*value))
    }
}

/// Read a number or a rendered non-finite value.
pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    deserializer.deserialize_any(BitsVisitor)
}

/// Parse `NaN(<hex>)`, or anything `f64::from_str` accepts.
pub(crate) fn parse_bound(s: &str) -> Option<f64> {
    let s = s.trim();
    match s.strip_prefix("NaN(").and_then(|rest| rest.strip_suffix(')')) {
        Some(hex) => u64::from_str_radix(hex, 16)
            .ok()
            .map(f64::from_bits)
            .filter(|v| v.is_nan()),
        None => s.parse().ok(),
    }
}

struct BitsVisitor;

impl<'de> de::Visitor<'de> for BitsVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, `inf`, `-inf` or `NaN(<hex bits>)`")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        parse_bound(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/bits.rs"]
mod tests;
