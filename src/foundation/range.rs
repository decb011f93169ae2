use std::{fmt, str::FromStr};

use crate::foundation::error::{PiecewiseError, PiecewiseResult};
use crate::numeric::bound::{BoundSide, adjusted_bound};
use crate::numeric::ordering::compare;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
/// Element datatype of a [`Range`].
pub enum NumericKind {
    /// Signed 8-bit integer.
    Byte,
    /// Unsigned 16-bit integer.
    UShort,
    /// Signed 16-bit integer.
    Short,
    /// Signed 32-bit integer.
    Int,
    /// Signed 64-bit integer.
    Long,
    /// IEEE-754 single precision.
    Float,
    /// IEEE-754 double precision.
    Double,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Stepping behaviour shared by a group of [`NumericKind`]s.
pub enum KindFamily {
    /// Adjacent representable doubles.
    Double,
    /// Adjacent representable floats, computed in 32-bit precision.
    Float,
    /// Exact `±1` arithmetic.
    Integer,
}

impl NumericKind {
    /// All supported kinds.
    pub const ALL: [NumericKind; 7] = [
        NumericKind::Byte,
        NumericKind::UShort,
        NumericKind::Short,
        NumericKind::Int,
        NumericKind::Long,
        NumericKind::Float,
        NumericKind::Double,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            NumericKind::Byte => "byte",
            NumericKind::UShort => "ushort",
            NumericKind::Short => "short",
            NumericKind::Int => "int",
            NumericKind::Long => "long",
            NumericKind::Float => "float",
            NumericKind::Double => "double",
        }
    }

    /// Stepping family this kind belongs to.
    pub fn family(self) -> KindFamily {
        match self {
            NumericKind::Double => KindFamily::Double,
            NumericKind::Float => KindFamily::Float,
            NumericKind::Byte
            | NumericKind::UShort
            | NumericKind::Short
            | NumericKind::Int
            | NumericKind::Long => KindFamily::Integer,
        }
    }

    /// `true` for byte/short/int/long-like kinds.
    pub fn is_integer(self) -> bool {
        self.family() == KindFamily::Integer
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for NumericKind {
    type Error = PiecewiseError;

    fn try_from(name: String) -> PiecewiseResult<Self> {
        name.parse()
    }
}

impl From<NumericKind> for String {
    fn from(kind: NumericKind) -> Self {
        kind.name().to_owned()
    }
}

impl FromStr for NumericKind {
    type Err = PiecewiseError;

    fn from_str(s: &str) -> PiecewiseResult<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "byte" | "i8" => Ok(NumericKind::Byte),
            "ushort" | "u16" => Ok(NumericKind::UShort),
            "short" | "i16" => Ok(NumericKind::Short),
            "int" | "integer" | "i32" => Ok(NumericKind::Int),
            "long" | "i64" => Ok(NumericKind::Long),
            "float" | "f32" => Ok(NumericKind::Float),
            "double" | "f64" => Ok(NumericKind::Double),
            _ => Err(PiecewiseError::unsupported_kind(s)),
        }
    }
}

/// Read-only view of a numeric interval with open or closed ends.
///
/// Bounds are exposed as `f64`. The provided `adjusted_*` methods convert an
/// excluded bound into the nearest included representable value of
/// [`Range::element_kind`].
pub trait Range {
    /// Lower bound.
    fn min(&self) -> f64;
    /// Upper bound.
    fn max(&self) -> f64;
    /// Whether [`Range::min`] belongs to the range.
    fn is_min_included(&self) -> bool;
    /// Whether [`Range::max`] belongs to the range.
    fn is_max_included(&self) -> bool;
    /// Datatype of the range elements.
    fn element_kind(&self) -> NumericKind;
    /// Whether `value` lies inside the range.
    fn contains(&self, value: f64) -> bool;

    /// Lower bound pushed right by one representable step when excluded.
    fn adjusted_min(&self) -> f64 {
        adjusted_bound(self, BoundSide::Min)
    }

    /// Upper bound pushed left by one representable step when excluded.
    fn adjusted_max(&self) -> f64 {
        adjusted_bound(self, BoundSide::Max)
    }

    /// `true` when the adjusted bounds collapse onto a single value.
    fn is_degenerate(&self) -> bool {
        compare(self.adjusted_min(), self.adjusted_max()).is_eq()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Immutable concrete [`Range`].
pub struct NumberRange {
    kind: NumericKind,
    #[serde(with = "crate::foundation::bits")]
    min: f64,
    #[serde(default = "default_included")]
    min_included: bool,
    #[serde(with = "crate::foundation::bits")]
    max: f64,
    #[serde(default = "default_included")]
    max_included: bool,
}

fn default_included() -> bool {
    true
}

impl NumberRange {
    /// Build a range with explicit inclusion flags.
    pub fn new(
        kind: NumericKind,
        min: f64,
        min_included: bool,
        max: f64,
        max_included: bool,
    ) -> Self {
        Self {
            kind,
            min,
            min_included,
            max,
            max_included,
        }
    }

    /// `[min, max]`.
    pub fn closed(kind: NumericKind, min: f64, max: f64) -> Self {
        Self::new(kind, min, true, max, true)
    }

    /// `[min, max)`.
    pub fn closed_open(kind: NumericKind, min: f64, max: f64) -> Self {
        Self::new(kind, min, true, max, false)
    }

    /// `[value, value]`.
    pub fn point(kind: NumericKind, value: f64) -> Self {
        Self::closed(kind, value, value)
    }

    /// Copy any [`Range`] into a `NumberRange`.
    pub fn from_range(range: &impl Range) -> Self {
        Self::new(
            range.element_kind(),
            range.min(),
            range.is_min_included(),
            range.max(),
            range.is_max_included(),
        )
    }

    /// `true` when both bounds are the same NaN bit pattern.
    pub fn is_nan_point(&self) -> bool {
        self.min.is_nan() && self.min.to_bits() == self.max.to_bits()
    }
}

impl Range for NumberRange {
    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn is_min_included(&self) -> bool {
        self.min_included
    }

    fn is_max_included(&self) -> bool {
        self.max_included
    }

    fn element_kind(&self) -> NumericKind {
        self.kind
    }

    fn contains(&self, value: f64) -> bool {
        if value.is_nan() {
            return self.is_nan_point() && value.to_bits() == self.min.to_bits();
        }
        let above_min = if self.min_included {
            value >= self.min
        } else {
            value > self.min
        };
        let below_max = if self.max_included {
            value <= self.max
        } else {
            value < self.max
        };
        above_min && below_max
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::foundation::error::render_bound;

        let open = if self.min_included { '[' } else { '(' };
        let close = if self.max_included { ']' } else { ')' };
        write!(
            f,
            "{open}{}, {}{close} {}",
            render_bound(self.min),
            render_bound(self.max),
            self.kind
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/range.rs"]
mod tests;
