//! Inclusive/exclusive bound normalisation.

use crate::foundation::range::{NumericKind, Range};
use crate::numeric::stepper::step;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which end of a range is being read.
pub enum BoundSide {
    /// The lower bound.
    Min,
    /// The upper bound.
    Max,
}

/// Convert `value` to the closest representable `kind` value before
/// (`direction == -1`) or after (`+1`) it, or leave it as is (`0`).
pub fn double_value(kind: NumericKind, value: f64, direction: i32) -> f64 {
    debug_assert!((-1..=1).contains(&direction), "direction {direction}");
    step(kind, value, direction)
}

/// Direction that turns the given bound of `range` into an inclusive one.
pub fn inclusion_direction(range: &(impl Range + ?Sized), side: BoundSide) -> i32 {
    match side {
        BoundSide::Min if !range.is_min_included() => 1,
        BoundSide::Max if !range.is_max_included() => -1,
        _ => 0,
    }
}

/// Read one bound of `range` as an inclusive double.
pub fn adjusted_bound(range: &(impl Range + ?Sized), side: BoundSide) -> f64 {
    let raw = match side {
        BoundSide::Min => range.min(),
        BoundSide::Max => range.max(),
    };
    double_value(range.element_kind(), raw, inclusion_direction(range, side))
}

#[cfg(test)]
#[path = "../../tests/unit/numeric/bound.rs"]
mod tests;
