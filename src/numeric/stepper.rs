//! Next/previous representable values for each [`NumericKind`].

use crate::foundation::range::{KindFamily, NumericKind};

const F64_SIGN: u64 = 0x8000_0000_0000_0000;
const F64_POSITIVE_INFINITY: u64 = 0x7ff0_0000_0000_0000;
const F32_SIGN: u32 = 0x8000_0000;
const F32_POSITIVE_INFINITY: u32 = 0x7f80_0000;

fn next_f64(value: f64, positive: bool) -> f64 {
    if value.is_nan() {
        return value;
    }
    if value == 0.0 {
        let smallest = f64::from_bits(1);
        return if positive { smallest } else { -smallest };
    }

    let bits = value.to_bits();
    let mut magnitude = bits & !F64_SIGN;
    let is_positive = bits & F64_SIGN == 0;
    if is_positive == positive {
        // Moving away from zero; infinity saturates.
        if magnitude != F64_POSITIVE_INFINITY {
            magnitude += 1;
        }
    } else {
        magnitude -= 1;
    }
    f64::from_bits(magnitude | (bits & F64_SIGN))
}

fn next_f32(value: f32, positive: bool) -> f32 {
    if value.is_nan() {
        return value;
    }
    if value == 0.0 {
        let smallest = f32::from_bits(1);
        return if positive { smallest } else { -smallest };
    }

    let bits = value.to_bits();
    let mut magnitude = bits & !F32_SIGN;
    let is_positive = bits & F32_SIGN == 0;
    if is_positive == positive {
        if magnitude != F32_POSITIVE_INFINITY {
            magnitude += 1;
        }
    } else {
        magnitude -= 1;
    }
    f32::from_bits(magnitude | (bits & F32_SIGN))
}

/// Least double strictly greater than `value`. NaN is returned unchanged.
pub fn next_double(value: f64) -> f64 {
    next_f64(value, true)
}

/// Greatest double strictly less than `value`. NaN is returned unchanged.
pub fn previous_double(value: f64) -> f64 {
    next_f64(value, false)
}

/// Least float strictly greater than `value`. NaN is returned unchanged.
pub fn next_float(value: f32) -> f32 {
    next_f32(value, true)
}

/// Greatest float strictly less than `value`. NaN is returned unchanged.
pub fn previous_float(value: f32) -> f32 {
    next_f32(value, false)
}

/// Move `value` by one representable unit of `kind`.
///
/// `direction` is `-1`, `0` or `+1`; other magnitudes are clamped to one step.
pub fn step(kind: NumericKind, value: f64, direction: i32) -> f64 {
    roll(kind, value, direction.signum())
}

/// Move `value` by `|amount|` representable units of `kind`, in the sign
/// direction of `amount`.
///
/// A zero `amount` returns `value` untouched. Otherwise float values are
/// first rounded to the nearest `f32`, and integer kinds use exact
/// `value + amount` arithmetic.
pub fn roll(kind: NumericKind, value: f64, amount: i32) -> f64 {
    if amount == 0 {
        return value;
    }
    match kind.family() {
        KindFamily::Double => {
            let positive = amount > 0;
            (0..amount.unsigned_abs()).fold(value, |v, _| next_f64(v, positive))
        }
        KindFamily::Float => {
            let positive = amount > 0;
            let stepped =
                (0..amount.unsigned_abs()).fold(value as f32, |v, _| next_f32(v, positive));
            f64::from(stepped)
        }
        KindFamily::Integer => value + f64::from(amount),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/numeric/stepper.rs"]
mod tests;
