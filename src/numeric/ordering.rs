//! Total order over doubles that keeps distinct NaN payloads apart.
//!
//! Non-NaN values sort numerically with `-0.0 < 0.0`. NaN values sort after
//! every non-NaN value and among themselves by their raw 64-bit pattern read
//! as a signed integer, so two NaNs compare equal only when bit-identical.

use std::cmp::Ordering;

const CANONICAL_NAN_BITS: i64 = 0x7ff8_0000_0000_0000;

fn raw_bits(value: f64) -> i64 {
    value.to_bits() as i64
}

// Every NaN collapses onto the canonical quiet NaN.
fn canonical_bits(value: f64) -> i64 {
    if value.is_nan() {
        CANONICAL_NAN_BITS
    } else {
        raw_bits(value)
    }
}

/// Compare two doubles under the NaN-aware total order.
pub fn compare(a: f64, b: f64) -> Ordering {
    if a.is_nan() && b.is_nan() {
        let order = raw_bits(a).cmp(&raw_bits(b));
        if order.is_ne() {
            return order;
        }
    }
    if a < b {
        return Ordering::Less;
    }
    if a > b {
        return Ordering::Greater;
    }
    canonical_bits(a).cmp(&canonical_bits(b))
}

/// [`compare`] folded onto `-1`, `0` or `+1`.
pub fn compare_signum(a: f64, b: f64) -> i32 {
    match compare(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Binary search over a slice sorted under [`compare`].
///
/// Returns the index of an element with the exact bit pattern of `key`, or
/// `-(insertion_point + 1)` when no such element exists.
pub fn binary_search(sorted: &[f64], key: f64) -> isize {
    let mut low: isize = 0;
    let mut high: isize = sorted.len() as isize - 1;
    let key_is_nan = key.is_nan();
    let key_bits = raw_bits(key);

    while low <= high {
        let mid = (low + high) >> 1;
        let mid_val = sorted[mid as usize];
        if mid_val < key {
            low = mid + 1;
            continue;
        }
        if mid_val > key {
            high = mid - 1;
            continue;
        }

        // At least one side is NaN, or the values are numerically equal
        // (which includes -0.0 against 0.0).
        let mid_bits = raw_bits(mid_val);
        if mid_bits == key_bits {
            return mid;
        }
        let mid_is_nan = mid_val.is_nan();
        let adjust_low = if key_is_nan {
            // (!NaN, NaN): mid is lower. Two NaNs: compare bits.
            !mid_is_nan || mid_bits < key_bits
        } else {
            // (NaN, !NaN): mid is greater. Otherwise signed zeros.
            !mid_is_nan && mid_bits < key_bits
        };
        if adjust_low {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }
    -(low + 1)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Decoded result of [`binary_search`].
pub enum SearchOutcome {
    /// Exact bit-pattern match at this index.
    Found(usize),
    /// Key absent; it would be inserted before this index.
    InsertBefore(usize),
}

impl SearchOutcome {
    /// Decode the negative-encoded insertion point convention.
    pub fn from_raw(raw: isize) -> Self {
        if raw >= 0 {
            SearchOutcome::Found(raw as usize)
        } else {
            SearchOutcome::InsertBefore((-(raw + 1)) as usize)
        }
    }

    /// Encode back into the `binary_search` convention.
    pub fn to_raw(self) -> isize {
        match self {
            SearchOutcome::Found(i) => i as isize,
            SearchOutcome::InsertBefore(i) => -(i as isize) - 1,
        }
    }

    /// Index where the key is, or would be inserted.
    pub fn index(self) -> usize {
        match self {
            SearchOutcome::Found(i) | SearchOutcome::InsertBefore(i) => i,
        }
    }
}

/// [`binary_search`] decoded into a [`SearchOutcome`].
pub fn search(sorted: &[f64], key: f64) -> SearchOutcome {
    SearchOutcome::from_raw(binary_search(sorted, key))
}

#[cfg(test)]
#[path = "../../tests/unit/numeric/ordering.rs"]
mod tests;
