//! Piecewise is a piecewise linear domain-mapping engine.
//!
//! A numeric input axis is split into non-overlapping intervals ("domain
//! elements"), each bound to its own linear transform. The crate locates the
//! interval a value falls in and derives the linear transform mapping one
//! numeric range onto another.
//!
//! # Building blocks
//!
//! 1. **Ordering**: [`compare`] / [`binary_search`] define a total order over
//!    doubles that keeps distinct NaN payloads apart, so NaN "no data"
//!    sentinels can live in sorted arrays.
//! 2. **Stepping**: [`step`] / [`roll`] move a value to the adjacent
//!    representable double, float or integer.
//! 3. **Bounds**: [`double_value`] and [`Range::adjusted_min`] turn excluded
//!    bounds into the nearest included value.
//! 4. **Transforms**: [`LinearTransformBuilder::between`] derives
//!    `y = scale * x + offset` from a source and a destination range.
//! 5. **Partitions**: [`DomainPartition`] validates elements eagerly and
//!    answers lookups by binary search; [`PiecewiseTransform`] evaluates the
//!    resulting function.
//! 6. **Equality**: [`EqualityHash`] compares doubles with a configurable
//!    relative tolerance and hashes nested arrays structurally.
//!
//! Everything is immutable after construction and safe to share across threads.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod domain;
mod foundation;
mod numeric;
mod transform;

pub use config::{TOLERANCE_ENV, ToleranceConfig};
pub use domain::element::{DomainElement, DomainElementBuilder};
pub use domain::partition::{DomainPartition, elements_are_sorted, validate_elements};
pub use domain::piecewise::PiecewiseTransform;
pub use foundation::error::{PiecewiseError, PiecewiseResult, render_bound};
pub use foundation::hash::hash_combine;
pub use foundation::range::{KindFamily, NumberRange, NumericKind, Range};
pub use numeric::bound::{BoundSide, adjusted_bound, double_value, inclusion_direction};
pub use numeric::equality::{DeepHash, EqualityHash};
pub use numeric::ordering::{SearchOutcome, binary_search, compare, compare_signum, search};
pub use numeric::stepper::{next_double, next_float, previous_double, previous_float, roll, step};
pub use transform::linear::{LinearTransform, LinearTransformBuilder};
