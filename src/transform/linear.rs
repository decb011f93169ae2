//! Linear transforms `y = scale * x + offset` and their derivation from ranges.

use std::fmt;

use crate::foundation::error::{PiecewiseError, PiecewiseResult};
use crate::foundation::hash::PrimeHasher;
use crate::foundation::range::Range;
use crate::numeric::equality::{DeepHash, EqualityHash};
use crate::numeric::ordering::compare;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One-dimensional linear map `y = scale * x + offset`.
///
/// A zero scale is a constant map.
pub struct LinearTransform {
    /// Slope.
    #[serde(with = "crate::foundation::bits")]
    pub scale: f64,
    /// Intercept. May be NaN for a constant NaN map.
    #[serde(with = "crate::foundation::bits")]
    pub offset: f64,
}

impl LinearTransform {
    /// Transform with the given coefficients.
    pub const fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// `y = x`.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0)
    }

    /// `y = value` for every `x`.
    pub const fn constant(value: f64) -> Self {
        Self::new(0.0, value)
    }

    #[inline]
    /// Apply the map to `x`.
    pub fn apply(&self, x: f64) -> f64 {
        // 0 * inf and 0 * NaN must not leak into a constant map.
        if self.is_constant() {
            return self.offset;
        }
        self.scale * x + self.offset
    }

    /// `true` for a zero scale.
    pub fn is_constant(&self) -> bool {
        self.scale == 0.0
    }

    /// `true` for exactly `y = x`.
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.offset == 0.0
    }

    /// Inverse map. Constant maps have none.
    pub fn inverse(&self) -> PiecewiseResult<Self> {
        if self.is_identity() {
            return Ok(*self);
        }
        if self.is_constant() || !self.scale.is_finite() {
            return Err(PiecewiseError::validation(format!(
                "transform {self} is not invertible"
            )));
        }
        Ok(Self::new(1.0 / self.scale, -self.offset / self.scale))
    }

    /// Coefficient-wise comparison through [`EqualityHash::approx_equals`].
    pub fn approx_eq(&self, other: &Self, eq: &EqualityHash) -> bool {
        eq.approx_equals(self.scale, other.scale) && eq.approx_equals(self.offset, other.offset)
    }
}

impl Default for LinearTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl DeepHash for LinearTransform {
    fn deep_hash(&self) -> u64 {
        let mut h = PrimeHasher::new_default();
        h.write(self.scale.deep_hash());
        h.write(self.offset.deep_hash());
        h.finish()
    }
}

impl fmt::Display for LinearTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {}*x + {}", self.scale, self.offset)
    }
}

/// Stateless constructor of [`LinearTransform`]s.
pub struct LinearTransformBuilder;

impl LinearTransformBuilder {
    /// Transform from explicit coefficients.
    pub fn build(scale: f64, offset: f64) -> LinearTransform {
        LinearTransform::new(scale, offset)
    }

    /// Transform mapping `source` onto `destination`.
    ///
    /// Excluded bounds are first moved to the nearest included representable
    /// value of each range's element kind. A single-point destination yields
    /// a constant map whatever the source; a single-point source with a wider
    /// destination is rejected with [`PiecewiseError::DegenerateSource`].
    pub fn between(
        source: &(impl Range + ?Sized),
        destination: &(impl Range + ?Sized),
    ) -> PiecewiseResult<LinearTransform> {
        let min_src = source.adjusted_min();
        let max_src = source.adjusted_max();
        let min_dst = destination.adjusted_min();
        let max_dst = destination.adjusted_max();

        if compare(min_dst, max_dst).is_eq() {
            return Ok(LinearTransform::constant(min_dst));
        }
        if compare(min_src, max_src).is_eq() {
            return Err(PiecewiseError::DegenerateSource);
        }

        let mut scale = (max_dst - min_dst) / (max_src - min_src);
        if scale.is_nan() {
            scale = 0.0;
        }
        let offset = min_dst - scale * min_src;
        Ok(LinearTransform::new(scale, offset))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/linear.rs"]
mod tests;
