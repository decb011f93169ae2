//! Tolerance-aware double equality and order-sensitive deep hashing.

use crate::config::ToleranceConfig;
use crate::foundation::hash::PrimeHasher;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Equality and hashing helpers bound to one [`ToleranceConfig`].
pub struct EqualityHash {
    config: ToleranceConfig,
}

impl EqualityHash {
    /// Bind to an explicit configuration.
    pub fn new(config: ToleranceConfig) -> Self {
        Self { config }
    }

    /// Bind to [`ToleranceConfig::process`].
    pub fn from_process() -> Self {
        Self::new(ToleranceConfig::process())
    }

    /// Configured relative tolerance.
    pub fn tolerance(&self) -> f64 {
        self.config.tolerance
    }

    /// `true` when `a` and `b` are bit-identical, or when `b` lies within
    /// `a ± |a| * tolerance`.
    ///
    /// `0.0` and `-0.0` are distinct. NaN only equals a bit-identical NaN.
    pub fn approx_equals(&self, a: f64, b: f64) -> bool {
        if a.to_bits() == b.to_bits() {
            return true;
        }
        if a == 0.0 && b == 0.0 {
            return false;
        }
        let delta = a.abs() * self.config.tolerance;
        let min = a - delta;
        let max = a + delta;
        min <= b && b <= max
    }

    /// Shorthand for [`DeepHash::deep_hash`].
    pub fn deep_hash<T: DeepHash + ?Sized>(&self, value: &T) -> u64 {
        value.deep_hash()
    }
}

/// Hash that recurses into arrays element by element, in order.
///
/// Scalars hash from their natural bit representation. Sequences start from
/// seed `1` and fold each element with `seed * 37 + element_hash`, so nested
/// sequences hash structurally and permutations hash differently.
pub trait DeepHash {
    /// Structural hash of `self`.
    fn deep_hash(&self) -> u64;
}

impl DeepHash for f64 {
    fn deep_hash(&self) -> u64 {
        let bits = self.to_bits();
        bits ^ (bits >> 32)
    }
}

impl DeepHash for f32 {
    fn deep_hash(&self) -> u64 {
        u64::from(self.to_bits())
    }
}

macro_rules! impl_deep_hash_signed {
    ($($t:ty),*) => {
        $(impl DeepHash for $t {
            fn deep_hash(&self) -> u64 {
                i64::from(*self) as u64
            }
        })*
    };
}

macro_rules! impl_deep_hash_unsigned {
    ($($t:ty),*) => {
        $(impl DeepHash for $t {
            fn deep_hash(&self) -> u64 {
                u64::from(*self)
            }
        })*
    };
}

impl_deep_hash_signed!(i8, i16, i32, i64);
impl_deep_hash_unsigned!(u8, u16, u32, u64, bool);

impl DeepHash for char {
    fn deep_hash(&self) -> u64 {
        u64::from(u32::from(*self))
    }
}

impl DeepHash for str {
    fn deep_hash(&self) -> u64 {
        let mut h = PrimeHasher::new_default();
        h.write_all(self.bytes().map(u64::from));
        h.finish()
    }
}

impl DeepHash for String {
    fn deep_hash(&self) -> u64 {
        self.as_str().deep_hash()
    }
}

impl<T: DeepHash> DeepHash for Option<T> {
    fn deep_hash(&self) -> u64 {
        self.as_ref().map_or(0, DeepHash::deep_hash)
    }
}

impl<T: DeepHash> DeepHash for [T] {
    fn deep_hash(&self) -> u64 {
        let mut h = PrimeHasher::new_default();
        h.write_all(self.iter().map(DeepHash::deep_hash));
        h.finish()
    }
}

impl<T: DeepHash, const N: usize> DeepHash for [T; N] {
    fn deep_hash(&self) -> u64 {
        self.as_slice().deep_hash()
    }
}

impl<T: DeepHash> DeepHash for Vec<T> {
    fn deep_hash(&self) -> u64 {
        self.as_slice().deep_hash()
    }
}

impl<T: DeepHash + ?Sized> DeepHash for &T {
    fn deep_hash(&self) -> u64 {
        (**self).deep_hash()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/numeric/equality.rs"]
mod tests;
