/// Order-sensitive `seed * 37 + h` accumulator.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PrimeHasher(u64);

impl PrimeHasher {
    pub(crate) const DEFAULT_SEED: u64 = 1;
    pub(crate) const PRIME: u64 = 37;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn new_default() -> Self {
        Self(Self::DEFAULT_SEED)
    }

    pub(crate) fn write(&mut self, h: u64) {
        self.0 = self.0.wrapping_mul(Self::PRIME).wrapping_add(h);
    }

    pub(crate) fn write_all(&mut self, hashes: impl IntoIterator<Item = u64>) {
        for h in hashes {
            self.write(h);
        }
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Fold the hash of one value into `seed`.
///
/// Arrays should go through [`crate::DeepHash`] instead, which recurses into
/// the elements.
pub fn hash_combine(seed: u64, value_hash: u64) -> u64 {
    let mut h = PrimeHasher::new(seed);
    h.write(value_hash);
    h.finish()
}
