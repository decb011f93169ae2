pub(crate) mod bits;
pub(crate) mod error;
pub(crate) mod hash;
pub(crate) mod range;
