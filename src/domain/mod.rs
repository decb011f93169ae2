pub(crate) mod element;
pub(crate) mod partition;
pub(crate) mod piecewise;
