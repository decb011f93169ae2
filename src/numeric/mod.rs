pub(crate) mod bound;
pub(crate) mod equality;
pub(crate) mod ordering;
pub(crate) mod stepper;
