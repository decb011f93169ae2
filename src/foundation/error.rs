/// Convenience result type used across the crate.
pub type PiecewiseResult<T> = Result<T, PiecewiseError>;

/// Top-level error taxonomy used by the mapping engine.
#[derive(thiserror::Error, Debug)]
pub enum PiecewiseError {
    /// A required argument was never supplied.
    #[error("missing argument: {0}")]
    NullArgument(String),

    /// Two domain elements cover a common value.
    #[error(
        "provided ranges are overlapping: {}:{}/{}:{}",
        render(.first_min),
        render(.first_max),
        render(.second_min),
        render(.second_max)
    )]
    Overlap {
        /// Lower bound of the earlier element.
        first_min: f64,
        /// Upper bound of the earlier element.
        first_max: f64,
        /// Lower bound of the later element.
        second_min: f64,
        /// Upper bound of the later element.
        second_max: f64,
    },

    /// A single-valued source range cannot be stretched onto a wider destination.
    #[error("impossible to map a single value to a range")]
    DegenerateSource,

    /// A numeric kind outside the supported set was requested.
    #[error("unsupported numeric kind: {0}")]
    UnsupportedKind(String),

    /// Invalid user-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// No domain element covers the value and no default is configured.
    #[error("no domain element covers value {}", render(.0))]
    Unmapped(f64),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PiecewiseError {
    /// Build a [`PiecewiseError::NullArgument`] value.
    pub fn null_argument(name: impl Into<String>) -> Self {
        Self::NullArgument(name.into())
    }

    /// Build a [`PiecewiseError::UnsupportedKind`] value.
    pub fn unsupported_kind(name: impl Into<String>) -> Self {
        Self::UnsupportedKind(name.into())
    }

    /// Build a [`PiecewiseError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Render a bound for diagnostics. NaN payloads are kept apart by their raw bits.
pub fn render_bound(value: f64) -> String {
    if value.is_nan() {
        format!("NaN({:x})", value.to_bits())
    } else {
        value.to_string()
    }
}

fn render(value: &f64) -> String {
    render_bound(*value)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
