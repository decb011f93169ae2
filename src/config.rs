use std::sync::OnceLock;

use anyhow::Context as _;

use crate::foundation::error::{PiecewiseError, PiecewiseResult};

/// Environment variable holding the process-wide comparison tolerance.
pub const TOLERANCE_ENV: &str = "PIECEWISE_TOLERANCE";

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Relative tolerance used by approximate double equality.
///
/// `0.0` means exact comparison only.
pub struct ToleranceConfig {
    /// Relative tolerance, finite and `>= 0`.
    pub tolerance: f64,
}

impl ToleranceConfig {
    /// Build a config, rejecting negative or non-finite tolerances.
    pub fn new(tolerance: f64) -> PiecewiseResult<Self> {
        let cfg = Self { tolerance };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Exact comparison only.
    pub fn exact() -> Self {
        Self::default()
    }

    /// Check the tolerance is usable.
    pub fn validate(&self) -> PiecewiseResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(PiecewiseError::validation(format!(
                "tolerance must be finite and >= 0, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Read [`TOLERANCE_ENV`]. Unset or unusable values fall back to `0.0`.
    pub fn from_env() -> Self {
        match std::env::var(TOLERANCE_ENV) {
            Ok(raw) => Self::from_env_value(&raw),
            Err(_) => Self::default(),
        }
    }

    fn from_env_value(raw: &str) -> Self {
        let parsed = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|t| t.is_finite() && *t >= 0.0);
        match parsed {
            Some(tolerance) => Self { tolerance },
            None => {
                tracing::warn!(
                    var = TOLERANCE_ENV,
                    value = raw,
                    "ignoring unusable tolerance, using exact comparison"
                );
                Self::default()
            }
        }
    }

    /// Parse a JSON document such as `{"tolerance": 0.01}`.
    pub fn from_json_str(s: &str) -> PiecewiseResult<Self> {
        let cfg: Self = serde_json::from_str(s).context("parse tolerance json")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Process-wide configuration, read from the environment on first use
    /// and immutable afterwards.
    pub fn process() -> Self {
        static PROCESS: OnceLock<ToleranceConfig> = OnceLock::new();
        *PROCESS.get_or_init(Self::from_env)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
