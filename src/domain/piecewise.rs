use crate::{
    domain::element::DomainElement,
    domain::partition::DomainPartition,
    foundation::error::{PiecewiseError, PiecewiseResult},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Piecewise linear function over a [`DomainPartition`].
///
/// Values falling in a gap map to `default_value` when one is configured.
pub struct PiecewiseTransform {
    partition: DomainPartition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_value: Option<f64>,
}

impl PiecewiseTransform {
    /// Function without a gap fallback.
    pub fn new(partition: DomainPartition) -> Self {
        Self {
            partition,
            default_value: None,
        }
    }

    /// Build the partition from `elements` first.
    pub fn from_elements(elements: Vec<DomainElement>) -> PiecewiseResult<Self> {
        Ok(Self::new(DomainPartition::new(elements)?))
    }

    /// Value produced for inputs no element covers.
    pub fn with_default(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Underlying partition.
    pub fn partition(&self) -> &DomainPartition {
        &self.partition
    }

    /// Gap fallback, if any.
    pub fn default_value(&self) -> Option<f64> {
        self.default_value
    }

    /// Evaluate the function at `value`.
    pub fn transform(&self, value: f64) -> PiecewiseResult<f64> {
        match self.partition.find(value) {
            Some(element) => Ok(element.apply(value)),
            None => self
                .default_value
                .ok_or(PiecewiseError::Unmapped(value)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/domain/piecewise.rs"]
mod tests;
