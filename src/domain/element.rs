use std::cmp::Ordering;

use crate::{
    foundation::error::{PiecewiseError, PiecewiseResult},
    foundation::hash::PrimeHasher,
    foundation::range::{NumberRange, Range},
    numeric::equality::DeepHash,
    numeric::ordering::compare,
    transform::linear::{LinearTransform, LinearTransformBuilder},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "DomainElementDef", into = "DomainElementDef")]
/// One segment of a piecewise mapping: an input range and its transform.
///
/// The input bounds are cached in their inclusive-adjusted form, which is what
/// ordering and overlap checks inside a [`crate::DomainPartition`] use.
pub struct DomainElement {
    name: Option<String>,
    range: NumberRange,
    transform: LinearTransform,
    input_minimum: f64,
    input_maximum: f64,
}

impl DomainElement {
    /// Bind `transform` to `range`.
    ///
    /// Fails when the adjusted minimum is greater than the adjusted maximum.
    /// NaN bounds are never treated as an ordering violation.
    pub fn new(range: NumberRange, transform: LinearTransform) -> PiecewiseResult<Self> {
        let input_minimum = range.adjusted_min();
        let input_maximum = range.adjusted_max();
        if input_minimum > input_maximum {
            return Err(PiecewiseError::validation(format!(
                "domain element range {range} is empty"
            )));
        }
        Ok(Self {
            name: None,
            range,
            transform,
            input_minimum,
            input_maximum,
        })
    }

    /// Element whose transform maps `input` onto `output`.
    pub fn mapping(input: NumberRange, output: &(impl Range + ?Sized)) -> PiecewiseResult<Self> {
        let transform = LinearTransformBuilder::between(&input, output)?;
        Self::new(input, transform)
    }

    /// Element sending every value of `range` to `value`.
    pub fn constant(range: NumberRange, value: f64) -> PiecewiseResult<Self> {
        Self::new(range, LinearTransform::constant(value))
    }

    /// Element leaving values of `range` untouched.
    pub fn passthrough(range: NumberRange) -> PiecewiseResult<Self> {
        Self::new(range, LinearTransform::identity())
    }

    /// Attach a diagnostic name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Diagnostic name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Input range.
    pub fn range(&self) -> &NumberRange {
        &self.range
    }

    /// Transform applied to values of the input range.
    pub fn transform(&self) -> &LinearTransform {
        &self.transform
    }

    /// Inclusive-adjusted lower input bound.
    pub fn input_minimum(&self) -> f64 {
        self.input_minimum
    }

    /// Inclusive-adjusted upper input bound.
    pub fn input_maximum(&self) -> f64 {
        self.input_maximum
    }

    /// Whether `value` belongs to the input range.
    pub fn contains(&self, value: f64) -> bool {
        self.range.contains(value)
    }

    /// Apply this element's transform.
    pub fn apply(&self, value: f64) -> f64 {
        self.transform.apply(value)
    }

    /// Order by adjusted input minimum under [`compare`].
    pub fn cmp_by_minimum(&self, other: &Self) -> Ordering {
        compare(self.input_minimum, other.input_minimum)
    }
}

impl DeepHash for DomainElement {
    fn deep_hash(&self) -> u64 {
        let mut h = PrimeHasher::new_default();
        h.write(self.name.deep_hash());
        h.write_all([
            self.range.min().deep_hash(),
            self.range.max().deep_hash(),
            self.range.is_min_included().deep_hash(),
            self.range.is_max_included().deep_hash(),
            self.range.element_kind().name().deep_hash(),
        ]);
        h.write(self.transform.deep_hash());
        h.finish()
    }
}

/// Step-by-step [`DomainElement`] construction.
#[derive(Clone, Debug, Default)]
pub struct DomainElementBuilder {
    name: Option<String>,
    range: Option<NumberRange>,
    transform: Option<LinearTransform>,
    output: Option<NumberRange>,
}

impl DomainElementBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostic name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Input range (required).
    pub fn range(mut self, range: NumberRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Explicit transform. Takes precedence over [`Self::output`].
    pub fn transform(mut self, transform: LinearTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Output range the input range is mapped onto.
    pub fn output(mut self, output: NumberRange) -> Self {
        self.output = Some(output);
        self
    }

    /// Validate and build.
    pub fn build(self) -> PiecewiseResult<DomainElement> {
        let range = self
            .range
            .ok_or_else(|| PiecewiseError::null_argument("range"))?;
        let element = match (self.transform, self.output) {
            (Some(transform), _) => DomainElement::new(range, transform)?,
            (None, Some(output)) => DomainElement::mapping(range, &output)?,
            (None, None) => return Err(PiecewiseError::null_argument("transform")),
        };
        Ok(match self.name {
            Some(name) => element.with_name(name),
            None => element,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct DomainElementDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    range: NumberRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transform: Option<LinearTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    output: Option<NumberRange>,
}

impl TryFrom<DomainElementDef> for DomainElement {
    type Error = PiecewiseError;

    fn try_from(def: DomainElementDef) -> PiecewiseResult<Self> {
        let mut builder = DomainElementBuilder::new().range(def.range);
        if let Some(name) = def.name {
            builder = builder.name(name);
        }
        if let Some(transform) = def.transform {
            builder = builder.transform(transform);
        }
        if let Some(output) = def.output {
            builder = builder.output(output);
        }
        builder.build()
    }
}

impl From<DomainElement> for DomainElementDef {
    fn from(element: DomainElement) -> Self {
        Self {
            name: element.name,
            range: element.range,
            transform: Some(element.transform),
            output: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/domain/element.rs"]
mod tests;
