use crate::{
    domain::element::DomainElement,
    foundation::error::{PiecewiseError, PiecewiseResult},
    foundation::hash::PrimeHasher,
    foundation::range::Range,
    numeric::equality::DeepHash,
    numeric::ordering::{SearchOutcome, compare, search},
};

/// Check that consecutive elements do not overlap.
///
/// For every adjacent pair the earlier element's adjusted maximum must sort
/// strictly before the later element's adjusted minimum under [`compare`], so
/// touching closed bounds such as `[0, 10]` and `[10, 20]` are rejected. The
/// first offending pair is reported with its raw range bounds.
pub fn validate_elements(elements: &[DomainElement]) -> PiecewiseResult<()> {
    for (i, pair) in elements.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if compare(prev.input_maximum(), next.input_minimum()).is_ge() {
            let err = PiecewiseError::Overlap {
                first_min: prev.range().min(),
                first_max: prev.range().max(),
                second_min: next.range().min(),
                second_max: next.range().max(),
            };
            tracing::warn!(index = i + 1, error = %err, "rejecting domain partition");
            return Err(err);
        }
    }
    Ok(())
}

/// `true` when no adjusted maximum sorts after the next adjusted minimum.
///
/// Looser than [`validate_elements`]: elements sharing a single bound value pass.
pub fn elements_are_sorted(elements: &[DomainElement]) -> bool {
    elements
        .windows(2)
        .all(|pair| compare(pair[0].input_maximum(), pair[1].input_minimum()).is_le())
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<DomainElement>", into = "Vec<DomainElement>")]
/// Sorted, non-overlapping set of [`DomainElement`]s with binary-search lookup.
///
/// The set is validated once at construction and never edited afterwards, so
/// a shared reference can be queried from any number of threads.
pub struct DomainPartition {
    elements: Vec<DomainElement>,
    minimums: Vec<f64>,
}

impl DomainPartition {
    /// Sort `elements` by adjusted input minimum and validate them.
    #[tracing::instrument(skip(elements), fields(len = elements.len()))]
    pub fn new(mut elements: Vec<DomainElement>) -> PiecewiseResult<Self> {
        elements.sort_by(DomainElement::cmp_by_minimum);
        validate_elements(&elements)?;
        let minimums = elements.iter().map(DomainElement::input_minimum).collect();
        tracing::debug!(elements = elements.len(), "domain partition built");
        Ok(Self { elements, minimums })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` when there are no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in ascending order.
    pub fn elements(&self) -> &[DomainElement] {
        &self.elements
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Option<&DomainElement> {
        self.elements.get(index)
    }

    /// Index of the element whose range contains `value`.
    ///
    /// Returns `None` for values in a gap, outside every element, or for NaN
    /// payloads no element was built for.
    pub fn lookup(&self, value: f64) -> Option<usize> {
        match search(&self.minimums, value) {
            SearchOutcome::Found(i) => Some(i).filter(|&i| self.elements[i].contains(value)),
            SearchOutcome::InsertBefore(i) => {
                // The element before the insertion point is the usual owner.
                // The one after it can still own the value when its minimum
                // was pushed past a fractional value by integer stepping.
                let before = i.checked_sub(1);
                [before, Some(i)]
                    .into_iter()
                    .flatten()
                    .find(|&j| self.elements.get(j).is_some_and(|e| e.contains(value)))
            }
        }
    }

    /// Element whose range contains `value`.
    pub fn find(&self, value: f64) -> Option<&DomainElement> {
        self.lookup(value).and_then(|i| self.elements.get(i))
    }

    /// Span from the smallest to the largest adjusted input bound, ignoring
    /// NaN-valued elements. `None` when no element has a numeric bound.
    pub fn approx_range(&self) -> Option<(f64, f64)> {
        let mut numeric = self
            .elements
            .iter()
            .filter(|e| !e.input_minimum().is_nan() && !e.input_maximum().is_nan());
        let first = numeric.next()?;
        let span = numeric.fold(
            (first.input_minimum(), first.input_maximum()),
            |(lo, hi), e| (lo.min(e.input_minimum()), hi.max(e.input_maximum())),
        );
        Some(span)
    }
}

impl TryFrom<Vec<DomainElement>> for DomainPartition {
    type Error = PiecewiseError;

    fn try_from(elements: Vec<DomainElement>) -> PiecewiseResult<Self> {
        Self::new(elements)
    }
}

impl From<DomainPartition> for Vec<DomainElement> {
    fn from(partition: DomainPartition) -> Self {
        partition.elements
    }
}

impl DeepHash for DomainPartition {
    fn deep_hash(&self) -> u64 {
        let mut h = PrimeHasher::new_default();
        h.write_all(self.elements.iter().map(DeepHash::deep_hash));
        h.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/domain/partition.rs"]
mod tests;
