use super::*;
use crate::foundation::range::{NumberRange, NumericKind};

fn ramp() -> Vec<DomainElement> {
    vec![
        DomainElement::mapping(
            NumberRange::closed_open(NumericKind::Double, 0.0, 10.0),
            &NumberRange::closed(NumericKind::Double, 0.0, 1.0),
        )
        .unwrap(),
        DomainElement::constant(NumberRange::closed(NumericKind::Double, 20.0, 30.0), 5.0)
            .unwrap(),
    ]
}

#[test]
fn transform_applies_owning_element() {
    let f = PiecewiseTransform::from_elements(ramp()).unwrap();
    assert_eq!(f.transform(0.0).unwrap(), 0.0);
    assert_eq!(f.transform(25.0).unwrap(), 5.0);
    let near_end = f.transform(9.0).unwrap();
    assert!(near_end > 0.89 && near_end < 0.91);
}

#[test]
fn gaps_fail_without_default() {
    let f = PiecewiseTransform::from_elements(ramp()).unwrap();
    assert!(matches!(f.transform(15.0), Err(PiecewiseError::Unmapped(v)) if v == 15.0));
    assert_eq!(f.default_value(), None);
}

#[test]
fn gaps_use_default_value() {
    let f = PiecewiseTransform::from_elements(ramp())
        .unwrap()
        .with_default(-9999.0);
    assert_eq!(f.transform(15.0).unwrap(), -9999.0);
    assert_eq!(f.transform(f64::NAN).unwrap(), -9999.0);
    assert_eq!(f.partition().len(), 2);
}

#[test]
fn overlapping_elements_never_build() {
    let mut elements = ramp();
    elements.push(
        DomainElement::passthrough(NumberRange::closed(NumericKind::Double, 5.0, 6.0)).unwrap(),
    );
    assert!(matches!(
        PiecewiseTransform::from_elements(elements),
        Err(PiecewiseError::Overlap { .. })
    ));
}
