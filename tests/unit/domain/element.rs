use super::*;
use crate::foundation::range::NumericKind;

fn closed(min: f64, max: f64) -> NumberRange {
    NumberRange::closed(NumericKind::Double, min, max)
}

#[test]
fn caches_adjusted_input_bounds() {
    let range = NumberRange::new(NumericKind::Int, 0.0, false, 10.0, false);
    let e = DomainElement::passthrough(range).unwrap();
    assert_eq!(e.input_minimum(), 1.0);
    assert_eq!(e.input_maximum(), 9.0);
    assert!(e.contains(0.5));
    assert!(!e.contains(10.0));
}

#[test]
fn inverted_range_is_rejected() {
    let err = DomainElement::passthrough(closed(5.0, 1.0)).unwrap_err();
    assert!(matches!(err, PiecewiseError::Validation(_)));

    let empty = NumberRange::new(NumericKind::Double, 5.0, false, 5.0, true);
    assert!(DomainElement::passthrough(empty).is_err());
}

#[test]
fn nan_bounds_are_not_an_ordering_violation() {
    let n = f64::from_bits(0x7ff8_0000_0000_0010);
    let e = DomainElement::constant(NumberRange::point(NumericKind::Double, n), 0.0).unwrap();
    assert!(e.contains(n));
    assert_eq!(e.apply(n), 0.0);
}

#[test]
fn mapping_derives_the_transform() {
    let e = DomainElement::mapping(closed(0.0, 10.0), &closed(0.0, 100.0)).unwrap();
    assert_eq!(e.transform(), &LinearTransform::new(10.0, 0.0));
    assert_eq!(e.apply(2.5), 25.0);
}

#[test]
fn builder_requires_range_and_transform() {
    let err = DomainElementBuilder::new()
        .transform(LinearTransform::identity())
        .build()
        .unwrap_err();
    assert!(matches!(err, PiecewiseError::NullArgument(ref a) if a == "range"));

    let err = DomainElementBuilder::new()
        .range(closed(0.0, 1.0))
        .build()
        .unwrap_err();
    assert!(matches!(err, PiecewiseError::NullArgument(ref a) if a == "transform"));
}

#[test]
fn builder_prefers_explicit_transform() {
    let e = DomainElementBuilder::new()
        .name("band")
        .range(closed(0.0, 1.0))
        .output(closed(0.0, 50.0))
        .transform(LinearTransform::constant(7.0))
        .build()
        .unwrap();
    assert_eq!(e.name(), Some("band"));
    assert_eq!(e.apply(0.3), 7.0);

    let e = DomainElementBuilder::new()
        .range(closed(0.0, 1.0))
        .output(closed(0.0, 50.0))
        .build()
        .unwrap();
    assert_eq!(e.name(), None);
    assert_eq!(e.apply(1.0), 50.0);
}

#[test]
fn orders_by_adjusted_minimum() {
    let a = DomainElement::passthrough(closed(0.0, 1.0)).unwrap();
    let b = DomainElement::passthrough(NumberRange::new(NumericKind::Double, 0.0, false, 1.0, true))
        .unwrap();
    assert_eq!(a.cmp_by_minimum(&b), Ordering::Less);
    assert_eq!(b.cmp_by_minimum(&a), Ordering::Greater);
}

#[test]
fn json_accepts_output_ranges() {
    let json = r#"{
        "name": "scaled",
        "range": {"kind": "int", "min": 0, "max": 10},
        "output": {"kind": "double", "min": 0, "max": 1}
    }"#;
    let e: DomainElement = serde_json::from_str(json).unwrap();
    assert_eq!(e.name(), Some("scaled"));
    assert_eq!(e.apply(10.0), 1.0);

    let back = serde_json::to_value(&e).unwrap();
    assert_eq!(back["transform"]["scale"], 0.1);
    assert!(back.get("output").is_none());
}

#[test]
fn json_without_transform_is_a_missing_argument() {
    let json = r#"{"range": {"kind": "double", "min": 0, "max": 1}}"#;
    let err = serde_json::from_str::<DomainElement>(json).unwrap_err();
    assert!(err.to_string().contains("missing argument: transform"));
}

#[test]
fn hash_distinguishes_names_and_ranges() {
    let a = DomainElement::passthrough(closed(0.0, 1.0)).unwrap();
    let b = a.clone().with_name("x");
    let c = DomainElement::passthrough(closed(0.0, 2.0)).unwrap();
    assert_ne!(a.deep_hash(), b.deep_hash());
    assert_ne!(a.deep_hash(), c.deep_hash());
    assert_eq!(a.deep_hash(), a.clone().deep_hash());
}
