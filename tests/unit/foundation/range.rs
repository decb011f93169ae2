use super::*;

#[test]
fn kind_names_parse_case_insensitively() {
    for kind in NumericKind::ALL {
        assert_eq!(kind.name().parse::<NumericKind>().unwrap(), kind);
        assert_eq!(
            kind.name().to_uppercase().parse::<NumericKind>().unwrap(),
            kind
        );
    }
    assert_eq!("f32".parse::<NumericKind>().unwrap(), NumericKind::Float);
}

#[test]
fn unknown_kind_is_unsupported() {
    let err = "bigdecimal".parse::<NumericKind>().unwrap_err();
    assert!(matches!(err, PiecewiseError::UnsupportedKind(ref s) if s == "bigdecimal"));
}

#[test]
fn kinds_group_into_stepping_families() {
    assert_eq!(NumericKind::Double.family(), KindFamily::Double);
    assert_eq!(NumericKind::Float.family(), KindFamily::Float);
    for kind in [
        NumericKind::Byte,
        NumericKind::UShort,
        NumericKind::Short,
        NumericKind::Int,
        NumericKind::Long,
    ] {
        assert!(kind.is_integer());
    }
    assert!(!NumericKind::Double.is_integer());
}

#[test]
fn contains_respects_inclusion_flags() {
    let r = NumberRange::new(NumericKind::Double, 0.0, false, 10.0, true);
    assert!(!r.contains(0.0));
    assert!(r.contains(0.5));
    assert!(r.contains(10.0));
    assert!(!r.contains(10.5));
    assert!(!r.contains(f64::NAN));

    let r = NumberRange::closed_open(NumericKind::Int, 0.0, 10.0);
    assert!(r.contains(0.0));
    assert!(!r.contains(10.0));
}

#[test]
fn nan_point_contains_only_its_payload() {
    let a = f64::from_bits(0x7ff8_0000_0000_0001);
    let b = f64::from_bits(0x7ff8_0000_0000_0002);
    let r = NumberRange::point(NumericKind::Double, a);
    assert!(r.is_nan_point());
    assert!(r.contains(a));
    assert!(!r.contains(b));
    assert!(!r.contains(0.0));
}

#[test]
fn adjusted_bounds_step_inward_when_excluded() {
    let r = NumberRange::new(NumericKind::Int, 0.0, false, 10.0, false);
    assert_eq!(r.adjusted_min(), 1.0);
    assert_eq!(r.adjusted_max(), 9.0);

    let r = NumberRange::closed(NumericKind::Double, 0.0, 10.0);
    assert_eq!(r.adjusted_min(), 0.0);
    assert_eq!(r.adjusted_max(), 10.0);

    let r = NumberRange::closed_open(NumericKind::Double, 0.0, 10.0);
    assert!(r.adjusted_max() < 10.0);
}

#[test]
fn degenerate_after_adjustment() {
    assert!(NumberRange::point(NumericKind::Double, 5.0).is_degenerate());
    assert!(NumberRange::new(NumericKind::Int, 4.0, false, 6.0, false).is_degenerate());
    assert!(!NumberRange::closed(NumericKind::Int, 4.0, 6.0).is_degenerate());
}

#[test]
fn display_shows_brackets_and_kind() {
    let r = NumberRange::new(NumericKind::Float, 0.0, false, 1.0, true);
    assert_eq!(r.to_string(), "(0, 1] float");
}

#[test]
fn serde_defaults_bounds_to_included() {
    let r: NumberRange =
        serde_json::from_str(r#"{"kind":"short","min":-3,"max":7,"max_included":false}"#)
            .unwrap();
    assert_eq!(r, NumberRange::closed_open(NumericKind::Short, -3.0, 7.0));
}

#[test]
fn serde_kind_names_go_through_from_str() {
    let r: NumberRange = serde_json::from_str(r#"{"kind":"I32","min":0,"max":9}"#).unwrap();
    assert_eq!(r.element_kind(), NumericKind::Int);
    assert_eq!(
        serde_json::to_value(r).unwrap()["kind"],
        serde_json::json!("int")
    );

    let err =
        serde_json::from_str::<NumberRange>(r#"{"kind":"bigdecimal","min":0,"max":1}"#).unwrap_err();
    assert!(err.to_string().contains("unsupported numeric kind: bigdecimal"));
}

#[test]
fn serde_keeps_nan_payload_bounds() {
    let nan = f64::from_bits(0xfff8_0000_0000_0007);
    let r = NumberRange::point(NumericKind::Double, nan);
    let json = serde_json::to_string(&r).unwrap();
    assert!(json.contains(r#""min":"NaN(fff8000000000007)""#), "{json}");

    let back: NumberRange = serde_json::from_str(&json).unwrap();
    assert_eq!(back.min().to_bits(), nan.to_bits());
    assert!(back.contains(nan));
}

#[test]
fn serde_keeps_infinite_bounds() {
    let r = NumberRange::closed(NumericKind::Double, f64::NEG_INFINITY, f64::INFINITY);
    let back: NumberRange = serde_json::from_str(&serde_json::to_string(&r).unwrap()).unwrap();
    assert_eq!(back, r);
}

#[test]
fn from_range_copies_every_property() {
    let r = NumberRange::new(NumericKind::UShort, 1.0, false, 9.0, true);
    let copy = NumberRange::from_range(&r);
    assert_eq!(copy, r);
    assert_eq!(copy.adjusted_min(), 2.0);
    assert_eq!(copy.to_string(), "(1, 9] ushort");
}
