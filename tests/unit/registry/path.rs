use super::*;

#[test]
fn parses_keys_and_indices() {
    let p = HandlePath::parse("leafs.2").unwrap();
    assert_eq!(
        p.segments(),
        &[PathSegment::Key("leafs".into()), PathSegment::Index(2)]
    );
    assert_eq!(p.to_string(), "leafs.2");
}

#[test]
fn leading_digits_are_a_key() {
    let p = HandlePath::parse("0.1").unwrap();
    assert_eq!(
        p.segments(),
        &[PathSegment::Key("0".into()), PathSegment::Index(1)]
    );
}

#[test]
fn mixed_segments_stay_keys() {
    let p: HandlePath = "circles.1a".parse().unwrap();
    assert_eq!(p.segments()[1], PathSegment::Key("1a".into()));
}

#[test]
fn rejects_empty_paths_and_segments() {
    assert!(HandlePath::parse("").is_err());
    assert!(HandlePath::parse("a..b").is_err());
    assert!(HandlePath::parse(".a").is_err());
    assert!(HandlePath::parse("a.").is_err());
    assert!(HandlePath::parse("a.99999999999999999999999").is_err());
}

#[test]
fn child_index_appends_slot() {
    let p = HandlePath::parse("circles").unwrap().child_index(11);
    assert_eq!(p.to_string(), "circles.11");
}

#[test]
fn list_indices_are_bounded() {
    assert!(HandlePath::parse(&format!("leafs.{MAX_LIST_INDEX}")).is_ok());
    assert!(HandlePath::parse(&format!("leafs.{}", MAX_LIST_INDEX + 1)).is_err());
    assert!(HandlePath::parse("leafs.18446744073709551615").is_err());
}
