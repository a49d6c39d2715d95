use super::*;
use crate::ErrorKind;
use crate::test_fixtures::{Sample, Shadowed, Values};
use serde_json::json;

#[test]
fn test_get_returns_same_instance_for_every_spelling() {
    let canonical = get::<Sample>("OTHER_FOO").expect("declared");
    for spelling in ["other_foo", "Other_FoO", "otherFoo", "OtherFoo", "other foo"] {
        let member = get::<Sample>(spelling).expect("declared");
        assert!(std::ptr::eq(member, canonical), "{spelling}");
    }
}

#[test]
fn test_get_by_owned_string() {
    let name = String::from("bar");
    let member = get::<Sample>(&name).expect("declared");
    assert_eq!(member.name(), "BAR");
    assert_eq!(member.value(), &json!("bar"));
}

#[test]
fn test_get_by_member_instance() {
    let member = get::<Sample>("lorum").expect("declared");
    let again = get::<Sample>(member).expect("own member");
    assert!(std::ptr::eq(member, again));
}

#[test]
fn test_get_rejects_member_of_other_class() {
    let foreign = get::<Values>("VALUE_STRING").expect("declared");
    let err = get::<Sample>(foreign).expect_err("foreign member");
    assert_eq!(err.kind(), ErrorKind::InvalidMember);
    assert!(err.to_string().starts_with("Instance is not an enum member of"));
}

#[test]
fn test_get_reserved_names() {
    for name in ["_name", "_NAME", "_value", "_instances"] {
        let err = get::<Sample>(name).expect_err("reserved");
        assert_eq!(err.kind(), ErrorKind::InvalidMember, "{name}");
        assert!(
            err.to_string()
                .starts_with(&format!("{name} is not an enum member of"))
        );
    }
}

#[test]
fn test_get_unknown_reports_requested_spelling() {
    let err = get::<Sample>("bleepBloop").expect_err("unknown");
    assert_eq!(err.kind(), ErrorKind::UnknownMember);
    let message = err.to_string();
    assert!(
        message.starts_with("bleepBloop is not an enum member of"),
        "{message}"
    );
    assert!(message.contains("Sample"), "{message}");
}

#[test]
fn test_get_precedence() {
    assert_eq!(get::<Shadowed>("FOO").expect("declared").value(), &json!("foo const"));
    assert_eq!(get::<Shadowed>("bar").expect("declared").value(), &json!("bar field"));
    assert_eq!(get::<Shadowed>("Baz").expect("declared").value(), &json!("baz method"));
}

#[test]
fn test_has_by_name() {
    for name in [
        "FOO", "foo", "OTHER_FOO", "other_foo", "Other_FoO", "otherFoo", "OtherFoo", "BAR",
        "bar", "OTHER_BAR", "other_bar", "Other_BaR", "otherBar", "OtherBar", "LORUM", "lorum",
        "OTHER_LORUM", "other_lorum", "Other_LoRum", "otherLorum", "OtherLorum", "LorUM",
        "OtHErLOrum",
    ] {
        assert!(has::<Sample>(name), "{name}");
    }
}

#[test]
fn test_has_by_invalid_name() {
    for name in [
        "bleep",
        "_name",
        "_NAME",
        "_value",
        "_VALUE",
        "_instances",
        "_INSTANCES",
        "FoO",
        "OtHerFoO",
        "BaR",
        "OtHErBar",
    ] {
        assert!(!has::<Sample>(name), "{name}");
    }
}

#[test]
fn test_has_agrees_with_get() {
    for name in [
        "FOO", "otherFoo", "OtHErLOrum", "LorUM", "FoO", "bleep", "_name", "other bar", "BaR",
    ] {
        assert_eq!(has::<Sample>(name), get::<Sample>(name).is_ok(), "{name}");
    }
}

#[test]
fn test_has_by_member_instance() {
    let own = get::<Sample>("BAR").expect("declared");
    let foreign = get::<Values>("VALUE_INT").expect("declared");
    assert!(has::<Sample>(own));
    assert!(!has::<Sample>(foreign));
    assert!(has::<Values>(foreign));
}

#[test]
fn test_call_forwards_to_get() {
    let via_call = call::<Sample>("OtherLorum").expect("declared");
    let via_get = get::<Sample>("OTHER_LORUM").expect("declared");
    assert!(std::ptr::eq(via_call, via_get));
}

#[test]
fn test_call_resignals_lookup_failures() {
    let err = call::<Sample>("BLEEP").expect_err("unknown");
    assert_eq!(err.kind(), ErrorKind::BadCall);
    assert_eq!(
        err.to_string(),
        get::<Sample>("BLEEP").expect_err("unknown").to_string()
    );
    let source = std::error::Error::source(&err).expect("wrapped lookup error");
    assert!(source.to_string().starts_with("BLEEP is not an enum member of"));

    let err = call::<Sample>("_NAME").expect_err("reserved");
    assert_eq!(err.kind(), ErrorKind::BadCall);
    assert!(err.to_string().starts_with("_NAME is not an enum member of"));
}

#[test]
fn test_enum_access_extension() {
    let member = Sample::get("foo").expect("declared");
    assert!(Sample::has(member));
    assert!(Sample::owns(member));
    assert!(!Values::owns(member));
    assert!(std::ptr::eq(Sample::call("FOO").expect("declared"), member));
    assert!(Sample::has("foo"));
    assert!(!Sample::has("_foo"));
}
