use super::*;
use once_cell::sync::Lazy;
use serde_json::json;

struct Base {
    label: &'static str,
}

struct Derived {
    base: Base,
    extra: u32,
}

fn base_table() -> MemberTable<Base> {
    MemberTable::<Base>::new()
        .constant("FOO", "base foo")
        .constant("SHARED", "base shared")
        .field("label", |e| e.label)
        .method("shout", |e| Ok(e.label.to_uppercase()))
}

#[test]
fn test_constants_match_exactly() {
    let table = base_table();
    assert!(table.has_constant("FOO"));
    assert!(!table.has_constant("foo"));
    assert_eq!(table.get_constant("FOO"), Some(json!("base foo")));
    assert_eq!(table.get_constant("MISSING"), None);
}

#[test]
fn test_fields_read_placeholder_state() {
    let table = base_table();
    let instance = Base { label: "hello" };
    assert!(table.has_field("label"));
    assert!(!table.has_field("Label"));
    assert_eq!(table.read_field(&instance, "label"), Some(json!("hello")));
    assert_eq!(table.read_field(&instance, "missing"), None);
}

#[test]
fn test_methods_match_ignoring_ascii_case() {
    let table = base_table();
    let instance = Base { label: "hi" };
    assert!(table.has_method("shout"));
    assert!(table.has_method("SHOUT"));
    assert!(table.has_method("ShOuT"));
    let value = table
        .invoke(&instance, "Shout")
        .expect("method declared")
        .expect("method succeeds");
    assert_eq!(value, json!("HI"));
    assert!(table.invoke(&instance, "whisper").is_none());
}

#[test]
fn test_method_errors_are_returned() {
    let table = MemberTable::<Base>::new().method("broken", |_| -> anyhow::Result<u32> {
        Err(anyhow::anyhow!("boom"))
    });
    let instance = Base { label: "" };
    let err = table
        .invoke(&instance, "broken")
        .expect("method declared")
        .expect_err("method fails");
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn test_len_counts_all_tiers() {
    assert_eq!(base_table().len(), 4);
    assert!(MemberTable::<Base>::new().is_empty());
    assert!(MemberTable::<Base>::default().is_empty());
}

#[test]
fn test_extending_inherits_and_overrides() {
    static PARENT: Lazy<MemberTable<Base>> = Lazy::new(base_table);

    let table = MemberTable::<Derived>::extending(&PARENT, |e| &e.base)
        .constant("SHARED", "derived shared")
        .field("extra", |e| e.extra);

    let instance = Derived {
        base: Base { label: "inner" },
        extra: 7,
    };

    assert_eq!(table.get_constant("FOO"), Some(json!("base foo")));
    assert_eq!(table.get_constant("SHARED"), Some(json!("derived shared")));
    assert_eq!(table.read_field(&instance, "label"), Some(json!("inner")));
    assert_eq!(table.read_field(&instance, "extra"), Some(json!(7)));
    let shouted = table
        .invoke(&instance, "shout")
        .expect("inherited method")
        .expect("method succeeds");
    assert_eq!(shouted, json!("INNER"));

    // The parent is untouched.
    assert!(!PARENT.has_field("extra"));
    assert_eq!(PARENT.get_constant("SHARED"), Some(json!("base shared")));
}

#[test]
fn test_table_source_blanket_impl() {
    use crate::test_fixtures::Sample;
    use crate::{Enumeration, MemberSource};

    assert!(Sample::has_constant("BAR"));
    assert!(Sample::has_field("otherFoo"));
    assert!(Sample::has_method("OTHERLORUM"));
    assert_eq!(
        Sample::placeholder().field("otherFoo"),
        Some(json!("other foo"))
    );
    let value = Sample::placeholder()
        .invoke_method("lorum")
        .expect("declared")
        .expect("succeeds");
    assert_eq!(value, json!("lorum"));
}
