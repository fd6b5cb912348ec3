use super::*;

#[test]
fn test_getter_property_names() {
    assert_eq!(getter_property_name("getSize"), "size");
    assert_eq!(getter_property_name("isEmpty"), "empty");
    assert_eq!(getter_property_name("getURL"), "uRL");
    assert_eq!(getter_property_name("name"), "name");
    assert_eq!(getter_property_name("get"), "get");
}

#[test]
fn test_setter_property_names() {
    assert_eq!(setter_property_name("setSize"), "size");
    assert_eq!(setter_property_name("set"), "set");
}

#[test]
fn test_getter_keeps_original_name() {
    let getter = Method::getter("getSize", TypeRef::INT);
    assert_eq!(getter.name, "size");
    assert_eq!(getter.original_name(), "getSize");
    assert!(getter.params.is_empty());
    assert!(getter.kind.is_accessor());
}

#[test]
fn test_setter_takes_one_parameter() {
    let setter = Method::setter("setSize", TypeRef::INT);
    assert_eq!(setter.name, "size");
    assert_eq!(setter.return_type, TypeRef::VOID);
    assert_eq!(setter.params, vec![Parameter::new("size", TypeRef::INT)]);
}

#[test]
fn test_demote_accessor_keeps_modifiers() {
    let getter = Method::getter("getSize", TypeRef::INT)
        .with_attrs(MemberAttrs::public().with_static(true).with_doc("Size."))
        .with_override(true);
    let demoted = getter.demote_accessor();
    assert_eq!(demoted.name, "getSize");
    assert_eq!(demoted.kind, MethodKind::Plain);
    assert!(demoted.attrs.is_static);
    assert!(demoted.is_override);
    assert_eq!(demoted.attrs.doc.as_deref(), Some("Size."));
    assert_eq!(demoted.return_type, TypeRef::INT);
}

#[test]
fn test_demote_leaves_plain_methods_alone() {
    let method = Method::new("size", TypeRef::INT, Vec::new());
    assert_eq!(method.clone().demote_accessor(), method);
}

#[test]
fn test_same_kind_ignores_payload() {
    let a = MethodKind::Getter {
        original_name: "getA".to_string(),
    };
    let b = MethodKind::Getter {
        original_name: "isB".to_string(),
    };
    assert!(a.same_kind(&b));
    assert!(!a.same_kind(&MethodKind::Plain));
}

#[test]
fn test_method_json_shape() {
    let json = r#"{
        "name": "size",
        "returnType": {"simple": "int"},
        "kind": "getter",
        "originalName": "getSize",
        "isOverride": true
    }"#;
    let method: Method = serde_json::from_str(json).unwrap();
    assert_eq!(method.original_name(), "getSize");
    assert!(method.attrs.is_public);
    assert!(!method.attrs.is_static);
    assert_eq!(method.return_type, TypeRef::INT);
}
