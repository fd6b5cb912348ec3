use super::*;
use javadecl_model::{MemberAttrs, TypeKind, TypeRef};

fn class(name: &str) -> TypeDefinition {
    TypeDefinition::new(TypeRef::simple(name), TypeKind::Class)
}

fn module_names(modules: &[Module<'_>]) -> Vec<String> {
    modules.iter().map(|m| m.name.clone()).collect()
}

#[test]
fn test_partition_by_namespace() {
    let table = TypeTable::from_definitions([
        class("org.b.Two"),
        class("org.a.One"),
        class("org.a.Three"),
    ]);
    let modules = partition(&table);
    assert_eq!(module_names(&modules), vec!["org.a", "org.b"]);
    let names: Vec<_> = modules[0].types.iter().map(|d| d.simple_name()).collect();
    assert_eq!(names, vec!["One", "Three"]);
}

#[test]
fn test_nested_types_use_their_own_namespace() {
    let inner = class("org.a.Outer.Inner").with_members([class("org.a.Outer.Inner.Deep").into()]);
    let table = TypeTable::from_definitions([class("org.a.Outer").with_members([inner.into()])]);
    assert_eq!(
        module_names(&partition(&table)),
        vec!["org.a", "org.a.Outer", "org.a.Outer.Inner"]
    );
}

#[test]
fn test_non_public_and_default_namespace_types_are_skipped() {
    let hidden = class("org.a.Outer.Hidden")
        .with_attrs(MemberAttrs::public().with_public(false))
        .with_members([class("org.a.Outer.Hidden.Deeper").into()]);
    let table = TypeTable::from_definitions([
        class("org.a.Outer").with_members([hidden.into()]),
        class("Bare"),
    ]);
    assert_eq!(module_names(&partition(&table)), vec!["org.a"]);
}

#[test]
fn test_file_keys() {
    assert_eq!(file_key("org.example.util.concurrent"), "org.example");
    assert_eq!(file_key("org.example"), "org.example");
    assert_eq!(file_key("org"), "org");
}

#[test]
fn test_group_files() {
    let table = TypeTable::from_definitions([
        class("org.example.util.List"),
        class("org.example.Base"),
        class("com.other.Thing"),
        class("org.example.io.File"),
    ]);
    let files = group_files(partition(&table));
    let keys: Vec<_> = files.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["com.other", "org.example"]);
    assert_eq!(files[1].file_name(), "org.example.d.ts");
    assert_eq!(
        module_names(&files[1].modules),
        vec!["org.example", "org.example.io", "org.example.util"]
    );
}
