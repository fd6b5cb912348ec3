use super::*;
use javadecl_model::{Method, Parameter, TypeKind, TypeRef};

fn class(name: &str) -> TypeDefinition {
    TypeDefinition::new(TypeRef::simple(name), TypeKind::Class)
}

fn visited_names(table: &TypeTable, name: &str) -> Vec<String> {
    let def = table.get(name).unwrap();
    let mut names = Vec::new();
    visit_ancestors(table, def, &mut |parent| names.push(parent.qualified_name().to_string()));
    names
}

#[test]
fn test_depth_first_supertypes_before_interfaces() {
    let table = TypeTable::from_definitions([
        class("p.Child")
            .with_super_types(vec![TypeRef::simple("p.Base")])
            .with_interfaces(vec![TypeRef::simple("p.Iface")]),
        class("p.Base").with_interfaces(vec![TypeRef::simple("p.BaseIface")]),
        class("p.BaseIface"),
        class("p.Iface"),
    ]);
    assert_eq!(
        visited_names(&table, "p.Child"),
        vec!["p.Base", "p.BaseIface", "p.Iface"]
    );
}

#[test]
fn test_unresolved_ancestors_are_skipped() {
    let table = TypeTable::from_definitions([
        class("p.Child").with_super_types(vec![
            TypeRef::simple("ext.Missing"),
            TypeRef::parametrized(TypeRef::simple("p.Base"), vec![TypeRef::STRING]),
        ]),
        class("p.Base"),
    ]);
    assert_eq!(visited_names(&table, "p.Child"), vec!["p.Base"]);
}

#[test]
fn test_diamond_and_cycle_visit_once() {
    let table = TypeTable::from_definitions([
        class("p.A").with_interfaces(vec![TypeRef::simple("p.B"), TypeRef::simple("p.C")]),
        class("p.B").with_interfaces(vec![TypeRef::simple("p.D")]),
        class("p.C").with_interfaces(vec![TypeRef::simple("p.D")]),
        class("p.D").with_interfaces(vec![TypeRef::simple("p.A")]),
    ]);
    assert_eq!(visited_names(&table, "p.A"), vec!["p.B", "p.D", "p.C"]);
}

#[test]
fn test_effective_ids_include_inherited_methods() {
    let get = Method::new("get", TypeRef::STRING, vec![Parameter::new("x", TypeRef::INT)]);
    let table = TypeTable::from_definitions([
        class("pkg.Base").with_members([
            get.into(),
            Method::constructor("Base", Vec::new()).into(),
        ]),
        class("pkg.Child").with_super_types(vec![TypeRef::simple("pkg.Base")]),
    ]);
    let ids = effective_method_ids(&table, table.get("pkg.Child").unwrap());
    assert!(ids.contains(&MethodId::new("get", true, vec!["number".to_string()])));
    assert_eq!(ids.len(), 1);
}
