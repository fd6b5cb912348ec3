use super::*;
use javadecl_model::{MemberAttrs, TypeKind};

fn iface(name: &str) -> TypeDefinition {
    TypeDefinition::new(TypeRef::simple(name), TypeKind::Interface)
}

fn documented(name: &str, doc: &str) -> Method {
    Method::new(name, TypeRef::VOID, Vec::new()).with_attrs(MemberAttrs::public().with_doc(doc))
}

fn overriding(name: &str) -> Method {
    Method::new(name, TypeRef::VOID, Vec::new()).with_override(true)
}

fn doc_of(table: &TypeTable, owner: &str, index: usize) -> Option<String> {
    table
        .get(owner)
        .and_then(|def| def.member(index))
        .and_then(|member| member.attrs().doc.clone())
}

#[test]
fn test_copies_doc_from_interface() {
    let mut table = TypeTable::from_definitions([
        iface("p.Runnable").with_members([documented("run", "Runs it.").into()]),
        TypeDefinition::new(TypeRef::simple("p.Task"), TypeKind::Class)
            .with_interfaces(vec![TypeRef::simple("p.Runnable")])
            .with_members([overriding("run").into()]),
    ]);
    assert_eq!(backfill_docs(&mut table), 1);
    assert_eq!(doc_of(&table, "p.Task", 0).as_deref(), Some("Runs it."));
}

#[test]
fn test_superclasses_are_not_searched() {
    let table = TypeTable::from_definitions([
        TypeDefinition::new(TypeRef::simple("p.Base"), TypeKind::Class)
            .with_members([documented("run", "Base doc.").into()]),
        TypeDefinition::new(TypeRef::simple("p.Task"), TypeKind::Class)
            .with_super_types(vec![TypeRef::simple("p.Base")])
            .with_members([overriding("run").into()]),
    ]);
    assert!(inherited_docs(&table, table.get("p.Task").unwrap()).is_empty());
}

#[test]
fn test_searches_through_interface_ancestors() {
    let table = TypeTable::from_definitions([
        iface("p.Root").with_members([documented("close", "Closes.").into()]),
        iface("p.Mid").with_interfaces(vec![TypeRef::simple("p.Root")]),
        TypeDefinition::new(TypeRef::simple("p.Impl"), TypeKind::Class)
            .with_interfaces(vec![TypeRef::simple("p.Mid")])
            .with_members([overriding("close").into()]),
    ]);
    assert_eq!(
        inherited_docs(&table, table.get("p.Impl").unwrap()),
        vec![(0, "Closes.".to_string())]
    );
}

#[test]
fn test_requires_override_flag_and_missing_doc() {
    let table = TypeTable::from_definitions([
        iface("p.Runnable").with_members([documented("run", "Runs it.").into()]),
        TypeDefinition::new(TypeRef::simple("p.Task"), TypeKind::Class)
            .with_interfaces(vec![TypeRef::simple("p.Runnable")])
            .with_members([
                Method::new("run", TypeRef::VOID, Vec::new()).into(),
                documented("run", "Own doc.").with_override(true).into(),
                overriding("run")
                    .with_attrs(MemberAttrs::public().with_static(true))
                    .with_override(true)
                    .into(),
            ]),
    ]);
    assert!(inherited_docs(&table, table.get("p.Task").unwrap()).is_empty());
}

#[test]
fn test_kind_must_match() {
    let getter = Method::getter("getSize", TypeRef::INT)
        .with_attrs(MemberAttrs::public().with_doc("Getter doc."));
    let table = TypeTable::from_definitions([
        iface("p.Sized").with_members([getter.into()]),
        TypeDefinition::new(TypeRef::simple("p.Box"), TypeKind::Class)
            .with_interfaces(vec![TypeRef::simple("p.Sized")])
            .with_members([overriding("size").into()]),
    ]);
    assert!(inherited_docs(&table, table.get("p.Box").unwrap()).is_empty());
}

#[test]
fn test_undocumented_match_falls_through_to_next_interface() {
    let table = TypeTable::from_definitions([
        iface("p.First").with_members([Method::new("run", TypeRef::VOID, Vec::new()).into()]),
        iface("p.Second").with_members([documented("run", "Second doc.").into()]),
        TypeDefinition::new(TypeRef::simple("p.Task"), TypeKind::Class)
            .with_interfaces(vec![TypeRef::simple("p.First"), TypeRef::simple("p.Second")])
            .with_members([overriding("run").into()]),
    ]);
    assert_eq!(
        inherited_docs(&table, table.get("p.Task").unwrap()),
        vec![(0, "Second doc.".to_string())]
    );
}
