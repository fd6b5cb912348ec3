//! End-to-end reconciliation over a small type graph.

use javadecl_model::{
    Field, Member, MemberAttrs, Method, MethodKind, Parameter, TypeDefinition, TypeKind, TypeRef,
    TypeTable,
};
use javadecl_reconcile::{
    MethodId, ReconcileStats, effective_method_ids, reconcile, remove_duplicates,
};

fn class(name: &str) -> TypeDefinition {
    TypeDefinition::new(TypeRef::simple(name), TypeKind::Class)
}

fn iface(name: &str) -> TypeDefinition {
    TypeDefinition::new(TypeRef::simple(name), TypeKind::Interface)
}

#[test]
fn child_without_members_exposes_inherited_get() {
    let get = Method::new("get", TypeRef::STRING, vec![Parameter::new("x", TypeRef::INT)]);
    let mut table = TypeTable::from_definitions([
        class("pkg.Base").with_members([get.into()]),
        class("pkg.Child").with_super_types(vec![TypeRef::simple("pkg.Base")]),
    ]);
    reconcile(&mut table);

    let child = table.get("pkg.Child").unwrap();
    // Nothing hides `get`, so it stays inherited rather than copied.
    assert!(child.members().is_empty());
    let ids = effective_method_ids(&table, child);
    assert!(ids.contains(&MethodId::new("get", true, vec!["number".to_string()])));
}

#[test]
fn child_declaring_get_receives_inherited_overload() {
    let get_int = Method::new("get", TypeRef::STRING, vec![Parameter::new("x", TypeRef::INT)]);
    let get_key = Method::new(
        "get",
        TypeRef::STRING,
        vec![Parameter::new("k", TypeRef::simple("pkg.Key"))],
    );
    let mut table = TypeTable::from_definitions([
        class("pkg.Base").with_members([get_int.into()]),
        class("pkg.Child")
            .with_super_types(vec![TypeRef::simple("pkg.Base")])
            .with_members([get_key.into()]),
    ]);
    let stats = reconcile(&mut table);
    assert_eq!(stats.overloads_restored, 1);

    let child = table.get("pkg.Child").unwrap();
    let ids: Vec<_> = child
        .members()
        .iter()
        .filter_map(Member::as_method)
        .map(MethodId::of)
        .collect();
    assert!(ids.contains(&MethodId::new("get", true, vec!["number".to_string()])));
}

#[test]
fn getter_conflicting_with_size_method_is_demoted() {
    let mut table = TypeTable::from_definitions([class("pkg.List").with_members([
        Method::getter("getSize", TypeRef::INT).into(),
        Method::new("size", TypeRef::INT, Vec::new()).into(),
    ])]);
    let stats = reconcile(&mut table);
    assert_eq!(stats.accessors_demoted, 1);

    let list = table.get("pkg.List").unwrap();
    let methods: Vec<_> = list.members().iter().filter_map(Member::as_method).collect();
    assert_eq!(methods[0].name, "getSize");
    assert_eq!(methods[0].kind, MethodKind::Plain);
    assert_eq!(methods[1].name, "size");
    assert_eq!(methods[1].kind, MethodKind::Plain);
    assert!(!list.members().iter().any(Member::is_accessor));
}

#[test]
fn widened_overloads_are_neither_copied_nor_kept_twice() {
    let put = |ty: TypeRef| Method::new("put", TypeRef::VOID, vec![Parameter::new("v", ty)]);
    let mut table = TypeTable::from_definitions([
        iface("pkg.Sink").with_members([put(TypeRef::INT).into(), put(TypeRef::FLOAT).into()]),
        class("pkg.Buffer")
            .with_interfaces(vec![TypeRef::simple("pkg.Sink")])
            .with_members([put(TypeRef::STRING).into(), put(TypeRef::BYTE).into()]),
    ]);
    let stats = reconcile(&mut table);
    // `put(int)` and `put(float)` on Sink both print as `put(number)`.
    assert_eq!(
        stats,
        ReconcileStats {
            overloads_restored: 0,
            docs_backfilled: 0,
            duplicates_removed: 1,
            accessors_demoted: 0,
        }
    );
    let sink = table.get("pkg.Sink").unwrap();
    assert_eq!(sink.members().len(), 1);
    assert_eq!(sink.members()[0].as_method().unwrap().params[0].ty, TypeRef::INT);
    assert_eq!(table.get("pkg.Buffer").unwrap().members().len(), 2);

    let mut buffer = table.get("pkg.Buffer").unwrap().clone();
    buffer.push_member(put(TypeRef::LONG).into());
    assert_eq!(remove_duplicates(&mut buffer), 1);
    assert_eq!(remove_duplicates(&mut buffer), 0);
}

#[test]
fn documentation_is_backfilled_before_members_are_tidied() {
    let run_doc = Method::new("run", TypeRef::VOID, Vec::new())
        .with_attrs(MemberAttrs::public().with_doc("Runs the task."));
    let mut table = TypeTable::from_definitions([
        iface("pkg.Runnable").with_members([run_doc.into()]),
        class("pkg.Task")
            .with_interfaces(vec![TypeRef::simple("pkg.Runnable")])
            .with_members([
                Method::new("run", TypeRef::VOID, Vec::new()).with_override(true).into(),
                Field::new("state", TypeRef::INT).into(),
            ]),
    ]);
    let stats = reconcile(&mut table);
    assert_eq!(stats.docs_backfilled, 1);
    let task = table.get("pkg.Task").unwrap();
    assert_eq!(
        task.members()[0].attrs().doc.as_deref(),
        Some("Runs the task.")
    );
}

#[test]
fn nested_types_are_tidied() {
    let inner = class("pkg.Outer.Inner").with_members([
        Method::getter("isOpen", TypeRef::BOOLEAN).into(),
        Method::new("open", TypeRef::VOID, Vec::new()).into(),
        Method::new("close", TypeRef::VOID, vec![Parameter::new("a", TypeRef::INT)]).into(),
        Method::new("close", TypeRef::VOID, vec![Parameter::new("b", TypeRef::DOUBLE)]).into(),
    ]);
    let mut table = TypeTable::from_definitions([class("pkg.Outer").with_members([inner.into()])]);
    let stats = reconcile(&mut table);
    assert_eq!(stats.duplicates_removed, 1);
    assert_eq!(stats.accessors_demoted, 1);

    let inner = table.get("pkg.Outer").unwrap().nested_types().next().unwrap();
    assert!(inner.has_member("isOpen"));
    assert_eq!(inner.members().len(), 3);
}
