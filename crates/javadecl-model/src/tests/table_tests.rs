use super::*;
use crate::definition::TypeKind;

fn def(name: &str) -> TypeDefinition {
    TypeDefinition::new(TypeRef::simple(name), TypeKind::Class)
}

#[test]
fn test_resolve_ignores_generic_arguments() {
    let table = TypeTable::from_definitions([def("a.Base")]);
    let ty = TypeRef::parametrized(TypeRef::simple("a.Base"), vec![TypeRef::STRING]);
    assert!(table.resolve(&ty).is_some());
    assert!(table.resolve(&TypeRef::simple("b.Missing")).is_none());
    assert!(table.resolve(&TypeRef::INT).is_none());
}

#[test]
fn test_preserves_input_order() {
    let table: TypeTable = [def("b.Two"), def("a.One"), def("c.Three")].into_iter().collect();
    let names: Vec<_> = table.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["b.Two", "a.One", "c.Three"]);
}

#[test]
fn test_duplicate_replaces_in_place() {
    let replacement = def("a.One").with_abstract(true);
    let table = TypeTable::from_definitions([def("a.One"), def("a.Two"), replacement]);
    assert_eq!(table.len(), 2);
    assert!(table.get("a.One").unwrap().is_abstract);
    assert_eq!(table.iter().next().unwrap().0, "a.One");
}
