use super::*;
use crate::modules::Module;
use javadecl_model::{Field, Member, TypeDefinition, TypeKind, WildcardBound};

fn names_for(refs: &[TypeRef]) -> ImportTable {
    let def = TypeDefinition::new(TypeRef::simple("a.Host"), TypeKind::Class).with_members(
        refs.iter()
            .enumerate()
            .map(|(i, ty)| Member::from(Field::new(format!("f{i}"), ty.clone()))),
    );
    ImportTable::resolve(&Module {
        name: "a".to_string(),
        types: vec![&def],
    })
}

#[test]
fn test_primitives() {
    let names = ImportTable::default();
    let printer = TypePrinter::new(&names);
    let cases = [
        (TypeRef::VOID, "void"),
        (TypeRef::BOOLEAN, "boolean"),
        (TypeRef::BYTE, "number"),
        (TypeRef::SHORT, "number"),
        (TypeRef::INT, "number"),
        (TypeRef::LONG, "number"),
        (TypeRef::FLOAT, "number"),
        (TypeRef::DOUBLE, "number"),
        (TypeRef::CHAR, "string"),
        (TypeRef::STRING, "string"),
        (TypeRef::OBJECT, "any"),
    ];
    for (ty, expected) in cases {
        assert_eq!(printer.print_type(&ty), expected, "{ty}");
    }
}

#[test]
fn test_composite_types() {
    let list = TypeRef::parametrized(
        TypeRef::simple("java.util.Map"),
        vec![
            TypeRef::STRING,
            TypeRef::wildcard(WildcardBound::Extends(TypeRef::simple("b.Item"))),
        ],
    );
    let names = names_for(&[list.clone()]);
    let printer = TypePrinter::new(&names);
    assert_eq!(printer.print_type(&list), "Map<string, Item>");
    assert_eq!(
        printer.print_type(&TypeRef::array(TypeRef::simple("b.Item"), 2)),
        "Item[][]"
    );
}

#[test]
fn test_nullable() {
    let names = ImportTable::default();
    let printer = TypePrinter::new(&names);
    assert_eq!(printer.print_type(&TypeRef::STRING.nullable()), "string | null");
    assert_eq!(
        printer.print_type(&TypeRef::array(TypeRef::INT.nullable(), 1)),
        "(number | null)[]"
    );
}

#[test]
fn test_unknown_names_are_flattened() {
    let names = ImportTable::default();
    let printer = TypePrinter::new(&names);
    assert_eq!(printer.print_type(&TypeRef::simple("x.y.Z")), "x_y_Z");
    assert_eq!(printer.print_type(&TypeRef::simple("T")), "T");
}

#[test]
fn test_aliased_names() {
    let names = names_for(&[TypeRef::simple("a.Foo"), TypeRef::simple("b.Foo")]);
    let printer = TypePrinter::new(&names);
    assert_eq!(printer.print_type(&TypeRef::simple("b.Foo")), "b_Foo");
    assert_eq!(printer.print_type(&TypeRef::simple("a.Foo")), "Foo");
}

#[test]
fn test_type_params() {
    let names = ImportTable::default();
    let printer = TypePrinter::new(&names);
    assert_eq!(printer.print_type_params(&[]), "");
    let params = [
        TypeParam::new("K"),
        TypeParam::bounded("V", TypeRef::simple("java.lang.Comparable")),
    ];
    assert_eq!(
        printer.print_type_params(&params),
        "<K, V extends java_lang_Comparable>"
    );
}
