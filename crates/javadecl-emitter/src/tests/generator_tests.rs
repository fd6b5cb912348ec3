use super::*;
use javadecl_model::{TypeDefinition, TypeKind, TypeRef};

fn table() -> TypeTable {
    TypeTable::from_definitions([
        TypeDefinition::new(TypeRef::simple("org.example.util.List"), TypeKind::Interface),
        TypeDefinition::new(TypeRef::simple("org.example.Base"), TypeKind::Class),
        TypeDefinition::new(TypeRef::simple("com.other.Thing"), TypeKind::Class),
    ])
}

#[test]
fn test_one_file_per_group() {
    let files = DeclarationGenerator::default().generate(&table());
    let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["com.other.d.ts", "org.example.d.ts"]);
    assert_eq!(
        files[1].content,
        "declare module 'org.example' {\n  export class Base {\n  }\n}\n\n\
         declare module 'org.example.util' {\n  export class List {\n  }\n}\n"
    );
}

#[test]
fn test_index_file() {
    let generator = DeclarationGenerator::new(EmitOptions {
        emit_index: true,
        ..EmitOptions::default()
    });
    let files = generator.generate(&table());
    let index = files.last().unwrap();
    assert_eq!(index.name, INDEX_FILE);
    assert_eq!(
        index.content,
        "/// <reference path=\"com.other.d.ts\" />\n/// <reference path=\"org.example.d.ts\" />\n"
    );
}

#[test]
fn test_empty_table_has_no_index() {
    let generator = DeclarationGenerator::new(EmitOptions {
        emit_index: true,
        ..EmitOptions::default()
    });
    assert!(generator.generate(&TypeTable::new()).is_empty());
}

#[test]
fn test_custom_indent() {
    let generator = DeclarationGenerator::new(EmitOptions {
        indent: "\t".to_string(),
        emit_index: false,
    });
    let files = generator.generate(&table());
    assert!(files[0].content.contains("\texport class Thing {\n\t}\n"));
}
