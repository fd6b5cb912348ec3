use super::*;

#[test]
fn test_indentation_is_explicit() {
    let mut writer = SourceWriter::new("  ");
    writer.write("a {");
    writer.write_line();
    writer.increase_indent();
    writer.write_indent();
    writer.write("b;");
    writer.write_line();
    writer.decrease_indent();
    writer.write_indent();
    writer.write("}");
    assert_eq!(writer.finish(), "a {\n  b;\n}");
}

#[test]
fn test_decrease_saturates_at_zero() {
    let mut writer = SourceWriter::new("\t");
    writer.decrease_indent();
    assert_eq!(writer.indent_level(), 0);
    writer.increase_indent();
    writer.increase_indent();
    writer.write_indent();
    assert_eq!(writer.get_output(), "\t\t");
}
