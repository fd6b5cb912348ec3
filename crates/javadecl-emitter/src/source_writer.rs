//! Indentation-aware string builder for generated declarations.

/// Accumulates output text.
///
/// Indentation is explicit: `write_indent` emits the current level and
/// nothing is indented implicitly after `write_line`.
#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    indent_unit: String,
    indent_level: u32,
}

impl SourceWriter {
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self::with_capacity(0, indent_unit)
    }

    pub fn with_capacity(capacity: usize, indent_unit: impl Into<String>) -> Self {
        SourceWriter {
            output: String::with_capacity(capacity),
            indent_unit: indent_unit.into(),
            indent_level: 0,
        }
    }

    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    pub fn write_line(&mut self) {
        self.output.push('\n');
    }

    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.indent_unit);
        }
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn indent_level(&self) -> u32 {
        self.indent_level
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    pub fn finish(self) -> String {
        self.output
    }
}

#[cfg(test)]
#[path = "tests/source_writer_tests.rs"]
mod tests;
