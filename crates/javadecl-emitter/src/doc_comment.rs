//! Documentation comment translation.
//!
//! Raw source documentation arrives with its HTML markup and inline tags
//! intact. Text lines are reduced to plain text: gutters and tags are
//! stripped, entities decoded, `{@code}`/`{@literal}` turned into
//! backtick spans and `{@link}` into its label or target. `<pre>` blocks
//! and `{@code` blocks that span several lines are copied unchanged,
//! including any `*/` they contain.

use memchr::{memchr, memchr3, memmem};

use crate::source_writer::SourceWriter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Block {
    Text,
    Pre,
    /// Inside a multi-line `{@code`, with the current brace depth.
    Code(i64),
}

/// Translates raw documentation into comment lines without the comment
/// delimiters. Blank lines at either end are dropped and runs of blank
/// text lines are collapsed.
pub fn translate(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut block = Block::Text;
    for line in split_lines(strip_delimiters(raw)) {
        let line = strip_gutter(line);
        match block {
            Block::Pre => {
                if contains_ignore_case(line, "</pre>") {
                    block = Block::Text;
                }
                out.push(line.trim_end().to_string());
            }
            Block::Code(depth) => {
                let depth = depth + brace_balance(line);
                block = if depth > 0 { Block::Code(depth) } else { Block::Text };
                out.push(line.trim_end().to_string());
            }
            Block::Text => {
                if contains_ignore_case(line, "<pre") {
                    if !contains_ignore_case(line, "</pre>") {
                        block = Block::Pre;
                    }
                    out.push(line.trim_end().to_string());
                } else if let Some(depth) = unclosed_code_depth(line) {
                    block = Block::Code(depth);
                    out.push(line.trim_end().to_string());
                } else {
                    for part in render_inline(line).split('\n') {
                        push_text(&mut out, part.trim());
                    }
                }
            }
        }
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    let leading = out.iter().take_while(|l| l.is_empty()).count();
    out.drain(..leading);
    out
}

/// Writes `raw` as a block comment at the writer's current indentation.
/// Nothing is written when the translation is empty.
pub fn write_doc_comment(writer: &mut SourceWriter, raw: &str) {
    let lines = translate(raw);
    if lines.is_empty() {
        return;
    }
    writer.write_indent();
    writer.write("/**");
    writer.write_line();
    for line in &lines {
        writer.write_indent();
        if line.is_empty() {
            writer.write(" *");
        } else {
            writer.write(" * ");
            writer.write(line);
        }
        writer.write_line();
    }
    writer.write_indent();
    writer.write(" */");
    writer.write_line();
}

fn push_text(out: &mut Vec<String>, line: &str) {
    if line.is_empty() && out.last().is_some_and(|l| l.is_empty()) {
        return;
    }
    out.push(line.to_string());
}

fn strip_delimiters(raw: &str) -> &str {
    let raw = raw.trim();
    let raw = raw.strip_prefix("/**").unwrap_or(raw);
    raw.strip_suffix("*/").unwrap_or(raw)
}

fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    while let Some(offset) = memchr(b'\n', &bytes[start..]) {
        let end = start + offset;
        lines.push(text[start..end].trim_end_matches('\r'));
        start = end + 1;
    }
    lines.push(text[start..].trim_end_matches('\r'));
    lines
}

/// Removes a leading `*` gutter and the single space after it.
fn strip_gutter(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}

/// `needle` must be lowercase ASCII.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    memmem::find(haystack.to_ascii_lowercase().as_bytes(), needle.as_bytes()).is_some()
}

fn brace_balance(text: &str) -> i64 {
    text.bytes().fold(0, |depth, b| match b {
        b'{' => depth + 1,
        b'}' => depth - 1,
        _ => depth,
    })
}

/// Index of the brace closing the one at `open`.
fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0i64;
    for (i, b) in text.bytes().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Brace depth left open by a `{@code` that does not close on this line.
fn unclosed_code_depth(line: &str) -> Option<i64> {
    let bytes = line.as_bytes();
    let mut from = 0;
    while let Some(offset) = memmem::find(&bytes[from..], b"{@code") {
        let start = from + offset;
        match matching_brace(line, start) {
            Some(end) => from = end + 1,
            None => return Some(brace_balance(&line[start..])),
        }
    }
    None
}

fn render_inline(line: &str) -> String {
    let line = line.trim();
    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;
    while let Some(offset) = memchr3(b'{', b'<', b'&', &bytes[i..]) {
        let at = i + offset;
        out.push_str(&line[i..at]);
        let next = match bytes[at] {
            b'{' => inline_tag(line, at, &mut out),
            b'<' => html_tag(line, at, &mut out),
            _ => entity(line, at, &mut out),
        };
        i = match next {
            Some(next) => next,
            None => {
                out.push(char::from(bytes[at]));
                at + 1
            }
        };
    }
    out.push_str(&line[i..]);
    out
}

/// `{@tag body}` starting at `at`. Returns the index after the closing
/// brace, or `None` when this is not a complete inline tag.
fn inline_tag(line: &str, at: usize, out: &mut String) -> Option<usize> {
    if !line[at..].starts_with("{@") {
        return None;
    }
    let end = matching_brace(line, at)?;
    let inner = &line[at + 2..end];
    let (tag, body) = inner.split_once(char::is_whitespace).unwrap_or((inner, ""));
    match tag {
        "code" | "literal" => {
            out.push('`');
            out.push_str(body);
            out.push('`');
        }
        "link" | "linkplain" => {
            let body = body.trim();
            let (target, label) = body.split_once(char::is_whitespace).unwrap_or((body, ""));
            let label = label.trim();
            if label.is_empty() {
                out.push_str(&link_target(target));
            } else {
                out.push_str(label);
            }
        }
        "value" => out.push_str(&link_target(body.trim())),
        "inheritDoc" => {}
        _ => out.push_str(body.trim()),
    }
    Some(end + 1)
}

/// `A#b` reads as `A.b`, `#b` as `b`.
fn link_target(target: &str) -> String {
    target.trim_start_matches('#').replace('#', ".")
}

fn html_tag(line: &str, at: usize, out: &mut String) -> Option<usize> {
    let bytes = line.as_bytes();
    let first = *bytes.get(at + 1)?;
    if !(first.is_ascii_alphabetic() || first == b'/' || first == b'!') {
        return None;
    }
    let end = at + memchr(b'>', &bytes[at..])?;
    let tag = &line[at + 1..end];
    let closing = tag.starts_with('/');
    let name: String = tag
        .trim_start_matches('/')
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase();
    match name.as_str() {
        "p" | "br" => out.push_str("\n\n"),
        "li" if !closing => {
            if !out.trim().is_empty() {
                out.push('\n');
            }
            out.push_str("- ");
        }
        _ => {}
    }
    Some(end + 1)
}

const NAMED_ENTITIES: &[(&str, char)] = &[
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&amp;", '&'),
    ("&quot;", '"'),
    ("&apos;", '\''),
    ("&nbsp;", ' '),
];

fn entity(line: &str, at: usize, out: &mut String) -> Option<usize> {
    let rest = &line[at..];
    if let Some((name, ch)) = NAMED_ENTITIES.iter().find(|(name, _)| rest.starts_with(name)) {
        out.push(*ch);
        return Some(at + name.len());
    }
    let digits = rest.strip_prefix("&#")?;
    let semi = memchr(b';', digits.as_bytes())?;
    let code = match digits[..semi].strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits[..semi].parse::<u32>().ok()?,
    };
    out.push(char::from_u32(code)?);
    Some(at + 2 + semi + 1)
}

#[cfg(test)]
#[path = "tests/doc_comment_tests.rs"]
mod tests;
