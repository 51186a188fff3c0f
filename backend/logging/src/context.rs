//! Context rendering.
//!
//! Turns an arbitrary JSON value into `key: literal` lines. Nested objects and
//! arrays are bracketed and every nesting level adds one indent.

use serde_json::Value;

/// One level of indentation.
pub const INDENT: &str = "    ";

/// Null, `[]` and `{}` carry nothing worth appending to a log line.
pub fn is_empty(context: &Value) -> bool {
    match context {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Renders `context` as an unindented block with trailing whitespace trimmed.
///
/// Objects yield one line per entry in insertion order. Arrays are keyed by
/// index, and a bare scalar is keyed `0`.
pub fn render(context: &Value) -> String {
    let mut out = String::new();
    match context {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                write_entry(&mut out, key, value, 0);
            }
        }
        Value::Array(items) => {
            for (i, value) in items.iter().enumerate() {
                write_entry(&mut out, &i.to_string(), value, 0);
            }
        }
        scalar => write_entry(&mut out, "0", scalar, 0),
    }
    out.truncate(out.trim_end().len());
    out
}

/// Prefixes every line of `block` with [`INDENT`].
pub fn indent(block: &str) -> String {
    let mut out = String::with_capacity(block.len() + INDENT.len());
    for (i, line) in block.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(INDENT);
        out.push_str(line);
    }
    out
}

fn write_entry(out: &mut String, key: &str, value: &Value, depth: usize) {
    push_indent(out, depth);
    out.push_str(key);
    out.push_str(": ");
    write_literal(out, value, depth);
    out.push('\n');
}

fn write_literal(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{\n");
            for (key, nested) in map {
                write_entry(out, key, nested, depth + 1);
            }
            push_indent(out, depth);
            out.push('}');
        }
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push_str("[\n");
            for nested in items {
                push_indent(out, depth + 1);
                write_literal(out, nested, depth + 1);
                out.push('\n');
            }
            push_indent(out, depth);
            out.push(']');
        }
        // Display on a scalar Value is its JSON literal, strings quoted and escaped.
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
