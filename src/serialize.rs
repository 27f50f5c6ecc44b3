//! Canonical serializer: the reverse mapping from [`UniCompSpec`] to rule
//! text.
//!
//! Serialization is one-directional canonicalization. The parser accepts
//! input conveniences (`x`/`X` separators, single quotes, insignificant
//! whitespace); the serializer always emits the one canonical form: `×`
//! separators, double quotes, no whitespace. Round-tripping text through
//! `parse` then [`stringify`] is therefore idempotent but not necessarily
//! byte-identical to the original input.
//!
//! Only parameters in the fixed emission order — color, opacity, rotate,
//! flip, font, id, class, name, scale — are serialized; margin, position,
//! and transition are editor-side-only and do not survive a round trip.

use std::fmt::Write;

use crate::parser::token::is_reserved;
use crate::types::{SymbolSpec, UniCompSpec};

/// Serialize a spec to canonical rule text.
pub fn stringify(spec: &UniCompSpec) -> String {
    let mut out = String::new();

    if spec.is_square() {
        let _ = write!(out, "({})", spec.grid_width);
    } else {
        let _ = write!(out, "({}×{})", spec.grid_width, spec.grid_height);
    }
    out.push(':');

    let mut first = true;
    for symbol in &spec.symbols {
        if !first {
            out.push(';');
        }
        first = false;
        write_symbol(&mut out, symbol);
    }

    out
}

fn write_symbol(out: &mut String, symbol: &SymbolSpec) {
    if needs_quoting(&symbol.glyph) {
        out.push_str(&quote(&symbol.glyph));
    } else {
        out.push_str(&symbol.glyph);
    }

    let mut params: Vec<String> = Vec::new();
    if let Some(color) = &symbol.color {
        params.push(string_param("c", color, false));
    }
    if let Some(opacity) = symbol.opacity {
        params.push(format!("a={}", opacity));
    }
    if let Some(rotate) = symbol.rotate {
        params.push(format!("r={}", rotate));
    }
    if let Some(flip) = symbol.flip {
        params.push(string_param("f", flip.as_str(), false));
    }
    if let Some(font) = &symbol.font_family {
        params.push(string_param("font", font, true));
    }
    if let Some(id) = &symbol.id {
        params.push(string_param("id", id, true));
    }
    if let Some(class) = &symbol.class_name {
        params.push(string_param("class", class, true));
    }
    if let Some(name) = &symbol.name {
        params.push(string_param("n", name, true));
    }
    if let Some(scale) = symbol.scale {
        if scale.is_uniform() {
            params.push(format!("s={}", scale.x));
        } else {
            params.push(format!("s={},{}", scale.x, scale.y));
        }
    }

    if !params.is_empty() {
        out.push('[');
        out.push_str(&params.join(";"));
        out.push(']');
    }

    let _ = write!(out, "{}-{}", symbol.start, symbol.end);
}

/// One `key=value` entry. String-typed keys are always quoted; other
/// string values only when longer than one character.
fn string_param(key: &str, value: &str, always_quote: bool) -> String {
    if always_quote || value.chars().count() > 1 {
        format!("{}={}", key, quote(value))
    } else {
        format!("{}={}", key, value)
    }
}

/// Whether a glyph must be double-quoted: digits and reserved punctuation
/// would otherwise tokenize structurally, and multi-character literals
/// would split.
fn needs_quoting(glyph: &str) -> bool {
    let mut chars = glyph.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_digit() || is_reserved(c),
        _ => true,
    }
}

/// Double-quote a string, escaping the characters the tokenizer unescapes.
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
