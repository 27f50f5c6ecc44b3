//! Multi-line document driver.
//!
//! A document is a sequence of physical lines. Blank lines and comment
//! lines are skipped; every remaining line is one independently parsed
//! rule ("block"). A malformed line is reported individually and never
//! affects the parsing of its siblings.
//!
//! # File header convention
//!
//! Persisted files may begin with consecutive `# `-prefixed header lines
//! (written by the export feature as `# UNICOMP v1.0`). Stripping that
//! header is the importer's job, not this driver's: [`parse_multi_line`]
//! never removes it, and because `#` lines are comments anyway a header
//! reaching this driver is skipped, not misparsed. [`strip_file_header`]
//! is provided for import paths that want the header gone before the text
//! reaches an editor buffer.

use serde::Serialize;

use crate::error::ParseError;
use crate::parser::parse;
use crate::types::ParseResult;

/// Aggregate outcome of parsing a whole document.
///
/// Request-scoped and disposable: recomputed from scratch on every edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiLineParseResult {
    pub blocks: Vec<ParsedBlock>,
    pub total_lines: usize,
    pub valid_count: usize,
    pub error_count: usize,
    pub error_lines: Vec<ErrorLine>,
}

/// One parsed rule line within a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedBlock {
    /// 1-based physical line number.
    pub line_number: usize,
    /// The original line, untrimmed.
    pub raw: String,
    pub result: ParseResult,
    /// Block name; defaults to `"Line {n}"` for valid blocks without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A failed line, collected for error panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLine {
    pub line_number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    pub message: String,
    pub raw: String,
}

/// Comment prefixes, matched at line start only. There is no multi-line
/// block-comment pairing.
const COMMENT_PREFIXES: &[&str] = &["#", "//", "--", "/*", "<!--", "'''", "\"\"\""];

/// Whether a trimmed line is a comment.
pub fn is_comment_line(trimmed: &str) -> bool {
    COMMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}

/// Parse a document: one rule per line, comments skipped, failures
/// isolated per line.
pub fn parse_multi_line(input: &str) -> MultiLineParseResult {
    let mut blocks = Vec::new();
    let mut error_lines = Vec::new();
    let mut valid_count = 0;
    let mut error_count = 0;
    let mut total_lines = 0;

    for (index, line) in input.split('\n').enumerate() {
        total_lines += 1;
        let line_number = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || is_comment_line(trimmed) {
            continue;
        }

        match parse(trimmed) {
            Ok(spec) => {
                valid_count += 1;
                let name = spec
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("Line {}", line_number));
                blocks.push(ParsedBlock {
                    line_number,
                    raw: line.to_string(),
                    result: Ok(spec),
                    name: Some(name),
                });
            }
            Err(error) => {
                error_count += 1;
                error_lines.push(ErrorLine {
                    line_number,
                    column: error.column(),
                    message: error.message().to_string(),
                    raw: line.to_string(),
                });
                blocks.push(ParsedBlock {
                    line_number,
                    raw: line.to_string(),
                    result: Err(error),
                    name: None,
                });
            }
        }
    }

    MultiLineParseResult {
        blocks,
        total_lines,
        valid_count,
        error_count,
        error_lines,
    }
}

/// Remove the consecutive leading `# `-prefixed header lines written by the
/// export convention. Returns the remainder of the input.
///
/// This is an import convenience; the parsing pipeline itself never calls
/// it (see the module docs).
pub fn strip_file_header(input: &str) -> &str {
    let mut rest = input;
    loop {
        let line_end = rest.find('\n').map(|i| i + 1).unwrap_or(rest.len());
        let line = &rest[..line_end];
        if line.trim_start().starts_with("# ") {
            rest = &rest[line_end..];
        } else {
            return rest;
        }
    }
}

/// Convenience for error layers: a [`ParseError`] plus the line it came
/// from, formatted the way editors expect.
pub fn describe_error(line_number: usize, error: &ParseError) -> String {
    match error.column() {
        Some(column) => format!("line {}, column {}: {}", line_number, column, error),
        None => format!("line {}: {}", line_number, error),
    }
}
