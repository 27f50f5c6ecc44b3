//! Fmt command implementation.
//!
//! Rewrites documents into canonical form: every rule line is parsed and
//! re-serialized (`×` separators, double quotes, fixed parameter order, no
//! insignificant whitespace). Comment and blank lines pass through
//! untouched. Any malformed rule aborts the command — formatting never
//! guesses at broken input.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, UniCompError};
use crate::output::{display_path, plural, Printer};
use crate::parser::{describe_error, is_comment_line, parse};
use crate::serialize::stringify;

/// Rewrite documents into canonical form
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Files to format
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Rewrite files in place instead of printing to stdout
    #[arg(long)]
    pub write: bool,
}

pub fn run(args: FmtArgs) -> Result<()> {
    let printer = Printer::new();

    for path in &args.files {
        let source = std::fs::read_to_string(path).map_err(|e| UniCompError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let (formatted, rule_count) = format_document(&source).map_err(|message| {
            UniCompError::Validation {
                message: format!("{}: {}", display_path(path), message),
                help: Some("fix the rule or run `unicomp check` for details".to_string()),
            }
        })?;

        if args.write {
            std::fs::write(path, &formatted).map_err(|e| UniCompError::Io {
                path: path.clone(),
                message: e.to_string(),
            })?;
            printer.status(
                "Formatted",
                &format!("{} ({})", display_path(path), plural(rule_count, "rule", "rules")),
            );
        } else {
            print!("{}", formatted);
        }
    }

    Ok(())
}

/// Canonicalize every rule line of a document; comments and blanks are
/// preserved verbatim. Returns the new text and the number of rules.
fn format_document(source: &str) -> std::result::Result<(String, usize), String> {
    let mut out = String::with_capacity(source.len());
    let mut rule_count = 0;

    for (index, line) in source.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || is_comment_line(trimmed) {
            out.push_str(line);
            continue;
        }

        match parse(trimmed) {
            Ok(spec) => {
                out.push_str(&stringify(&spec));
                rule_count += 1;
            }
            Err(error) => return Err(describe_error(index + 1, &error)),
        }
    }

    Ok((out, rule_count))
}
