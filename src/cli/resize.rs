//! Resize command implementation.
//!
//! Applies the clamp-based grid-resize transform to every rule line of a
//! document. Comment and blank lines pass through untouched.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, UniCompError};
use crate::geometry::resize_grid;
use crate::output::{display_path, plural, Printer};
use crate::parser::{describe_error, is_comment_line};

/// Re-target documents onto a grid of different dimensions
#[derive(Args, Debug)]
pub struct ResizeArgs {
    /// Files to resize
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// New grid width
    #[arg(short = 'W', long)]
    pub width: usize,

    /// New grid height
    #[arg(short = 'H', long)]
    pub height: usize,

    /// Rewrite files in place instead of printing to stdout
    #[arg(long)]
    pub write: bool,
}

pub fn run(args: ResizeArgs) -> Result<()> {
    let printer = Printer::new();

    for path in &args.files {
        let source = std::fs::read_to_string(path).map_err(|e| UniCompError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let (resized, rule_count) =
            resize_document(&source, args.width, args.height).map_err(|message| {
                UniCompError::Validation {
                    message: format!("{}: {}", display_path(path), message),
                    help: None,
                }
            })?;

        if args.write {
            std::fs::write(path, &resized).map_err(|e| UniCompError::Io {
                path: path.clone(),
                message: e.to_string(),
            })?;
            printer.status(
                "Resized",
                &format!(
                    "{} -> {}×{} ({})",
                    display_path(path),
                    args.width,
                    args.height,
                    plural(rule_count, "rule", "rules")
                ),
            );
        } else {
            print!("{}", resized);
        }
    }

    Ok(())
}

fn resize_document(
    source: &str,
    width: usize,
    height: usize,
) -> std::result::Result<(String, usize), String> {
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

        match resize_grid(trimmed, width, height) {
            Ok(resized) => {
                out.push_str(&resized);
                rule_count += 1;
            }
            Err(error) => return Err(describe_error(index + 1, &error)),
        }
    }

    Ok((out, rule_count))
}
