//! Check command implementation.
//!
//! Parses each input document line by line and reports per-line
//! diagnostics. With `--json` the full multi-line result is serialized to
//! stdout for tooling; human-readable diagnostics always go to stderr.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{Result, UniCompError};
use crate::output::{display_path, plural, Printer};
use crate::parser::{parse_multi_line, strip_file_header, MultiLineParseResult};

/// Validate documents and report per-line diagnostics
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Emit the full parse report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let printer = Printer::new();
    let mut total_valid = 0;
    let mut total_errors = 0;

    for path in &args.files {
        let result = check_file(path)?;

        printer.status(
            "Checking",
            &format!(
                "{} ({})",
                display_path(path),
                plural(result.valid_count + result.error_count, "rule", "rules")
            ),
        );

        for error in &result.error_lines {
            let position = match error.column {
                Some(column) => format!("{}:{}:{}", display_path(path), error.line_number, column),
                None => format!("{}:{}", display_path(path), error.line_number),
            };
            printer.error("error", &format!("{}: {}", position, error.message));
        }

        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        total_valid += result.valid_count;
        total_errors += result.error_count;
    }

    if total_errors > 0 {
        return Err(UniCompError::Validation {
            message: format!(
                "{} invalid ({} valid)",
                plural(total_errors, "rule", "rules"),
                total_valid
            ),
            help: Some("run with --json for a machine-readable report".to_string()),
        });
    }

    printer.status("Finished", &plural(total_valid, "valid rule", "valid rules"));
    Ok(())
}

/// Read and parse one document, applying the `# `-header import
/// convention before the text reaches the parser.
pub fn check_file(path: &Path) -> Result<MultiLineParseResult> {
    let source = std::fs::read_to_string(path).map_err(|e| UniCompError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(parse_multi_line(strip_file_header(&source)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_check_file_reads_and_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# UNICOMP v1.0").unwrap();
        writeln!(file, "(5):F12-12").unwrap();
        writeln!(file, "(5):F99-99").unwrap();

        let result = check_file(file.path()).unwrap();
        assert_eq!(result.valid_count, 1);
        assert_eq!(result.error_count, 1);
    }

    #[test]
    fn test_check_file_missing() {
        let err = check_file(Path::new("/nonexistent/rules.uc")).unwrap_err();
        assert!(matches!(err, UniCompError::Io { .. }));
    }

    #[test]
    fn test_run_fails_on_invalid_rules() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(5):F99-99").unwrap();

        let args = CheckArgs {
            files: vec![file.path().to_path_buf()],
            json: false,
        };
        assert!(run(args).is_err());
    }

    #[test]
    fn test_run_succeeds_on_valid_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "// shapes").unwrap();
        writeln!(file, "(5):F12-12").unwrap();

        let args = CheckArgs {
            files: vec![file.path().to_path_buf()],
            json: false,
        };
        assert!(run(args).is_ok());
    }
}
