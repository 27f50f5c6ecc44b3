//! Hard resource limits for the parsing pipeline.
//!
//! Violating any of these produces a [`ParseError::Limit`] rather than a
//! syntax error, so callers can tell abusive or pathological input apart
//! from ordinary mistakes.
//!
//! [`ParseError::Limit`]: crate::error::ParseError::Limit

use std::time::Duration;

/// Maximum input length in Unicode scalar values, checked before scanning.
pub const MAX_INPUT_LENGTH: usize = 10_000;

/// Maximum number of symbols in a single rule.
pub const MAX_SYMBOLS: usize = 1_000;

/// Maximum number of parameter entries per symbol.
pub const MAX_PARAMS_PER_SYMBOL: usize = 10;

/// Minimum grid width/height.
pub const MIN_GRID_SIZE: usize = 2;

/// Maximum grid width/height.
pub const MAX_GRID_SIZE: usize = 100;

/// Wall-clock budget for tokenizing or parsing one rule.
///
/// Checked cooperatively between discrete units of work (one token, one
/// symbol), so the guarantee is bounded overrun rather than a hard cutoff.
pub const PARSE_TIMEOUT: Duration = Duration::from_millis(100);
