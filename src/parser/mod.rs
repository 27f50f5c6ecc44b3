//! Parsing pipeline for the UniComp DSL.
//!
//! A rule places styled Unicode glyphs onto cells of a rectangular grid,
//! addressed by a single linear index per cell (`index = y * width + x`):
//!
//! ```text
//! (10×3):F[c=red;r=90]15-17;→2-4
//! ```
//!
//! reads as: on a 10-by-3 grid, draw `F` in red rotated 90° over the
//! rectangle spanned by cells 15 and 17, then draw `→` above it over cells
//! 2 to 4. Symbol order is layer order.
//!
//! The pipeline is raw text → [tokenizer](token) → [recursive-descent
//! parser](rule) → [`ParseResult`]. Every stage is a pure function of its
//! input and reports failures by value; resource limits (input length,
//! symbol count, parameter count, wall-clock budget) surface as
//! [`ParseError::Limit`](crate::error::ParseError::Limit), distinct from
//! syntax errors.
//!
//! # Usage
//!
//! ```
//! let spec = unicomp::parse("(5):F12-12").expect("valid rule");
//! assert_eq!(spec.grid_width, 5);
//! assert_eq!(spec.symbols[0].glyph, "F");
//! ```

mod document;
mod rule;
pub mod span;
pub mod token;

use crate::types::ParseResult;

pub use document::{
    describe_error, is_comment_line, parse_multi_line, strip_file_header, ErrorLine,
    MultiLineParseResult, ParsedBlock,
};
pub use span::Location;

/// Parse one rule into a [`UniCompSpec`](crate::types::UniCompSpec).
///
/// Never panics; all failures come back as a positioned
/// [`ParseError`](crate::error::ParseError).
pub fn parse(input: &str) -> ParseResult {
    let tokens = token::tokenize(input)?;
    rule::RuleParser::new(tokens).run()
}
