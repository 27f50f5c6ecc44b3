//! unicomp - UniComp symbol-placement DSL toolkit
//!
//! A library (and small CLI) for the UniComp DSL: a compact textual format
//! that places styled Unicode glyphs onto cells of a rectangular grid,
//! addressed by a single linear index per cell. This crate is the
//! parsing/validation/serialization core — it renders nothing, performs no
//! layout beyond linear-index arithmetic, and keeps no state between
//! invocations; every entry point is a pure function of its input.
//!
//! - [`parse`] — one rule to a [`UniCompSpec`] or a positioned
//!   [`ParseError`], with strict resource limits ([`limits`]).
//! - [`parse_multi_line`] — a whole document, comments skipped, failures
//!   isolated per line.
//! - [`stringify`] — the canonical serializer (the editing loop is always
//!   spec → text → spec; specs are never mutated in place).
//! - [`geometry`] — index/rectangle conversions and [`resize_grid`].

pub mod cli;
pub mod error;
pub mod geometry;
pub mod limits;
pub mod output;
pub mod parser;
pub mod serialize;
pub mod types;

pub use error::{ParseError, Result, UniCompError};
pub use geometry::{
    coords_to_symbol_indices, linear_to_coords, rect_between, resize_grid, symbol_to_coords,
    CellRect, Rect,
};
pub use parser::{
    parse, parse_multi_line, strip_file_header, ErrorLine, Location, MultiLineParseResult,
    ParsedBlock,
};
pub use serialize::stringify;
pub use types::{BoxValue, Flip, ParseResult, Scale, SymbolSpec, UniCompSpec};
