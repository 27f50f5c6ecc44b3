//! Core data types for the UniComp DSL.

pub mod colour;
mod spec;
mod symbol;

pub use colour::{is_valid_colour, NAMED_COLOURS};
pub use spec::{ParseResult, UniCompSpec};
pub use symbol::{BoxValue, Flip, Scale, SymbolSpec};
