pub mod check;
pub mod completions;
pub mod fmt;
pub mod resize;

use clap::{Parser, Subcommand};

/// unicomp - UniComp symbol-placement DSL toolkit
#[derive(Parser, Debug)]
#[command(name = "unicomp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate documents and report per-line diagnostics
    Check(check::CheckArgs),

    /// Rewrite documents into canonical form
    Fmt(fmt::FmtArgs),

    /// Re-target documents onto a grid of different dimensions
    Resize(resize::ResizeArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
