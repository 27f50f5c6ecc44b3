use clap::Parser;
use miette::Result;
use unicomp::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => unicomp::cli::check::run(args)?,
        Commands::Fmt(args) => unicomp::cli::fmt::run(args)?,
        Commands::Resize(args) => unicomp::cli::resize::run(args)?,
        Commands::Completions(args) => unicomp::cli::completions::run(args)?,
    }

    Ok(())
}
