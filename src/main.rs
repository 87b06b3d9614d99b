use clap::Parser;
use miette::Result;
use pxpaint::cli::{Cli, Commands};
use pxpaint::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Replay(args) => pxpaint::cli::replay::run(args, &printer)?,
        Commands::Validate(args) => pxpaint::cli::validate::run(args, &printer)?,
        Commands::List(args) => pxpaint::cli::list::run(args, &printer)?,
        Commands::Completions(args) => pxpaint::cli::completions::run(args)?,
    }

    Ok(())
}
