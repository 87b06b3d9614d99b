pub mod completions;
pub mod list;
pub mod replay;
pub mod validate;

use clap::{Parser, Subcommand};

/// pxpaint - Indexed-colour pixel-art paint engine
#[derive(Parser, Debug)]
#[command(name = "pxpaint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a session script against a blank canvas and print the result
    Replay(replay::ReplayArgs),

    /// Check session scripts without running them
    Validate(validate::ValidateArgs),

    /// List tools, brushes, filters, stamps and palette layers
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
