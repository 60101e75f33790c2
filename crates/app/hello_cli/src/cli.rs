//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "hello_cli", version, about = "Greeting and DTO echo commands")]
pub struct Cli {
    /// How DTOs are written to stdout.
    #[arg(long, global = true, env = "HELLO_OUTPUT", value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the greeting.
    Hello,

    /// Build a DTO from a name and an amount and print it.
    Dto {
        /// Any text, including the empty string.
        #[arg(long)]
        name: String,

        #[arg(long, allow_negative_numbers = true)]
        amount: i32,
    },

    /// Print the package name and version.
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single-line JSON.
    Json,
    /// Indented JSON.
    Pretty,
}
