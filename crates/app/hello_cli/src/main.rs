// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::io::Write;

use clap::Parser;
use cli::{Cli, Commands};
use log::debug;

mod cli;
mod logging;
mod output;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = Cli::parse();

    logging::init()?;
    debug!("parsed arguments: {args:?}");

    let mut stdout = std::io::stdout().lock();

    match args.command {
        Commands::Hello => {
            writeln!(stdout, "{}", hello_core::hello::greeting())?;
        }
        Commands::Dto { name, amount } => {
            let dto = hello_core::hello::echo(name, amount);
            writeln!(stdout, "{}", output::render(&dto, args.output)?)?;
        }
        Commands::Version => {
            writeln!(stdout, "{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
        }
    }

    Ok(())
}
