pub mod formats;

use flexi_logger::Logger;

use crate::Error;

/// Starts the global logger. `RUST_LOG` overrides the default `info` spec.
///
/// Logs go to stderr; stdout is reserved for command output.
pub fn init() -> Result<(), Error> {
    Logger::try_with_env_or_str("info")?
        .format(formats::cli_format)
        .log_to_stderr()
        .start()?;

    Ok(())
}
