//! Greeting and echo operations.

use log::debug;

use crate::dto::HelloResponseDto;

/// The fixed greeting text.
pub const GREETING: &str = "hello";

/// Returns the greeting.
pub fn greeting() -> &'static str {
    GREETING
}

/// Wraps a name and an amount in a [`HelloResponseDto`] without altering either.
pub fn echo(name: impl Into<String>, amount: i32) -> HelloResponseDto {
    let dto = HelloResponseDto::new(name, amount);
    debug!("echo: {dto}");
    dto
}
