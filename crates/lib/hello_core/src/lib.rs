//! # hello_core
//!
//! Core value types for the hello service.

pub mod dto;
pub mod hello;

pub use dto::HelloResponseDto;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
