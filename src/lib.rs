//! vocalize - text to speech converter
//!
//! Resolves text from a file, a web article or direct input, turns it into
//! an MP3 through an online speech service and optionally saves the text.

pub mod config;
pub mod convert;
pub mod error;
pub mod persist;
pub mod report;
pub mod shell;
pub mod source;
pub mod speech;

#[cfg(test)]
mod test_server;

pub use convert::{ConversionOutcome, ConversionRequest, Converter};
pub use error::{Result, VocalizeError};
pub use report::{Condition, Notice, Reporter};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "vocalize";
