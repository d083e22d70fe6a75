//! Process-level error type.
//!
//! Every failure that should stop the run is an [`AppError`] carrying the exit
//! code the binary reports. The search core never constructs one: sparse or
//! empty inputs degrade to an empty result instead of failing (see
//! `search::driver`).

use std::error::Error;
use std::fmt;

/// Exit code for input and usage problems (unreadable catalog, bad columns,
/// invalid generator parameters, unwritable output).
pub const EXIT_INPUT: u8 = 2;

#[derive(Debug, Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        let message = message.into();
        AppError { exit_code, message }
    }

    /// Shorthand for the common input-problem case.
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INPUT, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for AppError {}
