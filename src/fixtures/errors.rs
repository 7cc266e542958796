/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Error types for regression fixtures

use thiserror::Error;

/// Result type for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Fixture loading errors
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Error when the fixture file cannot be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when the fixture file is not valid fixture JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Error when a function family other than J, Y or H is requested
    #[error("Unknown function family: {0}")]
    UnknownFamily(String),
}
