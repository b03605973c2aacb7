//! Error types

use miette::Diagnostic;
use thiserror::Error;

/// Errors for configuration loading and user metadata parsing.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Failed to load or parse the configuration.
    #[error("Could not load configuration")]
    Config(#[source] figment::Error),
    /// Failed to parse a user color.
    #[error("Invalid user color")]
    Color(#[from] crate::color::ParseColorError),
}
