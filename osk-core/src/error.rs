//! Error types for the on-screen keyboard core
//!
//! Only construction-time inputs (widget options, layout descriptions) can
//! fail. Key handling itself never returns an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid widget options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Layout parse error at line {line}: {message}")]
    LayoutParse { line: usize, message: String },

    #[error("Layout contains no keys")]
    EmptyLayout,
}

pub type Result<T> = std::result::Result<T, Error>;
