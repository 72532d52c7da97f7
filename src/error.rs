use miette::Diagnostic;
use thiserror::Error;

/// Main error type for castmix operations.
///
/// The calculation core never returns these; they come from the store,
/// config, recipe builder and CLI layers.
#[derive(Error, Diagnostic, Debug)]
pub enum CastError {
    #[error("IO error: {0}")]
    #[diagnostic(code(castmix::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(castmix::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(castmix::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(castmix::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Not found: {message}")]
    #[diagnostic(code(castmix::not_found))]
    NotFound {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, CastError>;
