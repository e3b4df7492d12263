use thiserror::Error;

#[derive(Error, Debug)]
/// Internal enum.
pub enum CliError {
    #[error("{0}")]
    /// Internal variant.
    Message(String),

    #[error("config file not found: {0}")]
    /// Internal variant.
    ConfigNotFound(String),

    #[error("no input provided; pass arguments or pipe lines on stdin")]
    /// Internal variant.
    NoInput,

    #[error("{failed} of {total} input(s) could not be converted")]
    /// Internal variant.
    Failed {
        /// Internal field.
        failed: usize,
        /// Internal field.
        total: usize,
    },

    #[error(transparent)]
    /// Internal variant.
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// Internal variant.
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    /// Internal variant.
    Codec(#[from] pincode32::Error),
}

/// Internal type alias.
pub type Result<T> = std::result::Result<T, CliError>;
