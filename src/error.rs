//! 错误类型定义

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not a decimal integer: '{0}'")]
    InvalidNumber(String),

    #[error("Invalid character '{character}' at position {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("Nothing left to decode after normalization")]
    EmptyPayload,

    #[error("Cannot decode normalized payload '{payload}': {source}")]
    Undecodable {
        payload: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("Invalid alias '{from}' -> '{to}': source must be a non-symbol and target a symbol")]
    InvalidAlias { from: char, to: char },

    #[error("Invalid escape table: {0}")]
    InvalidEscapeTable(String),

    #[cfg(feature = "config")]
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config")]
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[cfg(feature = "config")]
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    /// 去掉 `Undecodable` 包装，返回底层错误.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Undecodable { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
