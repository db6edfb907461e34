//! Обработка ошибок для sqlgate

use crate::parser::error::{LexError, ParseError};
use thiserror::Error;

/// Основной тип ошибки для sqlgate
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Лексическая ошибка
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    /// Синтаксическая ошибка
    #[error("Syntax error: {0}")]
    Syntax(ParseError),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для sqlgate
pub type Result<T> = std::result::Result<T, Error>;

impl From<ParseError> for Error {
    /// Лексическая ошибка внутри ParseError остается лексической,
    /// чтобы не печататься под префиксом синтаксической
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Lex(lex) => Error::Lex(lex),
            other => Error::Syntax(other),
        }
    }
}

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
