//! Ошибки лексического и синтаксического анализа
//!
//! Каждый вариант описывает первое нарушение, найденное при сканировании
//! слева направо. Лексические ошибки несут смещение в символах; все
//! синтаксические ошибки, привязанные к токену, несут его индекс в
//! последовательности токенов (единая политика позиций).

use thiserror::Error;

/// Ошибка лексического анализа
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Пустой или состоящий из одних пробелов запрос
    #[error("query is empty")]
    EmptyQuery,

    /// Символ, не попадающий ни в один класс токенов
    #[error("unrecognized character '{ch}' at position {position}")]
    UnrecognizedCharacter { ch: char, position: usize },
}

/// Ошибка синтаксического анализа
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Лексическая ошибка, обнаруженная до разбора
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Закрывающая скобка без соответствующей открывающей
    #[error("closing parenthesis without matching opening parenthesis at token {token_index}")]
    UnmatchedClosingParen { token_index: usize },

    /// Открывающая скобка, оставшаяся незакрытой до конца запроса
    #[error("opening parenthesis is never closed")]
    UnmatchedOpenParen,

    /// Первый токен не начинает ни одну из поддерживаемых конструкций
    #[error("unrecognized statement type: '{lexeme}'")]
    UnknownStatement { lexeme: String },

    /// После CREATE ожидается TABLE, DATABASE или INDEX
    #[error("expected TABLE, DATABASE or INDEX after CREATE, found '{lexeme}'")]
    UnknownCreateTarget { lexeme: String },

    /// Ожидалось конкретное ключевое слово
    #[error("expected {keyword} after {after} at token {token_index}")]
    ExpectedKeyword {
        keyword: &'static str,
        after: &'static str,
        token_index: usize,
    },

    /// Ожидался идентификатор
    #[error("expected identifier ({context}) at token {token_index}")]
    ExpectedIdentifier {
        context: &'static str,
        token_index: usize,
    },

    /// Ожидался конкретный токен, не являющийся ключевым словом
    #[error("expected '{expected}' ({context}) at token {token_index}")]
    ExpectedToken {
        expected: &'static str,
        context: &'static str,
        token_index: usize,
    },

    /// Нераспознанный тип данных в определении колонки
    #[error("invalid data type '{type_name}' for column '{column}' at token {token_index}")]
    InvalidDataType {
        type_name: String,
        column: String,
        token_index: usize,
    },

    /// Тип требует явного размера, например VARCHAR(50)
    #[error("type {type_name} requires a size, e.g. {type_name}(50)")]
    SizeRequired {
        type_name: String,
        token_index: usize,
    },

    /// Список, который обязан содержать хотя бы один элемент, пуст
    #[error("{context} must contain at least one entry (token {token_index})")]
    EmptyList {
        context: &'static str,
        token_index: usize,
    },

    /// Литерал недопустимого вида в позиции значения
    #[error("invalid value '{lexeme}' ({context}) at token {token_index}")]
    InvalidValue {
        lexeme: String,
        context: &'static str,
        token_index: usize,
    },

    /// Нераспознанное ограничение колонки
    #[error("unrecognized constraint '{lexeme}' in column '{column}' at token {token_index}")]
    UnrecognizedConstraint {
        lexeme: String,
        column: String,
        token_index: usize,
    },

    /// Нераспознанная клаузула после основной части SELECT
    #[error("unrecognized clause '{lexeme}' at token {token_index}")]
    UnrecognizedClause { lexeme: String, token_index: usize },

    /// Лишний токен после завершенной конструкции
    #[error("unexpected trailing token '{lexeme}' at token {token_index}")]
    UnexpectedTrailingToken { lexeme: String, token_index: usize },

    /// Несбалансированные скобки внутри ограничения CHECK
    #[error("unbalanced parentheses inside CHECK constraint (token {token_index})")]
    UnbalancedCheckParens { token_index: usize },
}
