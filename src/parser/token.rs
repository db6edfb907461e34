//! Токены для SQL лексера sqlgate
//!
//! Определяет классы токенов, которые распознает лексический анализатор,
//! и фиксированный набор зарезервированных слов языка запросов.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Классы токенов SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Зарезервированное слово (SELECT, FROM, WHERE, ...)
    Keyword,
    /// Идентификатор (имя таблицы, колонки, etc.)
    Identifier,
    /// Числовой литерал (целый или с десятичной точкой)
    Number,
    /// Строковый литерал в одинарных кавычках
    String,
    /// Оператор (=, <>, >=, +, ...)
    Operator,
    /// Разделитель: ( ) , ; .
    Delimiter,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
        };
        write!(f, "{}", name)
    }
}

/// Токен с классом и исходной лексемой
///
/// Лексема сохраняет регистр входного текста; классификация ключевых слов
/// выполняется без учета регистра. После создания токен не изменяется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Лексема токена в верхнем регистре (для сравнения с ключевыми словами)
    pub fn upper(&self) -> String {
        self.lexeme.to_uppercase()
    }

    /// Проверяет, совпадает ли лексема с образцом без учета регистра
    pub fn matches(&self, lexeme: &str) -> bool {
        self.lexeme.eq_ignore_ascii_case(lexeme)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.kind, self.lexeme)
    }
}

/// Фиксированный набор зарезервированных слов
///
/// Агрегатные функции (COUNT, SUM, AVG, MAX, MIN) входят в набор: грамматика
/// SELECT различает их по классу KEYWORD. Имена типов данных в набор не
/// входят и лексируются как идентификаторы.
pub const KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "INSERT", "INTO", "VALUES",
    "UPDATE", "SET", "DELETE", "CREATE", "TABLE", "DROP",
    "ALTER", "ADD", "COLUMN", "PRIMARY", "KEY", "FOREIGN",
    "REFERENCES", "NOT", "NULL", "UNIQUE", "DEFAULT",
    "AND", "OR", "IN", "BETWEEN", "LIKE", "ORDER", "BY",
    "GROUP", "HAVING", "JOIN", "INNER", "LEFT", "RIGHT",
    "ON", "AS", "DISTINCT", "LIMIT", "OFFSET", "UNION",
    "ALL", "DATABASE", "USE", "IF", "EXISTS", "CASCADE",
    "CONSTRAINT", "INDEX", "VIEW", "PROCEDURE", "FUNCTION",
    "TRIGGER", "BEGIN", "END", "COMMIT", "ROLLBACK",
    "COUNT", "SUM", "AVG", "MAX", "MIN",
];

/// Агрегатные функции, допустимые в списке колонок SELECT
pub const AGGREGATE_FUNCTIONS: &[&str] = &["COUNT", "SUM", "AVG", "MAX", "MIN"];

/// Проверяет, является ли слово зарезервированным (без учета регистра)
pub fn is_keyword(word: &str) -> bool {
    let upper = word.to_uppercase();
    KEYWORDS.contains(&upper.as_str())
}

/// Проверяет, является ли слово именем агрегатной функции
pub fn is_aggregate_function(word: &str) -> bool {
    let upper = word.to_uppercase();
    AGGREGATE_FUNCTIONS.contains(&upper.as_str())
}
