//! Лексический и синтаксический анализ SQL для sqlgate

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use ast::{NodeKind, SyntaxNode};
pub use error::{LexError, ParseError};
pub use lexer::Lexer;
pub use parser::SqlParser;
pub use token::{Token, TokenKind};

/// Преобразует текст запроса в последовательность токенов
pub fn tokenize(query: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(query)?.tokenize()
}

/// Разбирает текст запроса в синтаксическое дерево
pub fn parse(query: &str) -> Result<SyntaxNode, ParseError> {
    SqlParser::new(query)?.parse()
}
