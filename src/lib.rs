//! sqlgate - Валидация и структурный разбор SQL запросов
//!
//! Крейт проверяет лексическую и синтаксическую корректность запроса до
//! передачи его движку базы данных. Результат - последовательность токенов,
//! типизированное синтаксическое дерево или точная причина первого
//! нарушения. Ядро чисто синхронное и не хранит состояния между вызовами.

pub mod common;
pub mod parser;

pub use common::error::{Error, Result};
pub use parser::{
    parse, tokenize, LexError, Lexer, NodeKind, ParseError, SqlParser, SyntaxNode, Token,
    TokenKind,
};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
