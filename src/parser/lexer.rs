//! Лексический анализатор SQL для sqlgate
//!
//! Преобразует текст запроса целиком в последовательность токенов.
//! Сканирование идет слева направо за один проход; в каждой позиции классы
//! токенов пробуются в фиксированном порядке приоритета: оператор, число,
//! строка, идентификатор, разделитель. Порядок важен для корректности:
//! двухсимвольные операторы (>=, <=, <>, !=) распознаются раньше
//! односимвольных, а '-' перед цифрой всегда остается отдельным оператором
//! и не склеивается в знаковое число.

use crate::parser::error::LexError;
use crate::parser::token::{is_keyword, Token, TokenKind};

/// Лексический анализатор SQL
pub struct Lexer {
    /// Исходный текст без внешних пробелов
    input: Vec<char>,
    /// Текущая позиция в тексте (в символах)
    position: usize,
}

impl Lexer {
    /// Создает новый лексический анализатор
    ///
    /// Входная строка обрезается по краям; пустой или пробельный запрос
    /// отклоняется сразу.
    pub fn new(query: &str) -> Result<Self, LexError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(LexError::EmptyQuery);
        }

        Ok(Self {
            input: trimmed.chars().collect(),
            position: 0,
        })
    }

    /// Возвращает все токены входного текста
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while self.position < self.input.len() {
            let ch = self.input[self.position];

            // Пробельные символы пропускаются без токена
            if matches!(ch, ' ' | '\t' | '\n' | '\r') {
                self.position += 1;
                continue;
            }

            let token = self
                .read_operator()
                .or_else(|| self.read_number())
                .or_else(|| self.read_string_literal())
                .or_else(|| self.read_identifier_or_keyword())
                .or_else(|| self.read_delimiter())
                .ok_or(LexError::UnrecognizedCharacter {
                    ch,
                    position: self.position,
                })?;

            log::trace!("токен: {}", token);
            tokens.push(token);
        }

        Ok(tokens)
    }

    // === Вспомогательные методы ===

    /// Возвращает текущий символ без продвижения позиции
    pub(crate) fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Возвращает символ на заданном расстоянии от текущей позиции
    pub(crate) fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

// Подключаем методы чтения отдельных классов токенов
include!("lexer_readers.rs");
