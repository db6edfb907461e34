//! Синтаксический анализатор SQL для sqlgate
//!
//! Рекурсивный нисходящий разбор без возвратов: парсер владеет полной
//! последовательностью токенов и курсором, который только продвигается
//! вперед. Решения принимаются по текущему токену с опережением не более
//! чем на два токена (DOUBLE PRECISION, NOT NULL, IF NOT EXISTS).
//! Первая найденная ошибка немедленно прерывает разбор; частичное дерево
//! не возвращается никогда.

use crate::parser::ast::{NodeKind, SyntaxNode};
use crate::parser::error::{LexError, ParseError};
use crate::parser::lexer::Lexer;
use crate::parser::token::{is_aggregate_function, Token, TokenKind};

/// Рекурсивный парсер SQL
pub struct SqlParser {
    /// Полная последовательность токенов запроса
    tokens: Vec<Token>,
    /// Курсор в последовательности токенов
    position: usize,
}

impl SqlParser {
    /// Создает парсер: лексический анализ выполняется сразу и целиком
    pub fn new(query: &str) -> Result<Self, ParseError> {
        let tokens = Lexer::new(query)?.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Разбирает запрос в синтаксическое дерево
    ///
    /// Повторный вызов на том же парсере дает структурно равное дерево.
    pub fn parse(&mut self) -> Result<SyntaxNode, ParseError> {
        self.position = 0;

        if self.tokens.is_empty() {
            return Err(LexError::EmptyQuery.into());
        }

        // Баланс скобок проверяется один раз по всему запросу,
        // до любой грамматики конкретной конструкции
        self.check_parenthesis_balance()?;

        let first = self.tokens[0].upper();
        log::debug!("разбор конструкции {} ({} токенов)", first, self.tokens.len());

        match first.as_str() {
            "SELECT" => self.parse_select(),
            "INSERT" => self.parse_insert(),
            "UPDATE" => self.parse_update(),
            "DELETE" => self.parse_delete(),
            "CREATE" => self.parse_create(),
            "DROP" => self.parse_drop(),
            _ => Err(ParseError::UnknownStatement {
                lexeme: self.tokens[0].lexeme.clone(),
            }),
        }
    }

    /// Проверяет баланс скобок по всей последовательности токенов
    ///
    /// LIFO стек открывающих скобок: каждая ')' обязана снять '(' со стека,
    /// непустой стек в конце сканирования - незакрытая скобка.
    fn check_parenthesis_balance(&self) -> Result<(), ParseError> {
        let mut stack: Vec<usize> = Vec::new();

        for (index, token) in self.tokens.iter().enumerate() {
            match token.lexeme.as_str() {
                "(" => stack.push(index),
                ")" => {
                    if stack.pop().is_none() {
                        return Err(ParseError::UnmatchedClosingParen { token_index: index });
                    }
                }
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(ParseError::UnmatchedOpenParen);
        }

        Ok(())
    }
}

// === Методы работы с курсором ===

impl SqlParser {
    /// Возвращает текущий токен
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Проверяет, исчерпана ли последовательность токенов
    fn at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Продвигает курсор на один токен
    fn advance(&mut self) {
        self.position += 1;
    }

    /// Сравнивает текущий токен с образцом без учета регистра
    fn current_matches(&self, lexeme: &str) -> bool {
        self.current().is_some_and(|token| token.matches(lexeme))
    }

    /// Сравнивает токен на заданном расстоянии от курсора (lookahead)
    fn peek_matches(&self, offset: usize, lexeme: &str) -> bool {
        self.tokens
            .get(self.position + offset)
            .is_some_and(|token| token.matches(lexeme))
    }

    /// Точное сравнение лексемы текущего токена (разделители, операторы)
    fn lexeme_is(&self, lexeme: &str) -> bool {
        self.current().is_some_and(|token| token.lexeme == lexeme)
    }

    /// Ожидает ключевое слово и продвигает курсор
    fn expect_keyword(&mut self, keyword: &'static str, after: &'static str) -> Result<(), ParseError> {
        if self.current_matches(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::ExpectedKeyword {
                keyword,
                after,
                token_index: self.position,
            })
        }
    }

    /// Ожидает идентификатор, возвращает его лексему и продвигает курсор
    fn expect_identifier(&mut self, context: &'static str) -> Result<String, ParseError> {
        match self.current() {
            Some(token) if token.kind == TokenKind::Identifier => {
                let lexeme = token.lexeme.clone();
                self.advance();
                Ok(lexeme)
            }
            _ => Err(ParseError::ExpectedIdentifier {
                context,
                token_index: self.position,
            }),
        }
    }

    /// Ожидает конкретный токен (разделитель или оператор) и продвигает курсор
    fn expect_token(&mut self, expected: &'static str, context: &'static str) -> Result<(), ParseError> {
        if self.lexeme_is(expected) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::ExpectedToken {
                expected,
                context,
                token_index: self.position,
            })
        }
    }

    /// Завершает разбор конструкции: одна необязательная ';', дальше пусто
    fn finish_statement(&mut self, root: SyntaxNode) -> Result<SyntaxNode, ParseError> {
        if self.lexeme_is(";") {
            self.advance();
        }
        if let Some(token) = self.current() {
            return Err(ParseError::UnexpectedTrailingToken {
                lexeme: token.lexeme.clone(),
                token_index: self.position,
            });
        }
        Ok(root)
    }
}

// Подключаем грамматики из отдельных файлов
include!("parser_dml.rs");
include!("parser_ddl.rs");
include!("parser_clauses.rs");
