// Методы чтения отдельных классов токенов
//
// Каждый метод возвращает Some(token) и продвигает позицию только при
// успешном совпадении; при несовпадении позиция остается нетронутой и
// очередь переходит к следующему классу.

impl Lexer {
    /// Читает оператор: сначала двухсимвольные, затем односимвольные
    pub(crate) fn read_operator(&mut self) -> Option<Token> {
        let first = self.peek()?;

        if let Some(second) = self.peek_ahead(1) {
            let pair: String = [first, second].iter().collect();
            if matches!(pair.as_str(), ">=" | "<=" | "<>" | "!=") {
                self.position += 2;
                return Some(Token::new(TokenKind::Operator, pair));
            }
        }

        if matches!(first, '>' | '<' | '=' | '+' | '-' | '*' | '/') {
            self.position += 1;
            return Some(Token::new(TokenKind::Operator, first.to_string()));
        }

        None
    }

    /// Читает числовой литерал: цифры с необязательной десятичной частью
    pub(crate) fn read_number(&mut self) -> Option<Token> {
        if !self.peek()?.is_ascii_digit() {
            return None;
        }

        let mut value = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                value.push(ch);
                self.position += 1;
            } else {
                break;
            }
        }

        // Точка входит в число только если за ней следует цифра;
        // иначе она остается разделителем
        if self.peek() == Some('.') {
            if let Some(next) = self.peek_ahead(1) {
                if next.is_ascii_digit() {
                    value.push('.');
                    self.position += 1;
                    while let Some(ch) = self.peek() {
                        if ch.is_ascii_digit() {
                            value.push(ch);
                            self.position += 1;
                        } else {
                            break;
                        }
                    }
                }
            }
        }

        Some(Token::new(TokenKind::Number, value))
    }

    /// Читает строковый литерал в одинарных кавычках
    ///
    /// Экранирование не поддерживается. Незакрытая кавычка не образует
    /// токена: позиция не двигается, и кавычка будет отклонена как
    /// нераспознанный символ.
    pub(crate) fn read_string_literal(&mut self) -> Option<Token> {
        if self.peek()? != '\'' {
            return None;
        }

        let mut length = 1;
        loop {
            match self.peek_ahead(length) {
                Some('\'') => {
                    length += 1;
                    break;
                }
                Some(_) => length += 1,
                None => return None,
            }
        }

        let value: String = self.input[self.position..self.position + length]
            .iter()
            .collect();
        self.position += length;
        Some(Token::new(TokenKind::String, value))
    }

    /// Читает идентификатор или ключевое слово
    pub(crate) fn read_identifier_or_keyword(&mut self) -> Option<Token> {
        let first = self.peek()?;
        if !first.is_ascii_alphabetic() && first != '_' {
            return None;
        }

        let mut value = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                value.push(ch);
                self.position += 1;
            } else {
                break;
            }
        }

        // Классификация не зависит от регистра, лексема сохраняет исходный
        let kind = if is_keyword(&value) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        Some(Token::new(kind, value))
    }

    /// Читает одиночный разделитель
    pub(crate) fn read_delimiter(&mut self) -> Option<Token> {
        let ch = self.peek()?;
        if matches!(ch, '(' | ')' | ',' | ';' | '.') {
            self.position += 1;
            return Some(Token::new(TokenKind::Delimiter, ch.to_string()));
        }
        None
    }
}
