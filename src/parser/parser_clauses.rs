// Общие грамматики клаузул: WHERE, GROUP BY/HAVING, ORDER BY,
// а также разбор заключенных в скобки списков колонок

impl SqlParser {
    /// WHERE <ряд токенов условия>
    ///
    /// Условие захватывается дословно как листья CONDITION_TOKEN без
    /// структурирования по операторам. Сканирование идет до GROUP, ORDER,
    /// LIMIT, ';' или конца запроса; локальная глубина скобок позволяет
    /// этим словам встречаться внутри скобок, не обрывая условие.
    fn parse_where_clause(&mut self) -> Result<SyntaxNode, ParseError> {
        self.advance(); // WHERE

        let mut clause = SyntaxNode::new(NodeKind::WhereClause);
        let mut depth = 0usize;

        while let Some(token) = self.current().cloned() {
            let at_boundary = token.matches("GROUP")
                || token.matches("ORDER")
                || token.matches("LIMIT")
                || token.lexeme == ";";
            if depth == 0 && at_boundary {
                break;
            }

            if token.lexeme == "(" {
                depth += 1;
            } else if token.lexeme == ")" {
                if depth == 0 {
                    return Err(ParseError::UnmatchedClosingParen {
                        token_index: self.position,
                    });
                }
                depth -= 1;
            }

            clause.push(SyntaxNode::with_value(NodeKind::ConditionToken, token.lexeme));
            self.advance();
        }

        if depth != 0 {
            return Err(ParseError::UnmatchedOpenParen);
        }
        if clause.children.is_empty() {
            return Err(ParseError::EmptyList {
                context: "WHERE condition",
                token_index: self.position,
            });
        }

        Ok(clause)
    }

    /// GROUP BY <колонки> [HAVING <условие>]
    fn parse_group_by_clause(&mut self) -> Result<SyntaxNode, ParseError> {
        self.advance(); // GROUP
        self.expect_keyword("BY", "GROUP")?;

        let mut group = SyntaxNode::new(NodeKind::GroupByClause);
        let mut expecting_column = true;
        let mut count = 0usize;

        while let Some(token) = self.current().cloned() {
            if token.matches("HAVING")
                || token.matches("ORDER")
                || token.matches("LIMIT")
                || token.lexeme == ";"
            {
                break;
            }
            if token.lexeme == "," {
                if expecting_column {
                    return Err(ParseError::ExpectedIdentifier {
                        context: "column before ','",
                        token_index: self.position,
                    });
                }
                expecting_column = true;
                self.advance();
                continue;
            }
            if !expecting_column {
                return Err(ParseError::ExpectedToken {
                    expected: ",",
                    context: "GROUP BY column list",
                    token_index: self.position,
                });
            }
            if token.kind == TokenKind::Identifier {
                group.push(SyntaxNode::with_value(NodeKind::Column, token.lexeme));
                count += 1;
                expecting_column = false;
                self.advance();
            } else {
                return Err(ParseError::ExpectedIdentifier {
                    context: "column name in GROUP BY",
                    token_index: self.position,
                });
            }
        }

        if count == 0 {
            return Err(ParseError::EmptyList {
                context: "GROUP BY column list",
                token_index: self.position,
            });
        }
        if expecting_column {
            return Err(ParseError::ExpectedIdentifier {
                context: "column after ','",
                token_index: self.position,
            });
        }

        // Необязательный HAVING: условие - дословный ряд токенов
        if self.current_matches("HAVING") {
            self.advance();
            let mut having = SyntaxNode::new(NodeKind::HavingClause);
            while let Some(token) = self.current().cloned() {
                if token.matches("ORDER") || token.matches("LIMIT") || token.lexeme == ";" {
                    break;
                }
                having.push(SyntaxNode::with_value(NodeKind::ConditionToken, token.lexeme));
                self.advance();
            }
            if having.children.is_empty() {
                return Err(ParseError::EmptyList {
                    context: "HAVING condition",
                    token_index: self.position,
                });
            }
            group.push(having);
        }

        Ok(group)
    }

    /// ORDER BY <колонка [ASC|DESC]>[, ...]
    fn parse_order_by_clause(&mut self) -> Result<SyntaxNode, ParseError> {
        self.advance(); // ORDER
        self.expect_keyword("BY", "ORDER")?;

        let mut order = SyntaxNode::new(NodeKind::OrderByClause);
        let mut expecting_column = true;
        let mut count = 0usize;

        while let Some(token) = self.current().cloned() {
            if token.matches("LIMIT") || token.lexeme == ";" {
                break;
            }
            if token.lexeme == "," {
                if expecting_column {
                    return Err(ParseError::ExpectedIdentifier {
                        context: "column before ','",
                        token_index: self.position,
                    });
                }
                expecting_column = true;
                self.advance();
                continue;
            }
            if !expecting_column {
                return Err(ParseError::ExpectedToken {
                    expected: ",",
                    context: "ORDER BY column list",
                    token_index: self.position,
                });
            }
            if token.kind == TokenKind::Identifier {
                let mut item = SyntaxNode::with_value(NodeKind::OrderItem, token.lexeme);
                self.advance();

                // Необязательное направление сортировки
                if let Some(direction) = self.current().cloned() {
                    if direction.matches("ASC") || direction.matches("DESC") {
                        item.push(SyntaxNode::with_value(NodeKind::Direction, direction.lexeme));
                        self.advance();
                    }
                }

                order.push(item);
                count += 1;
                expecting_column = false;
            } else {
                return Err(ParseError::ExpectedIdentifier {
                    context: "column name in ORDER BY",
                    token_index: self.position,
                });
            }
        }

        if count == 0 {
            return Err(ParseError::EmptyList {
                context: "ORDER BY column list",
                token_index: self.position,
            });
        }
        if expecting_column {
            return Err(ParseError::ExpectedIdentifier {
                context: "column after ','",
                token_index: self.position,
            });
        }

        Ok(order)
    }

    /// Заключенный в скобки список имен колонок через запятую
    ///
    /// Общий сканер для списка колонок INSERT, CREATE INDEX, PRIMARY KEY
    /// и UNIQUE. Пустой список - всегда ошибка.
    fn parse_paren_column_list(&mut self, context: &'static str) -> Result<Vec<SyntaxNode>, ParseError> {
        self.expect_token("(", context)?;

        let mut columns = Vec::new();
        let mut expecting_column = true;

        loop {
            let Some(token) = self.current().cloned() else {
                return Err(ParseError::ExpectedToken {
                    expected: ")",
                    context,
                    token_index: self.position,
                });
            };
            if token.lexeme == ")" {
                break;
            }
            if token.lexeme == "," {
                if expecting_column {
                    return Err(ParseError::ExpectedIdentifier {
                        context,
                        token_index: self.position,
                    });
                }
                expecting_column = true;
                self.advance();
                continue;
            }
            if !expecting_column {
                return Err(ParseError::ExpectedToken {
                    expected: ",",
                    context,
                    token_index: self.position,
                });
            }
            if token.kind == TokenKind::Identifier {
                columns.push(SyntaxNode::with_value(NodeKind::Column, token.lexeme));
                expecting_column = false;
                self.advance();
            } else {
                return Err(ParseError::ExpectedIdentifier {
                    context,
                    token_index: self.position,
                });
            }
        }

        if columns.is_empty() {
            return Err(ParseError::EmptyList {
                context,
                token_index: self.position,
            });
        }
        if expecting_column {
            // запятая перед закрывающей скобкой
            return Err(ParseError::ExpectedIdentifier {
                context,
                token_index: self.position,
            });
        }
        self.advance(); // закрывающая ')'

        Ok(columns)
    }
}
