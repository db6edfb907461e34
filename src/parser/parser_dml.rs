// Грамматики DML конструкций: SELECT, INSERT, UPDATE, DELETE

impl SqlParser {
    /// SELECT [DISTINCT] <колонки> FROM <таблица> [клаузулы] [;]
    fn parse_select(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut root = SyntaxNode::new(NodeKind::SelectStatement);
        self.expect_keyword("SELECT", "statement start")?;

        // Необязательный DISTINCT меняет вид узла списка колонок
        let distinct = self.current_matches("DISTINCT");
        if distinct {
            self.advance();
        }
        let mut columns = SyntaxNode::new(if distinct {
            NodeKind::DistinctColumns
        } else {
            NodeKind::Columns
        });

        let mut expecting_column = true;
        let mut count = 0usize;

        while let Some(token) = self.current().cloned() {
            if token.matches("FROM") {
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
                    context: "select column list",
                    token_index: self.position,
                });
            }

            if token.lexeme == "*" || token.kind == TokenKind::Identifier {
                columns.push(SyntaxNode::with_value(NodeKind::Column, token.lexeme));
                count += 1;
                expecting_column = false;
                self.advance();
            } else if token.kind == TokenKind::Keyword && is_aggregate_function(&token.lexeme) {
                // Агрегатная функция: аргументы в скобках пропускаются
                // без структурного разбора, в дереве остается только имя
                let function = SyntaxNode::with_value(NodeKind::Function, token.lexeme);
                self.advance();
                if self.lexeme_is("(") {
                    self.advance();
                    while let Some(inner) = self.current() {
                        if inner.lexeme == ")" {
                            break;
                        }
                        self.advance();
                    }
                    self.expect_token(")", "aggregate function arguments")?;
                }
                columns.push(function);
                count += 1;
                expecting_column = false;
            } else {
                return Err(ParseError::ExpectedIdentifier {
                    context: "column name or '*'",
                    token_index: self.position,
                });
            }
        }

        if count == 0 {
            return Err(ParseError::EmptyList {
                context: "select column list",
                token_index: self.position,
            });
        }
        if expecting_column {
            return Err(ParseError::ExpectedIdentifier {
                context: "column after ','",
                token_index: self.position,
            });
        }
        root.push(columns);

        // FROM и имя таблицы обязательны
        self.expect_keyword("FROM", "select column list")?;
        let table = self.expect_identifier("table name after FROM")?;
        root.push(SyntaxNode::with_value(NodeKind::Table, table));

        // Необязательные клаузулы в порядке появления
        while let Some(token) = self.current().cloned() {
            match token.upper().as_str() {
                "WHERE" => {
                    let clause = self.parse_where_clause()?;
                    root.push(clause);
                }
                "GROUP" => {
                    let clause = self.parse_group_by_clause()?;
                    root.push(clause);
                }
                "ORDER" => {
                    let clause = self.parse_order_by_clause()?;
                    root.push(clause);
                }
                "LIMIT" => {
                    self.advance();
                    match self.current().cloned() {
                        Some(limit) if limit.kind == TokenKind::Number => {
                            root.push(SyntaxNode::with_value(NodeKind::Limit, limit.lexeme));
                            self.advance();
                        }
                        _ => {
                            return Err(ParseError::ExpectedToken {
                                expected: "NUMBER",
                                context: "LIMIT",
                                token_index: self.position,
                            })
                        }
                    }
                }
                ";" => break,
                _ => {
                    return Err(ParseError::UnrecognizedClause {
                        lexeme: token.lexeme,
                        token_index: self.position,
                    })
                }
            }
        }

        self.finish_statement(root)
    }

    /// INSERT INTO <таблица> [(<колонки>)] VALUES (<значения>)[, ...] [;]
    fn parse_insert(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut root = SyntaxNode::new(NodeKind::InsertStatement);
        self.expect_keyword("INSERT", "statement start")?;
        self.expect_keyword("INTO", "INSERT")?;

        let table = self.expect_identifier("table name after INTO")?;
        root.push(SyntaxNode::with_value(NodeKind::Table, table));

        // Необязательный список колонок
        if self.lexeme_is("(") {
            let mut columns = SyntaxNode::new(NodeKind::Columns);
            for column in self.parse_paren_column_list("insert column list")? {
                columns.push(column);
            }
            root.push(columns);
        }

        self.expect_keyword("VALUES", "insert target")?;

        if !self.lexeme_is("(") {
            return Err(ParseError::ExpectedToken {
                expected: "(",
                context: "VALUES",
                token_index: self.position,
            });
        }

        // Несколько кортежей значений через запятую (multi-row insert)
        let mut values = SyntaxNode::new(NodeKind::Values);
        while self.lexeme_is("(") {
            self.advance();
            let mut value_set = SyntaxNode::new(NodeKind::ValueSet);
            let mut expecting_value = true;

            loop {
                let Some(token) = self.current().cloned() else {
                    return Err(ParseError::ExpectedToken {
                        expected: ")",
                        context: "VALUES tuple",
                        token_index: self.position,
                    });
                };
                if token.lexeme == ")" {
                    break;
                }
                if token.lexeme == "," {
                    if expecting_value {
                        return Err(ParseError::ExpectedToken {
                            expected: "value",
                            context: "VALUES tuple",
                            token_index: self.position,
                        });
                    }
                    expecting_value = true;
                    self.advance();
                    continue;
                }
                if !expecting_value {
                    return Err(ParseError::ExpectedToken {
                        expected: ",",
                        context: "VALUES tuple",
                        token_index: self.position,
                    });
                }
                if matches!(
                    token.kind,
                    TokenKind::String | TokenKind::Number | TokenKind::Identifier
                ) {
                    value_set.push(SyntaxNode::with_value(NodeKind::Value, token.lexeme));
                    expecting_value = false;
                    self.advance();
                } else {
                    return Err(ParseError::InvalidValue {
                        lexeme: token.lexeme,
                        context: "VALUES tuple",
                        token_index: self.position,
                    });
                }
            }

            if value_set.children.is_empty() {
                return Err(ParseError::EmptyList {
                    context: "VALUES tuple",
                    token_index: self.position,
                });
            }
            if expecting_value {
                return Err(ParseError::ExpectedToken {
                    expected: "value",
                    context: "VALUES tuple",
                    token_index: self.position,
                });
            }
            self.advance(); // закрывающая ')'
            values.push(value_set);

            if self.lexeme_is(",") {
                self.advance();
                // после запятой обязан идти следующий кортеж
                if !self.lexeme_is("(") {
                    return Err(ParseError::ExpectedToken {
                        expected: "(",
                        context: "VALUES",
                        token_index: self.position,
                    });
                }
            } else {
                break;
            }
        }
        root.push(values);

        self.finish_statement(root)
    }

    /// UPDATE <таблица> SET <колонка> = <значение>[, ...] [WHERE ...] [;]
    fn parse_update(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut root = SyntaxNode::new(NodeKind::UpdateStatement);
        self.expect_keyword("UPDATE", "statement start")?;

        let table = self.expect_identifier("table name after UPDATE")?;
        root.push(SyntaxNode::with_value(NodeKind::Table, table));

        self.expect_keyword("SET", "table name")?;

        // SET без единого присваивания - отдельная ошибка
        if self.at_end() || self.current_matches("WHERE") || self.lexeme_is(";") {
            return Err(ParseError::EmptyList {
                context: "SET assignment list",
                token_index: self.position,
            });
        }

        let mut set_clause = SyntaxNode::new(NodeKind::SetClause);
        loop {
            let column = self.expect_identifier("column name in SET")?;
            self.expect_token("=", "assignment")?;

            let Some(value) = self.current().cloned() else {
                return Err(ParseError::ExpectedToken {
                    expected: "value",
                    context: "assignment",
                    token_index: self.position,
                });
            };
            if !matches!(
                value.kind,
                TokenKind::String | TokenKind::Number | TokenKind::Identifier
            ) {
                return Err(ParseError::InvalidValue {
                    lexeme: value.lexeme,
                    context: "assignment value",
                    token_index: self.position,
                });
            }
            self.advance();

            let mut assignment = SyntaxNode::new(NodeKind::Assignment);
            assignment.push(SyntaxNode::with_value(NodeKind::Column, column));
            assignment.push(SyntaxNode::with_value(NodeKind::Value, value.lexeme));
            set_clause.push(assignment);

            if self.lexeme_is(",") {
                self.advance();
                continue;
            }
            break;
        }

        // После присваиваний допустимы только WHERE, ';' или конец запроса
        if let Some(token) = self.current() {
            if !token.matches("WHERE") && token.lexeme != ";" {
                return Err(ParseError::ExpectedToken {
                    expected: ",",
                    context: "SET assignment list",
                    token_index: self.position,
                });
            }
        }
        root.push(set_clause);

        if self.current_matches("WHERE") {
            let clause = self.parse_where_clause()?;
            root.push(clause);
        }

        self.finish_statement(root)
    }

    /// DELETE FROM <таблица> [WHERE ...] [;]
    fn parse_delete(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut root = SyntaxNode::new(NodeKind::DeleteStatement);
        self.expect_keyword("DELETE", "statement start")?;
        self.expect_keyword("FROM", "DELETE")?;

        let table = self.expect_identifier("table name after FROM")?;
        root.push(SyntaxNode::with_value(NodeKind::Table, table));

        if self.current_matches("WHERE") {
            let clause = self.parse_where_clause()?;
            root.push(clause);
        }

        self.finish_statement(root)
    }
}
