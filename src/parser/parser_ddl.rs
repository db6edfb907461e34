// Грамматики DDL конструкций: CREATE TABLE / DATABASE / INDEX, DROP

/// Допустимые типы данных в определении колонки
///
/// DOUBLE PRECISION - единственный тип из двух слов, разбирается отдельным
/// опережением на один токен.
const DATA_TYPES: &[&str] = &[
    "INT", "INTEGER", "BIGINT", "SMALLINT", "SERIAL", "BIGSERIAL",
    "VARCHAR", "TEXT", "CHAR",
    "DECIMAL", "NUMERIC", "FLOAT", "REAL", "DOUBLE", "MONEY",
    "DATE", "TIME", "TIMESTAMP", "INTERVAL",
    "BOOLEAN", "BOOL",
    "UUID", "JSON", "JSONB", "ARRAY", "BYTEA",
];

impl SqlParser {
    /// CREATE: диспетчеризация по второму токену
    fn parse_create(&mut self) -> Result<SyntaxNode, ParseError> {
        let root = SyntaxNode::new(NodeKind::CreateStatement);
        self.expect_keyword("CREATE", "statement start")?;

        let Some(target) = self.current().cloned() else {
            return Err(ParseError::UnknownCreateTarget {
                lexeme: "end of query".to_string(),
            });
        };

        match target.upper().as_str() {
            "TABLE" => self.parse_create_table(root),
            "DATABASE" => self.parse_create_database(root),
            "INDEX" => self.parse_create_index(root),
            _ => Err(ParseError::UnknownCreateTarget {
                lexeme: target.lexeme,
            }),
        }
    }

    /// CREATE TABLE [IF NOT EXISTS] <таблица> (<колонки и ограничения>) [;]
    fn parse_create_table(&mut self, mut root: SyntaxNode) -> Result<SyntaxNode, ParseError> {
        self.advance(); // TABLE

        // IF NOT EXISTS принимается только целиком, все три токена
        let if_not_exists = self.current_matches("IF")
            && self.peek_matches(1, "NOT")
            && self.peek_matches(2, "EXISTS");
        if if_not_exists {
            self.advance();
            self.advance();
            self.advance();
        }

        let name = self.expect_identifier("table name after CREATE TABLE")?;
        let mut table = SyntaxNode::with_value(NodeKind::Table, name);
        if if_not_exists {
            table.push(SyntaxNode::with_value(NodeKind::IfNotExists, "true"));
        }
        root.push(table);

        self.expect_token("(", "table definition")?;

        if self.lexeme_is(")") {
            return Err(ParseError::EmptyList {
                context: "table definition",
                token_index: self.position,
            });
        }

        // Первая запись - всегда определение колонки; ограничения таблицы
        // допустимы только после запятой
        let mut columns = SyntaxNode::new(NodeKind::Columns);
        let column = self.parse_column_definition()?;
        columns.push(column);

        while self.lexeme_is(",") {
            self.advance();
            let entry = if self.next_is_table_constraint() {
                self.parse_table_constraint()?
            } else {
                self.parse_column_definition()?
            };
            columns.push(entry);
        }

        self.expect_token(")", "table definition")?;
        root.push(columns);

        self.finish_statement(root)
    }

    /// Проверяет, начинается ли с текущего токена ограничение таблицы
    fn next_is_table_constraint(&self) -> bool {
        self.current().is_some_and(|token| {
            matches!(
                token.upper().as_str(),
                "PRIMARY" | "FOREIGN" | "UNIQUE" | "CONSTRAINT"
            )
        })
    }

    /// Определение колонки: имя, тип с параметрами, ограничения
    fn parse_column_definition(&mut self) -> Result<SyntaxNode, ParseError> {
        let name = self.expect_identifier("column name")?;
        let mut column = SyntaxNode::with_value(NodeKind::ColumnDefinition, name.clone());

        let Some(type_token) = self.current().cloned() else {
            return Err(ParseError::ExpectedToken {
                expected: "data type",
                context: "column definition",
                token_index: self.position,
            });
        };

        let type_index = self.position;
        let mut type_name = type_token.upper();
        if type_name == "DOUBLE" && self.peek_matches(1, "PRECISION") {
            type_name = "DOUBLE PRECISION".to_string();
            self.advance();
        } else if !DATA_TYPES.contains(&type_name.as_str()) {
            return Err(ParseError::InvalidDataType {
                type_name: type_token.lexeme,
                column: name,
                token_index: self.position,
            });
        }
        self.advance();

        // Параметры размера: один числовой или два через запятую
        // (точность и масштаб для DECIMAL/NUMERIC)
        let mut data_type = SyntaxNode::with_value(NodeKind::DataType, type_name.clone());
        if self.lexeme_is("(") {
            self.advance();
            data_type.push(self.expect_size_parameter(&type_name)?);
            if self.lexeme_is(",") {
                self.advance();
                data_type.push(self.expect_size_parameter(&type_name)?);
            }
            self.expect_token(")", "type size")?;
        } else if type_name == "VARCHAR" || type_name == "CHAR" {
            return Err(ParseError::SizeRequired {
                type_name,
                token_index: type_index,
            });
        }
        column.push(data_type);

        // Ограничения колонки до ',' или ')'
        while let Some(token) = self.current().cloned() {
            if token.lexeme == "," || token.lexeme == ")" {
                break;
            }
            match token.upper().as_str() {
                "NOT" => {
                    self.advance();
                    self.expect_keyword("NULL", "NOT")?;
                    column.push(SyntaxNode::with_value(NodeKind::Constraint, "NOT NULL"));
                }
                "NULL" => {
                    self.advance();
                    column.push(SyntaxNode::with_value(NodeKind::Constraint, "NULL"));
                }
                "PRIMARY" => {
                    self.advance();
                    self.expect_keyword("KEY", "PRIMARY")?;
                    column.push(SyntaxNode::with_value(NodeKind::Constraint, "PRIMARY KEY"));
                }
                "UNIQUE" => {
                    self.advance();
                    column.push(SyntaxNode::with_value(NodeKind::Constraint, "UNIQUE"));
                }
                "DEFAULT" => {
                    self.advance();
                    column.push(self.parse_default_value()?);
                }
                "REFERENCES" => {
                    self.advance();
                    column.push(self.parse_references()?);
                }
                "CHECK" => {
                    self.advance();
                    column.push(self.parse_check_constraint()?);
                }
                _ => {
                    return Err(ParseError::UnrecognizedConstraint {
                        lexeme: token.lexeme,
                        column: name,
                        token_index: self.position,
                    })
                }
            }
        }

        Ok(column)
    }

    /// Один числовой параметр размера типа
    fn expect_size_parameter(&mut self, type_name: &str) -> Result<SyntaxNode, ParseError> {
        match self.current().cloned() {
            Some(token) if token.kind == TokenKind::Number => {
                self.advance();
                Ok(SyntaxNode::with_value(NodeKind::Size, token.lexeme))
            }
            _ => {
                log::debug!("нечисловой параметр размера для типа {}", type_name);
                Err(ParseError::ExpectedToken {
                    expected: "NUMBER",
                    context: "type size",
                    token_index: self.position,
                })
            }
        }
    }

    /// Значение DEFAULT: литерал, TRUE/FALSE/NULL, CURRENT_TIMESTAMP или NOW()
    fn parse_default_value(&mut self) -> Result<SyntaxNode, ParseError> {
        let Some(value) = self.current().cloned() else {
            return Err(ParseError::ExpectedToken {
                expected: "value",
                context: "DEFAULT",
                token_index: self.position,
            });
        };

        let upper = value.upper();
        // NOW() - единственный допустимый вызов, ровно три токена
        if upper == "NOW" && self.peek_matches(1, "(") && self.peek_matches(2, ")") {
            self.advance();
            self.advance();
            self.advance();
            return Ok(SyntaxNode::with_value(NodeKind::Default, "NOW()"));
        }

        if value.kind == TokenKind::Number
            || value.kind == TokenKind::String
            || matches!(upper.as_str(), "CURRENT_TIMESTAMP" | "TRUE" | "FALSE" | "NULL")
        {
            self.advance();
            return Ok(SyntaxNode::with_value(NodeKind::Default, value.lexeme));
        }

        Err(ParseError::InvalidValue {
            lexeme: value.lexeme,
            context: "DEFAULT value",
            token_index: self.position,
        })
    }

    /// REFERENCES <таблица> [(<колонка>)]
    fn parse_references(&mut self) -> Result<SyntaxNode, ParseError> {
        let table = self.expect_identifier("table name after REFERENCES")?;
        let mut references = SyntaxNode::with_value(NodeKind::References, table);

        // Ссылка на колонку необязательна
        if self.lexeme_is("(") {
            self.advance();
            let column = self.expect_identifier("column name in REFERENCES")?;
            references.push(SyntaxNode::with_value(NodeKind::RefColumn, column));
            self.expect_token(")", "REFERENCES")?;
        }

        Ok(references)
    }

    /// CHECK (<ряд токенов>): содержимое захватывается дословно
    ///
    /// Внутренняя грамматика условия не разбирается; локальная глубина
    /// скобок обязана вернуться к нулю до закрывающей ')'.
    fn parse_check_constraint(&mut self) -> Result<SyntaxNode, ParseError> {
        self.expect_token("(", "CHECK constraint")?;

        let mut condition = SyntaxNode::new(NodeKind::CheckCondition);
        let mut depth = 1usize;

        while let Some(token) = self.current().cloned() {
            if token.lexeme == "(" {
                depth += 1;
            } else if token.lexeme == ")" {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            condition.push(SyntaxNode::with_value(NodeKind::ConditionToken, token.lexeme));
            self.advance();
        }

        if depth != 0 {
            return Err(ParseError::UnbalancedCheckParens {
                token_index: self.position,
            });
        }
        self.advance(); // закрывающая ')'

        let mut check = SyntaxNode::with_value(NodeKind::Constraint, "CHECK");
        if !condition.children.is_empty() {
            check.push(condition);
        }
        Ok(check)
    }

    /// Ограничение уровня таблицы: [CONSTRAINT <имя>] PRIMARY KEY / FOREIGN KEY / UNIQUE
    fn parse_table_constraint(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut constraint = SyntaxNode::new(NodeKind::TableConstraint);

        // Необязательный именованный префикс
        if self.current_matches("CONSTRAINT") {
            self.advance();
            let name = self.expect_identifier("constraint name after CONSTRAINT")?;
            constraint.value = Some(name);
        }

        let Some(token) = self.current().cloned() else {
            return Err(ParseError::ExpectedToken {
                expected: "PRIMARY KEY, FOREIGN KEY or UNIQUE",
                context: "table constraint",
                token_index: self.position,
            });
        };

        match token.upper().as_str() {
            "PRIMARY" => {
                self.advance();
                self.expect_keyword("KEY", "PRIMARY")?;
                let mut primary_key = SyntaxNode::new(NodeKind::PrimaryKey);
                for column in self.parse_paren_column_list("PRIMARY KEY column list")? {
                    primary_key.push(column);
                }
                constraint.push(primary_key);
            }
            "FOREIGN" => {
                self.advance();
                self.expect_keyword("KEY", "FOREIGN")?;
                self.expect_token("(", "FOREIGN KEY")?;
                let column = self.expect_identifier("column name in FOREIGN KEY")?;
                self.expect_token(")", "FOREIGN KEY")?;

                let mut foreign_key = SyntaxNode::with_value(NodeKind::ForeignKey, column);
                self.expect_keyword("REFERENCES", "FOREIGN KEY")?;
                foreign_key.push(self.parse_references()?);
                constraint.push(foreign_key);
            }
            "UNIQUE" => {
                self.advance();
                let mut unique = SyntaxNode::new(NodeKind::Unique);
                for column in self.parse_paren_column_list("UNIQUE column list")? {
                    unique.push(column);
                }
                constraint.push(unique);
            }
            _ => {
                return Err(ParseError::ExpectedToken {
                    expected: "PRIMARY KEY, FOREIGN KEY or UNIQUE",
                    context: "table constraint",
                    token_index: self.position,
                })
            }
        }

        Ok(constraint)
    }

    /// CREATE DATABASE <имя> [;]
    fn parse_create_database(&mut self, mut root: SyntaxNode) -> Result<SyntaxNode, ParseError> {
        self.advance(); // DATABASE
        let name = self.expect_identifier("database name after CREATE DATABASE")?;
        root.push(SyntaxNode::with_value(NodeKind::Database, name));
        self.finish_statement(root)
    }

    /// CREATE INDEX <имя> ON <таблица> (<колонки>) [;]
    fn parse_create_index(&mut self, mut root: SyntaxNode) -> Result<SyntaxNode, ParseError> {
        self.advance(); // INDEX
        let name = self.expect_identifier("index name after CREATE INDEX")?;
        let mut index = SyntaxNode::with_value(NodeKind::Index, name);

        self.expect_keyword("ON", "index name")?;
        let table = self.expect_identifier("table name after ON")?;
        index.push(SyntaxNode::with_value(NodeKind::Table, table));

        let mut columns = SyntaxNode::new(NodeKind::Columns);
        for column in self.parse_paren_column_list("index column list")? {
            columns.push(column);
        }
        index.push(columns);

        root.push(index);
        self.finish_statement(root)
    }

    /// DROP TABLE <имя> | DROP DATABASE <имя> [;]
    fn parse_drop(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut root = SyntaxNode::new(NodeKind::DropStatement);
        self.expect_keyword("DROP", "statement start")?;

        let Some(target) = self.current().cloned() else {
            return Err(ParseError::ExpectedKeyword {
                keyword: "TABLE or DATABASE",
                after: "DROP",
                token_index: self.position,
            });
        };

        match target.upper().as_str() {
            "TABLE" => {
                self.advance();
                let name = self.expect_identifier("table name after DROP TABLE")?;
                root.push(SyntaxNode::with_value(NodeKind::Table, name));
            }
            "DATABASE" => {
                self.advance();
                let name = self.expect_identifier("database name after DROP DATABASE")?;
                root.push(SyntaxNode::with_value(NodeKind::Database, name));
            }
            _ => {
                return Err(ParseError::ExpectedKeyword {
                    keyword: "TABLE or DATABASE",
                    after: "DROP",
                    token_index: self.position,
                })
            }
        }

        self.finish_statement(root)
    }
}
