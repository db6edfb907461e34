//! Интеграционные тесты sqlgate
//!
//! Проверяют публичный интерфейс крейта целиком: токенизация, разбор,
//! сериализация результата и поведение шлюза перед выполнением.

use sqlgate::{parse, tokenize, NodeKind, ParseError, SqlParser, TokenKind};

/// Тест полного цикла: текст запроса → токены → дерево → JSON
#[test]
fn test_full_analysis_cycle() {
    let sql = "SELECT DISTINCT name, COUNT(id) FROM users \
               WHERE age >= 18 GROUP BY name HAVING COUNT(id) > 1 \
               ORDER BY name ASC LIMIT 100;";

    // Лексический проход самостоятелен и всегда выполняется целиком
    let tokens = tokenize(sql).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens.last().unwrap().lexeme, ";");

    // Синтаксический проход строит дерево поверх той же последовательности
    let tree = parse(sql).unwrap();
    assert_eq!(tree.kind, NodeKind::SelectStatement);
    assert!(tree.find_child(NodeKind::DistinctColumns).is_some());
    assert!(tree.find_child(NodeKind::WhereClause).is_some());
    assert!(tree.find_child(NodeKind::GroupByClause).is_some());
    assert!(tree.find_child(NodeKind::OrderByClause).is_some());
    assert_eq!(
        tree.find_child(NodeKind::Limit).unwrap().value.as_deref(),
        Some("100")
    );

    // Дерево сериализуется для внешнего представления
    let json = serde_json::to_string(&tree).unwrap();
    assert!(json.contains("\"SELECT_STATEMENT\""));
}

/// Тест шлюза: корректные конструкции всех шести семейств проходят
#[test]
fn test_gate_accepts_all_statement_families() {
    let queries = [
        "SELECT * FROM users",
        "INSERT INTO users (id, name) VALUES (1, 'Ann'), (2, 'Bob');",
        "UPDATE users SET name = 'Ann' WHERE id = 1",
        "DELETE FROM users WHERE id = 2;",
        "CREATE TABLE users (id SERIAL PRIMARY KEY, name VARCHAR(100) NOT NULL)",
        "CREATE DATABASE shop",
        "CREATE INDEX idx_users_name ON users (name)",
        "DROP TABLE users;",
        "DROP DATABASE shop",
    ];

    for sql in queries {
        let result = parse(sql);
        assert!(result.is_ok(), "запрос отклонен: {} ({:?})", sql, result);
    }
}

/// Тест шлюза: некорректные запросы отклоняются с одной точной причиной
#[test]
fn test_gate_rejects_with_single_reason() {
    let rejected = [
        "TRUNCATE users",
        "SELECT FROM users",
        "SELECT * FROM users WHERE (a = 1",
        "INSERT INTO users VALUES",
        "CREATE TABLE t ()",
        "CREATE TABLE t (name VARCHAR)",
        "DROP VIEW v",
    ];

    for sql in rejected {
        let error = parse(sql).unwrap_err();
        let message = error.to_string();
        assert!(!message.is_empty(), "пустое сообщение для: {}", sql);
        assert!(!message.contains('\n'));
    }
}

/// Тест независимости вызовов: разбор не хранит состояния между запросами
#[test]
fn test_calls_are_independent() {
    let sql = "CREATE TABLE t (id INT CHECK (id > 0))";

    let first = parse(sql).unwrap();
    let _ = parse("DROP TABLE other").unwrap();
    let second = parse(sql).unwrap();
    assert_eq!(first, second);

    // Повторный parse на одном парсере тоже детерминирован
    let mut parser = SqlParser::new(sql).unwrap();
    assert_eq!(parser.parse().unwrap(), parser.parse().unwrap());
}

/// Тест согласованности ошибок: лексическая ошибка не меняется при разборе
#[test]
fn test_lexical_error_passes_through_parse() {
    let direct = tokenize("SELECT $ FROM t").unwrap_err();
    let through_parse = parse("SELECT $ FROM t").unwrap_err();

    match through_parse {
        ParseError::Lex(inner) => assert_eq!(inner, direct),
        other => panic!("Ожидалась лексическая ошибка, получено {:?}", other),
    }
}
