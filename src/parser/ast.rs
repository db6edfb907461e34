//! Синтаксическое дерево SQL для sqlgate
//!
//! Дерево - чистая структура владения: узел единолично владеет своими
//! потомками, обратных ссылок и разделяемого состояния нет. Узлы строятся
//! добавлением потомков в локально владеемый узел и передаются родителю по
//! значению; после возврата из парсера дерево не изменяется.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Виды узлов синтаксического дерева
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    // Корневые узлы конструкций
    SelectStatement,
    InsertStatement,
    UpdateStatement,
    DeleteStatement,
    CreateStatement,
    DropStatement,

    // Составные узлы
    Columns,
    DistinctColumns,
    Table,
    Database,
    Index,
    IfNotExists,
    ColumnDefinition,
    DataType,
    Size,
    Constraint,
    Default,
    References,
    RefColumn,
    CheckCondition,
    TableConstraint,
    PrimaryKey,
    ForeignKey,
    Unique,
    WhereClause,
    HavingClause,
    GroupByClause,
    OrderByClause,
    OrderItem,
    Direction,
    Limit,
    SetClause,
    Assignment,
    Values,
    ValueSet,
    Function,

    // Листовые узлы
    Column,
    Value,
    ConditionToken,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::SelectStatement => "SELECT_STATEMENT",
            NodeKind::InsertStatement => "INSERT_STATEMENT",
            NodeKind::UpdateStatement => "UPDATE_STATEMENT",
            NodeKind::DeleteStatement => "DELETE_STATEMENT",
            NodeKind::CreateStatement => "CREATE_STATEMENT",
            NodeKind::DropStatement => "DROP_STATEMENT",
            NodeKind::Columns => "COLUMNS",
            NodeKind::DistinctColumns => "DISTINCT_COLUMNS",
            NodeKind::Table => "TABLE",
            NodeKind::Database => "DATABASE",
            NodeKind::Index => "INDEX",
            NodeKind::IfNotExists => "IF_NOT_EXISTS",
            NodeKind::ColumnDefinition => "COLUMN_DEFINITION",
            NodeKind::DataType => "DATA_TYPE",
            NodeKind::Size => "SIZE",
            NodeKind::Constraint => "CONSTRAINT",
            NodeKind::Default => "DEFAULT",
            NodeKind::References => "REFERENCES",
            NodeKind::RefColumn => "REF_COLUMN",
            NodeKind::CheckCondition => "CHECK_CONDITION",
            NodeKind::TableConstraint => "TABLE_CONSTRAINT",
            NodeKind::PrimaryKey => "PRIMARY_KEY",
            NodeKind::ForeignKey => "FOREIGN_KEY",
            NodeKind::Unique => "UNIQUE",
            NodeKind::WhereClause => "WHERE_CLAUSE",
            NodeKind::HavingClause => "HAVING_CLAUSE",
            NodeKind::GroupByClause => "GROUP_BY_CLAUSE",
            NodeKind::OrderByClause => "ORDER_BY_CLAUSE",
            NodeKind::OrderItem => "ORDER_ITEM",
            NodeKind::Direction => "DIRECTION",
            NodeKind::Limit => "LIMIT",
            NodeKind::SetClause => "SET_CLAUSE",
            NodeKind::Assignment => "ASSIGNMENT",
            NodeKind::Values => "VALUES",
            NodeKind::ValueSet => "VALUE_SET",
            NodeKind::Function => "FUNCTION",
            NodeKind::Column => "COLUMN",
            NodeKind::Value => "VALUE",
            NodeKind::ConditionToken => "CONDITION_TOKEN",
        };
        write!(f, "{}", name)
    }
}

/// Узел синтаксического дерева
///
/// В сериализованном виде пустые поля опускаются: лист без потомков
/// превращается в {"type": ..., "value": ...}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Создает узел без значения и потомков
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: None,
            children: Vec::new(),
        }
    }

    /// Создает узел со скалярным значением
    pub fn with_value(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// Добавляет потомка в конец списка
    pub fn push(&mut self, child: SyntaxNode) {
        self.children.push(child);
    }

    /// Ищет первого потомка заданного вида
    pub fn find_child(&self, kind: NodeKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|child| child.kind == kind)
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}('{}')", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}
