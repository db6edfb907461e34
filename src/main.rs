//! Главный исполняемый файл sqlgate

use anyhow::bail;
use clap::{Parser, Subcommand};
use serde::Serialize;
use sqlgate::common::AnalyzerConfig;
use sqlgate::{SyntaxNode, Token, VERSION};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sqlgate")]
#[command(about = "Проверка и структурный разбор SQL запросов")]
#[command(version = VERSION)]
struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Выводить JSON с отступами
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Лексический разбор: печатает последовательность токенов
    Tokens {
        /// SQL запрос
        sql: String,
    },
    /// Синтаксический разбор: печатает дерево запроса
    Parse {
        /// SQL запрос
        sql: String,
    },
    /// Проверяет запрос перед выполнением: код возврата 0 или 1
    Check {
        /// SQL запрос
        sql: String,
    },
}

/// Отчет анализа для внешнего представления
#[derive(Serialize)]
struct AnalyzeReport {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<Vec<Token>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    syntax: Option<SyntaxNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl AnalyzeReport {
    fn invalid(error: String) -> Self {
        Self {
            valid: false,
            tokens: None,
            syntax: None,
            error: Some(error),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    let pretty = cli.pretty || config.pretty_json;

    match &cli.command {
        Commands::Tokens { sql } => {
            guard_query_length(sql, &config)?;
            let report = match sqlgate::tokenize(sql) {
                Ok(tokens) => AnalyzeReport {
                    valid: true,
                    tokens: Some(tokens),
                    syntax: None,
                    error: None,
                },
                Err(error) => AnalyzeReport::invalid(error.to_string()),
            };
            print_report(&report, pretty)?;
        }
        Commands::Parse { sql } => {
            guard_query_length(sql, &config)?;
            let report = match sqlgate::parse(sql) {
                Ok(syntax) => AnalyzeReport {
                    valid: true,
                    tokens: None,
                    syntax: Some(syntax),
                    error: None,
                },
                Err(error) => AnalyzeReport::invalid(error.to_string()),
            };
            print_report(&report, pretty)?;
        }
        Commands::Check { sql } => {
            guard_query_length(sql, &config)?;
            match sqlgate::parse(sql) {
                Ok(_) => println!("Запрос корректен"),
                Err(error) => {
                    eprintln!("Запрос отклонен: {}", error);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Ограничение длины запроса - защита внешнего слоя, не ядра
fn guard_query_length(sql: &str, config: &AnalyzerConfig) -> anyhow::Result<()> {
    let length = sql.chars().count();
    if config.max_query_length > 0 && length > config.max_query_length {
        bail!(
            "запрос длиной {} символов превышает предел {}",
            length,
            config.max_query_length
        );
    }
    Ok(())
}

fn print_report(report: &AnalyzeReport, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{}", json);
    Ok(())
}
