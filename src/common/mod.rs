//! Общие типы и утилиты для sqlgate

pub mod config;
pub mod error;

pub use config::AnalyzerConfig;
pub use error::{Error, Result};
