//! Тесты модуля анализа SQL
