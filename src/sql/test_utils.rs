//! Test utilities for SQL emission validation.
//!
//! Checks that emitted SQL parses under sqlparser's SQLite dialect.

use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;

/// Validates that a SQL string is syntactically valid SQLite.
pub fn validate_sql(sql: &str) -> Result<(), String> {
    Parser::parse_sql(&SQLiteDialect {}, sql)
        .map(|_| ())
        .map_err(|e| format!("Invalid SQL: {}\nSQL: {}", e, sql))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_sql() {
        validate_sql("SELECT * FROM \"Providers\" WHERE \"City\" IN (?1, ?2)").unwrap();
    }

    #[test]
    fn test_validate_invalid_sql() {
        let result = validate_sql("SELEC * FORM Providers");
        assert!(result.is_err());
    }
}
