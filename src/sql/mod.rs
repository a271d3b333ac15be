//! SQL generation module.
//!
//! A small typed builder that emits SQLite statements with bound parameters.
//! It includes:
//!
//! - [`query`] - SELECT query builder
//! - [`expr`] - Expression AST and builder DSL
//! - [`dml`] - single-row INSERT
//! - [`token`] - Token types for SQL generation

pub mod dml;
pub mod expr;
pub mod query;
pub mod token;

#[cfg(test)]
pub mod test_utils;

use rusqlite::types::Value;

// Re-export commonly used types at the sql module level
pub use dml::Insert;
pub use expr::{col, param, star, table_col, BinaryOperator, Expr, ExprExt};
pub use query::{Join, JoinType, OrderByExpr, Query, SelectExpr, SortDir, TableRef};
pub use token::{Token, TokenStream};

/// SQL text paired with the values for its numbered placeholders.
///
/// `params[i]` binds placeholder `?{i + 1}`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

impl BoundQuery {
    /// Parameters in a form rusqlite can bind directly.
    pub fn params(&self) -> rusqlite::ParamsFromIter<std::slice::Iter<'_, Value>> {
        rusqlite::params_from_iter(self.params.iter())
    }
}
