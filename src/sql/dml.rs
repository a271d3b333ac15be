//! DML support.
//!
//! Record entry only ever appends rows, so the only statement here is a
//! single-row INSERT whose values are bound parameters.
//!
//! # Examples
//!
//! ```ignore
//! use foodlink::sql::dml::Insert;
//! use foodlink::sql::expr::param;
//!
//! let bound = Insert::into("Receivers")
//!     .value("Name", param("Hope Shelter".to_string()))
//!     .value("City", param("Pune".to_string()))
//!     .bind();
//! ```

use super::expr::Expr;
use super::token::{Token, TokenStream};
use super::BoundQuery;

/// INSERT statement for one row.
#[derive(Debug, Clone)]
#[must_use = "DML statements have no effect until converted to SQL with bind()"]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Expr>,
}

impl Insert {
    /// Create a new INSERT statement.
    pub fn into(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Add a column together with the value to store in it.
    pub fn value(mut self, column: impl Into<String>, value: Expr) -> Self {
        self.columns.push(column.into());
        self.values.push(value);
        self
    }

    /// Convert to token stream.
    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();

        ts.push(Token::Insert).space().push(Token::Into).space();
        ts.push(Token::Ident(self.table.clone()));

        ts.space().lparen();
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                ts.comma().space();
            }
            ts.push(Token::Ident(col.clone()));
        }
        ts.rparen();

        ts.newline().push(Token::Values).space().lparen();
        for (i, val) in self.values.iter().enumerate() {
            if i > 0 {
                ts.comma().space();
            }
            ts.append(&val.to_tokens());
        }
        ts.rparen();

        ts
    }

    /// Generate the SQL text together with its bound parameter values.
    pub fn bind(&self) -> BoundQuery {
        self.to_tokens().bind()
    }
}
