//! Bar charts derived from report tables.
//!
//! The first column supplies the category labels. Every later column whose
//! non-null cells are all numeric becomes a series.

use std::fmt;

use serde::Serialize;

use crate::table::{Cell, Table};

/// Width of the longest bar in characters.
const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub label_column: String,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl BarChart {
    /// Build a chart, or `None` when the table is not suitable for one.
    pub fn from_table(table: &Table) -> Option<BarChart> {
        if table.columns.len() < 2 || table.is_empty() {
            return None;
        }

        let series: Vec<Series> = (1..table.columns.len())
            .filter(|&idx| is_numeric_column(table, idx))
            .map(|idx| Series {
                name: table.columns[idx].clone(),
                values: table
                    .rows
                    .iter()
                    .map(|row| row[idx].as_f64().unwrap_or(0.0))
                    .collect(),
            })
            .collect();

        if series.is_empty() {
            return None;
        }

        Some(BarChart {
            label_column: table.columns[0].clone(),
            labels: table.rows.iter().map(|row| row[0].to_string()).collect(),
            series,
        })
    }
}

fn is_numeric_column(table: &Table, idx: usize) -> bool {
    let mut seen = false;
    for row in &table.rows {
        match &row[idx] {
            Cell::Null => {}
            Cell::Integer(_) | Cell::Real(_) => seen = true,
            Cell::Text(_) => return false,
        }
    }
    seen
}

/// Horizontal text bars, one block per series.
impl fmt::Display for BarChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);

        for (n, series) in self.series.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{} by {}", series.name, self.label_column)?;

            let max = series.values.iter().copied().fold(0.0_f64, f64::max);
            for (label, value) in self.labels.iter().zip(&series.values) {
                let len = if max > 0.0 {
                    ((value.max(0.0) / max) * BAR_WIDTH as f64).round() as usize
                } else {
                    0
                };
                let mut buf = ryu::Buffer::new();
                writeln!(
                    f,
                    "{label:<label_width$} | {} {}",
                    "█".repeat(len),
                    trim_float(buf.format(*value))
                )?;
            }
        }
        Ok(())
    }
}

fn trim_float(s: &str) -> &str {
    s.strip_suffix(".0").unwrap_or(s)
}
