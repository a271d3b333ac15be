//! Report catalog.
//!
//! A fixed, ordered set of named aggregation queries. Every query is checked
//! once, when the catalog is built, to be a single read-only SELECT.
//!
//! # Example
//!
//! ```ignore
//! use foodlink::report::ReportCatalog;
//!
//! let catalog = ReportCatalog::builtin()?;
//! let def = catalog.get("Top 5 Receivers By Claims")?;
//! assert_eq!(def.key, "top_5_receivers_by_claims");
//! ```

mod catalog;
pub mod chart;

use once_cell::sync::Lazy;
use sqlparser::ast::Statement;
use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;

use crate::error::{Error, Result};

pub use chart::{BarChart, Series};

/// Named parameter a report uses for the current date.
pub const TODAY_PARAM: &str = ":today";

/// Named parameter an expiry-window report uses for its length in days.
pub const DAYS_PARAM: &str = ":days";

/// Broad shape of a report, used to describe its ordering and size policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Grouped counts or sums; rows come back in store order unless the query sorts.
    Aggregate,
    /// The N largest groups by their aggregate. Ties at the cutoff are arbitrary.
    TopN(u32),
    /// Providers having at least one claim, all of them Successful.
    AllSuccessful,
    /// Listings expiring between today and today + `days`, inclusive.
    ExpiryWindow { days: u32 },
    /// Claims per calendar day, ascending.
    DailyTrend,
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDef {
    pub key: &'static str,
    pub kind: ReportKind,
    pub sql: &'static str,
}

impl ReportDef {
    /// Human-readable title derived from the key.
    pub fn title(&self) -> String {
        title_case(self.key)
    }

    /// Length of the expiry window, for reports that have one.
    pub fn window_days(&self) -> Option<u32> {
        match self.kind {
            ReportKind::ExpiryWindow { days } => Some(days),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::Aggregate => write!(f, "aggregate"),
            ReportKind::TopN(n) => write!(f, "top {}", n),
            ReportKind::AllSuccessful => write!(f, "all successful"),
            ReportKind::ExpiryWindow { days } => write!(f, "expiring within {} days", days),
            ReportKind::DailyTrend => write!(f, "daily trend"),
        }
    }
}

/// Ordered collection of reports.
#[derive(Debug, Clone)]
pub struct ReportCatalog {
    reports: Vec<ReportDef>,
}

static BUILTIN: Lazy<std::result::Result<ReportCatalog, String>> = Lazy::new(|| {
    ReportCatalog::new(catalog::REPORTS.to_vec()).map_err(|e| e.to_string())
});

impl ReportCatalog {
    /// Build a catalog, rejecting any entry that is not one read-only SELECT
    /// or whose key repeats an earlier one.
    pub fn new(reports: Vec<ReportDef>) -> Result<Self> {
        for (i, def) in reports.iter().enumerate() {
            if reports[..i].iter().any(|other| other.key == def.key) {
                return Err(Error::Catalog(format!("duplicate report key {}", def.key)));
            }
            check_read_only(def)?;
            check_parameters(def)?;
        }
        Ok(Self { reports })
    }

    /// The reports shipped with the crate.
    pub fn builtin() -> Result<&'static ReportCatalog> {
        BUILTIN.as_ref().map_err(|msg| Error::Catalog(msg.clone()))
    }

    /// Report keys in catalog order.
    pub fn list_reports(&self) -> Vec<&'static str> {
        self.reports.iter().map(|r| r.key).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReportDef> {
        self.reports.iter()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Resolve a report by key or by its title.
    pub fn get(&self, name: &str) -> Result<&ReportDef> {
        let name = name.trim();
        self.reports
            .iter()
            .find(|r| r.key == name)
            .or_else(|| self.reports.iter().find(|r| r.title() == name))
            .ok_or_else(|| Error::UnknownReport(name.to_string()))
    }
}

fn check_read_only(def: &ReportDef) -> Result<()> {
    let statements = Parser::parse_sql(&SQLiteDialect {}, def.sql)
        .map_err(|e| Error::Catalog(format!("{}: {}", def.key, e)))?;
    match statements.as_slice() {
        [Statement::Query(_)] => Ok(()),
        [_] => Err(Error::Catalog(format!("{}: not a SELECT", def.key))),
        _ => Err(Error::Catalog(format!(
            "{}: expected one statement, found {}",
            def.key,
            statements.len()
        ))),
    }
}

/// An expiry window binds both the date and the day count; nothing else binds either.
fn check_parameters(def: &ReportDef) -> Result<()> {
    let windowed = def.window_days().is_some();
    for param in [TODAY_PARAM, DAYS_PARAM] {
        if def.sql.contains(param) != windowed {
            return Err(Error::Catalog(format!(
                "{}: {} is bound only for expiry windows",
                def.key, param
            )));
        }
    }
    Ok(())
}

/// `top_5_receivers_by_claims` -> `Top 5 Receivers By Claims`.
fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
