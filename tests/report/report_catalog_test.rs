#[path = "../common/mod.rs"]
mod common;

use common::empty_store;
use foodlink::report::{ReportCatalog, ReportKind};
use foodlink::Error;
use sqlparser::ast::Statement;
use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;

#[test]
fn test_catalog_order() {
    let catalog = ReportCatalog::builtin().unwrap();
    let keys = catalog.list_reports();

    assert_eq!(keys.len(), 21);
    assert_eq!(keys.first(), Some(&"providers_receivers_per_city"));
    assert_eq!(keys[3], "top_5_receivers_by_claims");
    assert_eq!(keys[13], "food_expiring_in_3_days");
    assert_eq!(
        keys.last(),
        Some(&"providers_with_100_percent_successful_claims")
    );
}

#[test]
fn test_every_query_is_one_select() {
    let catalog = ReportCatalog::builtin().unwrap();
    for def in catalog.iter() {
        let statements = Parser::parse_sql(&SQLiteDialect {}, def.sql)
            .unwrap_or_else(|e| panic!("{} does not parse: {e}", def.key));
        assert_eq!(statements.len(), 1, "{}", def.key);
        assert!(
            matches!(statements[0], Statement::Query(_)),
            "{} is not a query",
            def.key
        );
    }
}

#[test]
fn test_every_report_runs_on_empty_schema() {
    let store = empty_store();
    for key in store.list_report_names().unwrap() {
        let table = store
            .run_report(key)
            .unwrap_or_else(|e| panic!("{key} failed: {e}"));
        assert!(!table.columns.is_empty(), "{key} has no columns");
    }
}

#[test]
fn test_empty_result_is_a_table_not_an_error() {
    let store = empty_store();
    let table = store.run_report("top_5_receivers_by_claims").unwrap();
    assert!(table.is_empty());
    assert_eq!(table.columns, vec!["Name", "Total_Claims"]);
}

#[test]
fn test_top_n_entries_carry_their_limit() {
    let catalog = ReportCatalog::builtin().unwrap();
    for def in catalog.iter() {
        if let ReportKind::TopN(n) = def.kind {
            assert!(
                def.sql.trim_end().ends_with(&format!("LIMIT {n}")),
                "{} should end with LIMIT {n}",
                def.key
            );
        }
    }
}

#[test]
fn test_lookup_by_title() {
    let store = empty_store();
    let by_title = store.run_report("Claim Status Distribution").unwrap();
    let by_key = store.run_report("claim_status_distribution").unwrap();
    assert_eq!(by_title, by_key);

    let catalog = ReportCatalog::builtin().unwrap();
    assert_eq!(
        catalog
            .get("Providers With 100 Percent Successful Claims")
            .unwrap()
            .key,
        "providers_with_100_percent_successful_claims"
    );
}

#[test]
fn test_unknown_report() {
    let store = empty_store();
    let err = store.run_report("most_wasted_vegetable").unwrap_err();
    assert!(matches!(err, Error::UnknownReport(ref name) if name == "most_wasted_vegetable"));
    assert_eq!(err.to_string(), "Unknown report: most_wasted_vegetable");
}
