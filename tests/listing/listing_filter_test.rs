#[path = "../common/mod.rs"]
mod common;

use common::{ints, seeded_store, texts};
use foodlink::prelude::*;

#[test]
fn test_unrestricted_filter_returns_every_listing_with_provider_name() {
    let (store, seed) = seeded_store();
    let table = store.query_listings(&ListingFilter::new()).unwrap();

    assert_eq!(
        table.columns,
        vec![
            "Food_ID",
            "Food_Name",
            "Quantity",
            "Expiry_Date",
            "Provider",
            "Location",
            "Food_Type",
            "Meal_Type"
        ]
    );
    assert_eq!(
        ints(&table, "Food_ID"),
        vec![seed.rice, seed.bread, seed.curry, seed.salad, seed.cake]
    );
    assert_eq!(
        texts(&table, "Provider"),
        vec![
            "Green Grocer",
            "Green Grocer",
            "Spice Route",
            "Mixed Kitchen",
            "Idle Bakery"
        ]
    );
}

#[test]
fn test_single_location() {
    let (store, seed) = seeded_store();
    let table = store
        .query_listings(&ListingFilter::new().location("Pune"))
        .unwrap();

    assert_eq!(ints(&table, "Food_ID"), vec![seed.rice, seed.salad]);
    assert!(texts(&table, "Location").iter().all(|l| l == "Pune"));
}

#[test]
fn test_facets_intersect() {
    let (store, seed) = seeded_store();

    let table = store
        .query_listings(&ListingFilter::new().location("Pune").food_type("Vegan"))
        .unwrap();
    assert_eq!(ints(&table, "Food_ID"), vec![seed.salad]);

    let table = store
        .query_listings(
            &ListingFilter::new()
                .provider("Green Grocer")
                .location("Delhi"),
        )
        .unwrap();
    assert_eq!(ints(&table, "Food_ID"), vec![seed.bread]);
}

#[test]
fn test_every_row_is_inside_every_selected_set() {
    let (store, _) = seeded_store();
    let filter = ListingFilter::new()
        .location("Pune")
        .location("Delhi")
        .provider("Green Grocer")
        .provider("Idle Bakery")
        .food_type("Vegetarian")
        .food_type("Vegan");
    let table = store.query_listings(&filter).unwrap();

    assert_eq!(table.len(), 3);
    for row in &table.rows {
        let location = row[5].to_string();
        let provider = row[4].to_string();
        let food_type = row[6].to_string();
        assert!(filter.locations.contains(&location));
        assert!(filter.providers.contains(&provider));
        assert!(filter.food_types.contains(&food_type));
    }
}

#[test]
fn test_unmatched_value_yields_empty_table() {
    let (store, _) = seeded_store();
    let table = store
        .query_listings(&ListingFilter::new().location("Atlantis"))
        .unwrap();

    assert!(table.is_empty());
    assert_eq!(table.columns.len(), 8);
}

#[test]
fn test_repeated_selection_does_not_duplicate_rows() {
    let (store, seed) = seeded_store();
    let filter = ListingFilter::new().with_values(Facet::ProviderName, ["Spice Route", "Spice Route"]);

    assert_eq!(filter.build().params.len(), 1);
    let table = store.query_listings(&filter).unwrap();
    assert_eq!(ints(&table, "Food_ID"), vec![seed.curry]);
}

#[test]
fn test_quoted_value_is_matched_literally() {
    let (store, _) = seeded_store();
    let table = store
        .query_listings(&ListingFilter::new().provider("Green Grocer' OR '1'='1"))
        .unwrap();
    assert!(table.is_empty());
}
