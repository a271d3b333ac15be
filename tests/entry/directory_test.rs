#[path = "../common/mod.rs"]
mod common;

use common::{empty_store, ints, seeded_store, texts};
use foodlink::prelude::*;

#[test]
fn test_contact_directory() {
    let (store, _) = seeded_store();
    let directory = store.contact_directory().unwrap();

    assert_eq!(directory.providers.columns, vec!["Name", "Type", "City", "Contact"]);
    assert_eq!(
        texts(&directory.providers, "Name"),
        vec!["Green Grocer", "Idle Bakery", "Mixed Kitchen", "Spice Route"]
    );
    assert_eq!(
        texts(&directory.receivers, "Type"),
        vec!["Community Fridge", "Shelter"]
    );
    assert!(texts(&directory.receivers, "Contact")
        .iter()
        .all(|c| c == "555-0200"));
}

#[test]
fn test_empty_directory() {
    let store = empty_store();
    let directory = store.contact_directory().unwrap();
    assert!(directory.providers.is_empty());
    assert!(directory.receivers.is_empty());
}

#[test]
fn test_records_ordered_by_id() {
    let (store, seed) = seeded_store();

    let listings = store.list_records(Entity::FoodListings).unwrap();
    assert_eq!(
        ints(&listings, "Food_ID"),
        vec![seed.rice, seed.bread, seed.curry, seed.salad, seed.cake]
    );
    assert_eq!(
        listings.columns,
        vec![
            "Food_ID",
            "Food_Name",
            "Quantity",
            "Expiry_Date",
            "Provider_ID",
            "Location",
            "Food_Type",
            "Meal_Type"
        ]
    );

    let claims = store.list_records(Entity::Claims).unwrap();
    assert_eq!(ints(&claims, "Claim_ID"), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_choices() {
    let (store, seed) = seeded_store();

    let receivers = store.receiver_choices().unwrap();
    assert_eq!(
        receivers,
        vec![
            Choice {
                id: seed.city_fridge,
                name: "City Fridge".into()
            },
            Choice {
                id: seed.hope_shelter,
                name: "Hope Shelter".into()
            },
        ]
    );

    let foods: Vec<String> = store
        .food_choices()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(foods, vec!["Bread", "Cake", "Curry", "Rice", "Salad"]);

    let providers = store.provider_choices().unwrap();
    assert_eq!(providers[0].to_string(), format!("Green Grocer (ID: {})", seed.green_grocer));
}

#[test]
fn test_entity_names() {
    assert_eq!("listings".parse::<Entity>().unwrap(), Entity::FoodListings);
    assert_eq!("food-listings".parse::<Entity>().unwrap(), Entity::FoodListings);
    assert_eq!(Entity::Claims.to_string(), "Claims");
    assert!("donors".parse::<Entity>().is_err());
}

#[test]
fn test_records_serialize_as_json_objects() {
    let (store, _) = seeded_store();
    let providers = store.list_records(Entity::Providers).unwrap();
    let json = providers.to_records();

    assert_eq!(json[1]["Name"], "Spice Route");
    assert_eq!(json[1]["City"], "Mumbai");
    assert_eq!(json[2]["Provider_ID"], 3);
    assert!(json[0]["Address"].is_null());
}
