//! Shared fixture: a small seeded store on a fixed clock.
#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use foodlink::prelude::*;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

pub fn noon() -> NaiveDateTime {
    today().and_hms_opt(12, 0, 0).unwrap()
}

pub fn empty_store() -> Store {
    Store::open_in_memory_with_clock(FixedClock::at(noon())).unwrap()
}

pub fn provider(store: &Store, name: &str, kind: ProviderType, city: &str) -> i64 {
    store
        .create_provider(&NewProvider::new(name, kind).city(city).contact("555-0100"))
        .unwrap()
}

pub fn receiver(store: &Store, name: &str, kind: ReceiverType, city: &str) -> i64 {
    store
        .create_receiver(&NewReceiver::new(name, kind).city(city).contact("555-0200"))
        .unwrap()
}

#[allow(clippy::too_many_arguments)]
pub fn listing(
    store: &Store,
    food_name: &str,
    quantity: i64,
    days_from_today: i64,
    provider_id: i64,
    location: &str,
    food_type: FoodType,
    meal_type: MealType,
) -> i64 {
    store
        .create_food_listing(&NewFoodListing {
            food_name: food_name.to_string(),
            quantity,
            expiry_date: today() + Duration::days(days_from_today),
            provider_id,
            location: location.to_string(),
            food_type,
            meal_type,
        })
        .unwrap()
}

pub fn claim(store: &Store, food_id: i64, receiver_id: i64, status: ClaimStatus) -> i64 {
    store
        .create_claim(&NewClaim::new(food_id, receiver_id, status))
        .unwrap()
}

/// Ids assigned by [`seeded_store`].
pub struct Seed {
    pub green_grocer: i64,
    pub spice_route: i64,
    pub idle_bakery: i64,
    pub mixed_kitchen: i64,
    pub hope_shelter: i64,
    pub city_fridge: i64,
    pub rice: i64,
    pub bread: i64,
    pub curry: i64,
    pub salad: i64,
    pub cake: i64,
}

/// Providers:
/// - Green Grocer: two listings, both claims Successful
/// - Spice Route (Mumbai): one listing, one Successful claim
/// - Idle Bakery: a listing nobody claimed
/// - Mixed Kitchen: one Successful and one Failed claim
///
/// Listings expire at T+3, T+4, T-1, T and T+2 respectively.
pub fn seeded_store() -> (Store, Seed) {
    let store = empty_store();

    let green_grocer = provider(&store, "Green Grocer", ProviderType::Supermarket, "Pune");
    let spice_route = provider(&store, "Spice Route", ProviderType::Restaurant, "Mumbai");
    let idle_bakery = provider(&store, "Idle Bakery", ProviderType::Restaurant, "Delhi");
    let mixed_kitchen = provider(&store, "Mixed Kitchen", ProviderType::Restaurant, "Pune");

    let hope_shelter = receiver(&store, "Hope Shelter", ReceiverType::Shelter, "Pune");
    let city_fridge = receiver(&store, "City Fridge", ReceiverType::CommunityFridge, "Mumbai");

    let rice = listing(&store, "Rice", 10, 3, green_grocer, "Pune", FoodType::Vegetarian, MealType::Lunch);
    let bread = listing(&store, "Bread", 5, 4, green_grocer, "Delhi", FoodType::Vegan, MealType::Breakfast);
    let curry = listing(&store, "Curry", 8, -1, spice_route, "Mumbai", FoodType::NonVegetarian, MealType::Dinner);
    let salad = listing(&store, "Salad", 3, 0, mixed_kitchen, "Pune", FoodType::Vegan, MealType::Lunch);
    let cake = listing(&store, "Cake", 2, 2, idle_bakery, "Delhi", FoodType::Vegetarian, MealType::Snacks);

    claim(&store, rice, hope_shelter, ClaimStatus::Successful);
    claim(&store, bread, city_fridge, ClaimStatus::Successful);
    claim(&store, curry, hope_shelter, ClaimStatus::Successful);
    claim(&store, salad, hope_shelter, ClaimStatus::Successful);
    claim(&store, salad, city_fridge, ClaimStatus::Failed);

    let seed = Seed {
        green_grocer,
        spice_route,
        idle_bakery,
        mixed_kitchen,
        hope_shelter,
        city_fridge,
        rice,
        bread,
        curry,
        salad,
        cake,
    };
    (store, seed)
}

/// Text cells of one column.
pub fn texts(table: &Table, column: &str) -> Vec<String> {
    table
        .column(column)
        .unwrap_or_else(|| panic!("no column {column} in {:?}", table.columns))
        .into_iter()
        .map(|c| c.to_string())
        .collect()
}

/// Integer cells of one column.
pub fn ints(table: &Table, column: &str) -> Vec<i64> {
    table
        .column(column)
        .unwrap_or_else(|| panic!("no column {column} in {:?}", table.columns))
        .into_iter()
        .map(|c| c.as_i64().expect("integer cell"))
        .collect()
}
