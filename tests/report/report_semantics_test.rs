#[path = "../common/mod.rs"]
mod common;

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Duration, NaiveDateTime};
use common::{claim, empty_store, ints, listing, noon, provider, receiver, seeded_store, texts};
use foodlink::prelude::*;

#[test]
fn test_all_successful_providers() {
    let (store, _) = seeded_store();
    let table = store
        .run_report("providers_with_100_percent_successful_claims")
        .unwrap();

    // Idle Bakery has no claims, Mixed Kitchen has a Failed one
    assert_eq!(texts(&table, "Name"), vec!["Green Grocer", "Spice Route"]);
}

#[test]
fn test_all_successful_keeps_same_named_providers_apart() {
    let store = empty_store();
    let a = provider(&store, "Twin Diner", ProviderType::Restaurant, "Pune");
    let b = provider(&store, "Twin Diner", ProviderType::Restaurant, "Delhi");
    let r = receiver(&store, "Hope", ReceiverType::Shelter, "Pune");
    let fa = listing(&store, "Dal", 4, 1, a, "Pune", FoodType::Vegan, MealType::Lunch);
    let fb = listing(&store, "Roti", 4, 1, b, "Delhi", FoodType::Vegan, MealType::Lunch);
    claim(&store, fa, r, ClaimStatus::Successful);
    claim(&store, fb, r, ClaimStatus::Failed);

    let table = store
        .run_report("providers_with_100_percent_successful_claims")
        .unwrap();
    assert_eq!(texts(&table, "Name"), vec!["Twin Diner"]);
}

#[test]
fn test_top_5_receivers_by_claims() {
    let store = empty_store();
    let p = provider(&store, "Big Kitchen", ProviderType::Restaurant, "Pune");
    let food = listing(&store, "Thali", 50, 2, p, "Pune", FoodType::Vegetarian, MealType::Lunch);

    for (n, name) in ["R1", "R2", "R3", "R4", "R5", "R6", "R7"].iter().enumerate() {
        let r = receiver(&store, name, ReceiverType::Individual, "Pune");
        // R1 gets 1 claim, R7 gets 7
        for _ in 0..=n {
            claim(&store, food, r, ClaimStatus::Pending);
        }
    }

    let table = store.run_report("top_5_receivers_by_claims").unwrap();
    assert_eq!(table.len(), 5);
    assert_eq!(texts(&table, "Name"), vec!["R7", "R6", "R5", "R4", "R3"]);

    let counts = ints(&table, "Total_Claims");
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_top_5_with_fewer_groups_returns_all() {
    let (store, _) = seeded_store();
    let table = store.run_report("top_5_receivers_by_claims").unwrap();
    assert_eq!(texts(&table, "Name"), vec!["Hope Shelter", "City Fridge"]);
    assert_eq!(ints(&table, "Total_Claims"), vec![3, 2]);
}

#[test]
fn test_expiry_window_is_inclusive_of_today_and_today_plus_3() {
    let (store, _) = seeded_store();
    let table = store.run_report("food_expiring_in_3_days").unwrap();

    // Salad expires today, Cake at T+2, Rice at T+3; Bread (T+4) and Curry (T-1) are out
    assert_eq!(texts(&table, "Food_Name"), vec!["Salad", "Cake", "Rice"]);
    assert_eq!(
        texts(&table, "Expiry_Date"),
        vec!["2025-03-10", "2025-03-12", "2025-03-13"]
    );
}

#[test]
fn test_expiry_window_follows_the_clock() {
    let (store, _) = seeded_store();
    let later = store.with_clock(FixedClock::at(noon() + Duration::days(4)));
    let table = later.run_report("food_expiring_in_3_days").unwrap();
    assert_eq!(texts(&table, "Food_Name"), vec!["Bread"]);
}

/// Each call is one day earlier than the previous.
struct Countdown {
    start: NaiveDateTime,
    calls: AtomicI64,
}

impl Clock for Countdown {
    fn now(&self) -> NaiveDateTime {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.start - Duration::days(n)
    }
}

#[test]
fn test_daily_claim_trends_ascending() {
    let store = Store::open_in_memory_with_clock(Countdown {
        start: noon(),
        calls: AtomicI64::new(0),
    })
    .unwrap();
    let p = provider(&store, "Big Kitchen", ProviderType::Restaurant, "Pune");
    let r = receiver(&store, "Hope", ReceiverType::Shelter, "Pune");
    let food = listing(&store, "Thali", 50, 2, p, "Pune", FoodType::Vegetarian, MealType::Lunch);
    for _ in 0..3 {
        claim(&store, food, r, ClaimStatus::Pending);
    }

    let table = store.run_report("daily_claim_trends").unwrap();
    assert_eq!(
        texts(&table, "Claim_Date"),
        vec!["2025-03-08", "2025-03-09", "2025-03-10"]
    );
    assert_eq!(ints(&table, "Total_Claims"), vec![1, 1, 1]);
}

#[test]
fn test_simple_aggregates() {
    let (store, _) = seeded_store();

    let total = store.run_report("total_food_quantity_available").unwrap();
    assert_eq!(ints(&total, "Total_Quantity"), vec![28]);

    let mumbai = store.run_report("contact_providers_in_mumbai").unwrap();
    assert_eq!(texts(&mumbai, "Name"), vec!["Spice Route"]);

    let multiple = store.run_report("food_items_claimed_multiple_times").unwrap();
    assert_eq!(texts(&multiple, "Food_Name"), vec!["Salad"]);
    assert_eq!(ints(&multiple, "Claim_Count"), vec![2]);

    let top_type = store.run_report("top_provider_type").unwrap();
    assert_eq!(texts(&top_type, "Type"), vec!["Restaurant"]);
    assert_eq!(ints(&top_type, "Total_Providers"), vec![3]);
}

#[test]
fn test_claim_status_distribution() {
    let (store, _) = seeded_store();
    let mut table = store.run_report("claim_status_distribution").unwrap();
    table.rows.sort_by_key(|row| row[0].to_string());

    assert_eq!(texts(&table, "Status"), vec!["Failed", "Successful"]);
    assert_eq!(ints(&table, "Count"), vec![1, 4]);
}

#[test]
fn test_providers_receivers_per_city() {
    let (store, _) = seeded_store();
    let mut table = store.run_report("providers_receivers_per_city").unwrap();
    table.rows.sort_by_key(|row| row[0].to_string());

    assert_eq!(texts(&table, "City"), vec!["Delhi", "Mumbai", "Pune"]);
    assert_eq!(ints(&table, "Providers"), vec![1, 1, 2]);
    assert_eq!(ints(&table, "Receivers"), vec![0, 1, 1]);
}
