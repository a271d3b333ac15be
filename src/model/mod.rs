//! Domain model for food donations.
//!
//! Four append-only entities: providers post food listings, receivers claim
//! them. The [`types`] module holds the categorical columns and [`entry`]
//! the create-operation inputs.

pub mod entry;
pub mod types;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InvalidLabel;

pub use entry::{NewClaim, NewFoodListing, NewProvider, NewReceiver};
pub use types::{ClaimStatus, FoodType, MealType, ProviderType, ReceiverType};

/// One of the persisted tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Providers,
    Receivers,
    FoodListings,
    Claims,
}

impl Entity {
    pub const ALL: &'static [Entity] = &[
        Entity::Providers,
        Entity::Receivers,
        Entity::FoodListings,
        Entity::Claims,
    ];

    pub fn table(&self) -> &'static str {
        match self {
            Entity::Providers => "Providers",
            Entity::Receivers => "Receivers",
            Entity::FoodListings => "Food_Listings",
            Entity::Claims => "Claims",
        }
    }

    pub fn id_column(&self) -> &'static str {
        match self {
            Entity::Providers => "Provider_ID",
            Entity::Receivers => "Receiver_ID",
            Entity::FoodListings => "Food_ID",
            Entity::Claims => "Claim_ID",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

impl FromStr for Entity {
    type Err = InvalidLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "providers" => Ok(Entity::Providers),
            "receivers" => Ok(Entity::Receivers),
            "listings" | "food_listings" => Ok(Entity::FoodListings),
            "claims" => Ok(Entity::Claims),
            _ => Err(InvalidLabel {
                field: "entity",
                value: s.to_string(),
                expected: "providers, receivers, listings, claims".to_string(),
            }),
        }
    }
}

/// An id and display name for a picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: i64,
    pub name: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}
