//! Categorical column types.
//!
//! Each enum maps one-to-one onto the label stored in the database, so the
//! label is both the display form and the persisted form.

use std::fmt;
use std::str::FromStr;

use rusqlite::types::Value;

use crate::error::InvalidLabel;

macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            /// Every variant, in presentation order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The stored label.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InvalidLabel;

            /// Parse a label, ignoring ASCII case and surrounding whitespace.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| InvalidLabel {
                        field: $field,
                        value: s.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }

        impl From<$name> for Value {
            fn from(v: $name) -> Value {
                Value::Text(v.as_str().to_string())
            }
        }
    };
}

labelled_enum! {
    /// Kind of organisation or person donating food.
    ProviderType, "provider type" {
        Restaurant => "Restaurant",
        Individual => "Individual",
        Supermarket => "Supermarket",
        Ngo => "NGO",
        Other => "Other",
    }
}

labelled_enum! {
    /// Kind of organisation or person receiving food.
    ReceiverType, "receiver type" {
        Ngo => "NGO",
        Shelter => "Shelter",
        Individual => "Individual",
        CommunityFridge => "Community Fridge",
        Other => "Other",
    }
}

labelled_enum! {
    /// Dietary category of a listing.
    FoodType, "food type" {
        Vegetarian => "Vegetarian",
        NonVegetarian => "Non-Vegetarian",
        Vegan => "Vegan",
        Unknown => "Unknown",
    }
}

labelled_enum! {
    /// Meal a listing is intended for.
    MealType, "meal type" {
        Breakfast => "Breakfast",
        Lunch => "Lunch",
        Dinner => "Dinner",
        Snacks => "Snacks",
        Unknown => "Unknown",
    }
}

labelled_enum! {
    /// Lifecycle status of a claim.
    ClaimStatus, "claim status" {
        Pending => "Pending",
        Successful => "Successful",
        Failed => "Failed",
    }
}
