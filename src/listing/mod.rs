//! Listing search: facets and the filter query built from them.

pub mod filter;

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidLabel;
use crate::sql::{col, ExprExt, OrderByExpr, Query, TableRef};

pub use filter::ListingFilter;

/// A filterable attribute of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Location,
    ProviderName,
    FoodType,
}

impl Facet {
    pub const ALL: &'static [Facet] = &[Facet::Location, Facet::ProviderName, Facet::FoodType];

    pub fn label(&self) -> &'static str {
        match self {
            Facet::Location => "Location",
            Facet::ProviderName => "Provider",
            Facet::FoodType => "Food Type",
        }
    }

    /// Table and column holding the facet's values.
    fn source(&self) -> (&'static str, &'static str) {
        match self {
            Facet::Location => ("Food_Listings", "Location"),
            Facet::ProviderName => ("Providers", "Name"),
            Facet::FoodType => ("Food_Listings", "Food_Type"),
        }
    }

    /// Alias and column used inside the listing join.
    pub(crate) fn listing_column(&self) -> (&'static str, &'static str) {
        match self {
            Facet::Location => ("f", "Location"),
            Facet::ProviderName => ("p", "Name"),
            Facet::FoodType => ("f", "Food_Type"),
        }
    }

    /// Sorted distinct non-null values.
    pub fn values_query(&self) -> Query {
        let (table, column) = self.source();
        Query::new()
            .distinct()
            .select(vec![col(column)])
            .from(TableRef::new(table))
            .filter(col(column).is_not_null())
            .order_by(vec![OrderByExpr::asc(col(column))])
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Facet {
    type Err = InvalidLabel;

    /// Accepts `location`, `provider` and `food-type` (or `food_type`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "location" => Ok(Facet::Location),
            "provider" | "provider-name" => Ok(Facet::ProviderName),
            "food-type" => Ok(Facet::FoodType),
            _ => Err(InvalidLabel {
                field: "facet",
                value: s.to_string(),
                expected: "location, provider, food-type".to_string(),
            }),
        }
    }
}
