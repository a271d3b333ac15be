//! Listing filter.
//!
//! Turns the selected facet values into one parameterized SELECT over
//! `Food_Listings` joined to `Providers`. Each facet with a non-empty
//! selection adds an `IN (...)` restriction; the restrictions are ANDed.

use rusqlite::types::Value;

use super::Facet;
use crate::sql::{param, table_col, BoundQuery, ExprExt, OrderByExpr, Query, TableRef};

/// Selected values per facet. An empty selection leaves that facet open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub locations: Vec<String>,
    pub providers: Vec<String>,
    pub food_types: Vec<String>,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, value: impl Into<String>) -> Self {
        self.locations.push(value.into());
        self
    }

    pub fn provider(mut self, value: impl Into<String>) -> Self {
        self.providers.push(value.into());
        self
    }

    pub fn food_type(mut self, value: impl Into<String>) -> Self {
        self.food_types.push(value.into());
        self
    }

    /// Add several values to one facet.
    pub fn with_values<I, S>(mut self, facet: Facet, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection_mut(facet)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Values selected for `facet`, in the order they were added.
    pub fn selection(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Location => &self.locations,
            Facet::ProviderName => &self.providers,
            Facet::FoodType => &self.food_types,
        }
    }

    fn selection_mut(&mut self, facet: Facet) -> &mut Vec<String> {
        match facet {
            Facet::Location => &mut self.locations,
            Facet::ProviderName => &mut self.providers,
            Facet::FoodType => &mut self.food_types,
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        Facet::ALL.iter().all(|f| self.selection(*f).is_empty())
    }

    /// The listing query as a builder value.
    pub fn to_query(&self) -> Query {
        let mut query = Query::new()
            .select(vec![
                table_col("f", "Food_ID").into(),
                table_col("f", "Food_Name").into(),
                table_col("f", "Quantity").into(),
                table_col("f", "Expiry_Date").into(),
                table_col("p", "Name").alias("Provider"),
                table_col("f", "Location").into(),
                table_col("f", "Food_Type").into(),
                table_col("f", "Meal_Type").into(),
            ])
            .from(TableRef::new("Food_Listings").with_alias("f"))
            .inner_join(
                TableRef::new("Providers").with_alias("p"),
                table_col("f", "Provider_ID").eq(table_col("p", "Provider_ID")),
            );

        for facet in Facet::ALL {
            let values = dedup(self.selection(*facet));
            if values.is_empty() {
                continue;
            }
            let (alias, column) = facet.listing_column();
            query = query.filter(
                table_col(alias, column)
                    .in_list(values.into_iter().map(|v| param(Value::Text(v.to_string())))),
            );
        }

        query.order_by(vec![OrderByExpr::asc(table_col("f", "Food_ID"))])
    }

    /// SQL text and parameters. Pure; touches no store.
    pub fn build(&self) -> BoundQuery {
        self.to_query().bind()
    }
}

/// First-seen order, duplicates dropped.
fn dedup(values: &[String]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::with_capacity(values.len());
    for v in values {
        if !out.contains(&v.as_str()) {
            out.push(v);
        }
    }
    out
}
