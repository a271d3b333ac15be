//! Inputs for the create operations.
//!
//! Each input validates itself and renders to a single-row INSERT. The
//! validated fields are the ones a blank form would otherwise let through.

use chrono::{NaiveDate, NaiveDateTime};

use super::types::{ClaimStatus, FoodType, MealType, ProviderType, ReceiverType};
use crate::error::ValidationError;
use crate::sql::{param, Expr, Insert};
use crate::store::clock::{DATE_FORMAT, TIMESTAMP_FORMAT};

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

/// Optional text columns are stored as NULL when left blank.
fn optional_text(value: &str) -> Expr {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        param(rusqlite::types::Value::Null)
    } else {
        param(trimmed.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProvider {
    pub name: String,
    pub provider_type: ProviderType,
    pub address: String,
    pub city: String,
    pub contact: String,
}

impl NewProvider {
    pub fn new(name: impl Into<String>, provider_type: ProviderType) -> Self {
        Self {
            name: name.into(),
            provider_type,
            address: String::new(),
            city: String::new(),
            contact: String::new(),
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        required("Provider Name", &self.name)
    }

    pub(crate) fn to_insert(&self) -> Insert {
        Insert::into("Providers")
            .value("Name", param(self.name.trim().to_string()))
            .value("Type", param(self.provider_type))
            .value("Address", optional_text(&self.address))
            .value("City", optional_text(&self.city))
            .value("Contact", optional_text(&self.contact))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReceiver {
    pub name: String,
    pub receiver_type: ReceiverType,
    pub city: String,
    pub contact: String,
}

impl NewReceiver {
    pub fn new(name: impl Into<String>, receiver_type: ReceiverType) -> Self {
        Self {
            name: name.into(),
            receiver_type,
            city: String::new(),
            contact: String::new(),
        }
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        required("Receiver Name", &self.name)
    }

    pub(crate) fn to_insert(&self) -> Insert {
        Insert::into("Receivers")
            .value("Name", param(self.name.trim().to_string()))
            .value("Type", param(self.receiver_type))
            .value("City", optional_text(&self.city))
            .value("Contact", optional_text(&self.contact))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFoodListing {
    pub food_name: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
    pub provider_id: i64,
    pub location: String,
    pub food_type: FoodType,
    pub meal_type: MealType,
}

impl NewFoodListing {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("Food Name", &self.food_name)?;
        if self.quantity < 1 {
            return Err(ValidationError::TooSmall {
                field: "Quantity",
                min: 1,
                value: self.quantity,
            });
        }
        Ok(())
    }

    pub(crate) fn to_insert(&self) -> Insert {
        Insert::into("Food_Listings")
            .value("Food_Name", param(self.food_name.trim().to_string()))
            .value("Quantity", param(self.quantity))
            .value(
                "Expiry_Date",
                param(self.expiry_date.format(DATE_FORMAT).to_string()),
            )
            .value("Provider_ID", param(self.provider_id))
            .value("Location", optional_text(&self.location))
            .value("Food_Type", param(self.food_type))
            .value("Meal_Type", param(self.meal_type))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewClaim {
    pub food_id: i64,
    pub receiver_id: i64,
    pub status: ClaimStatus,
}

impl NewClaim {
    pub fn new(food_id: i64, receiver_id: i64, status: ClaimStatus) -> Self {
        Self {
            food_id,
            receiver_id,
            status,
        }
    }

    /// `created_at` comes from the store clock, never from the caller.
    pub(crate) fn to_insert(&self, created_at: NaiveDateTime) -> Insert {
        Insert::into("Claims")
            .value("Food_ID", param(self.food_id))
            .value("Receiver_ID", param(self.receiver_id))
            .value("Status", param(self.status))
            .value(
                "Timestamp",
                param(created_at.format(TIMESTAMP_FORMAT).to_string()),
            )
    }
}
