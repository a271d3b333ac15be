//! # Foodlink
//!
//! Reporting and record-entry core for a food donation network.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐   ┌──────────────────────┐   ┌──────────────────┐
//! │ ListingFilter        │   │ ReportCatalog        │   │ New* inputs      │
//! │ (facet selections)   │   │ (21 fixed queries)   │   │ (validated)      │
//! └──────────┬───────────┘   └──────────┬───────────┘   └────────┬─────────┘
//!            │ sql builder              │ sqlparser check        │ INSERT
//!            ▼                          ▼                        ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ Store: connection pool, one transaction per operation, injected clock   │
//! └─────────────────────────────────────────────────────────────────────────┘
//!                                   │
//!                                   ▼
//!                          Table ──► BarChart
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use foodlink::prelude::*;
//!
//! let store = Store::open_in_memory()?;
//! let id = store.create_provider(&NewProvider::new("Green Grocer", ProviderType::Supermarket))?;
//! let listings = store.query_listings(&ListingFilter::new().provider("Green Grocer"))?;
//! let top = store.run_report("top_5_receivers_by_claims")?;
//! ```

pub mod config;
pub mod error;
pub mod listing;
pub mod model;
pub mod report;
pub mod sql;
pub mod store;
pub mod table;

pub use error::{Error, InvalidLabel, Result, ValidationError};
pub use listing::{Facet, ListingFilter};
pub use report::{BarChart, ReportCatalog, ReportDef, ReportKind};
pub use store::{Clock, ContactDirectory, FixedClock, PoolOptions, Store, SystemClock};
pub use table::{Cell, Table};

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::error::{Error, Result, ValidationError};
    pub use crate::listing::{Facet, ListingFilter};
    pub use crate::model::{
        Choice, ClaimStatus, Entity, FoodType, MealType, NewClaim, NewFoodListing, NewProvider,
        NewReceiver, ProviderType, ReceiverType,
    };
    pub use crate::report::{BarChart, ReportCatalog};
    pub use crate::store::{Clock, FixedClock, Store, SystemClock};
    pub use crate::table::{Cell, Table};
}
