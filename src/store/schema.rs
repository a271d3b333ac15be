//! Table definitions.
//!
//! Names follow the existing `food_wastage.db` layout. Every statement is
//! idempotent, so bootstrapping an already populated file leaves it as is.

use rusqlite::Connection;
use tracing::info;

pub const PROVIDERS: &str = "Providers";
pub const RECEIVERS: &str = "Receivers";
pub const FOOD_LISTINGS: &str = "Food_Listings";
pub const CLAIMS: &str = "Claims";

const DDL: &str = r#"
CREATE TABLE IF NOT EXISTS Providers (
    Provider_ID INTEGER PRIMARY KEY,
    Name        TEXT NOT NULL,
    Type        TEXT NOT NULL,
    Address     TEXT,
    City        TEXT,
    Contact     TEXT
);

CREATE TABLE IF NOT EXISTS Receivers (
    Receiver_ID INTEGER PRIMARY KEY,
    Name        TEXT NOT NULL,
    Type        TEXT NOT NULL,
    City        TEXT,
    Contact     TEXT
);

CREATE TABLE IF NOT EXISTS Food_Listings (
    Food_ID     INTEGER PRIMARY KEY,
    Food_Name   TEXT NOT NULL,
    Quantity    INTEGER NOT NULL CHECK (Quantity > 0),
    Expiry_Date TEXT NOT NULL,
    Provider_ID INTEGER NOT NULL REFERENCES Providers (Provider_ID),
    Location    TEXT,
    Food_Type   TEXT NOT NULL,
    Meal_Type   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Claims (
    Claim_ID    INTEGER PRIMARY KEY,
    Food_ID     INTEGER NOT NULL REFERENCES Food_Listings (Food_ID),
    Receiver_ID INTEGER NOT NULL REFERENCES Receivers (Receiver_ID),
    Status      TEXT NOT NULL CHECK (Status IN ('Pending', 'Successful', 'Failed')),
    Timestamp   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_food_listings_provider ON Food_Listings (Provider_ID);
CREATE INDEX IF NOT EXISTS idx_claims_food ON Claims (Food_ID);
CREATE INDEX IF NOT EXISTS idx_claims_receiver ON Claims (Receiver_ID);
"#;

/// Create any missing tables and indexes.
pub fn bootstrap(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(DDL)?;
    info!("schema ready");
    Ok(())
}
