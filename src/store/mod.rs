//! SQLite-backed store.
//!
//! A [`Store`] owns a connection pool and a clock. Every public operation
//! checks out one connection and runs inside its own transaction, committed
//! on success and rolled back on error.

pub mod clock;
mod pool;
pub mod schema;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rusqlite::{Transaction, TransactionBehavior};
use tracing::{debug, info, warn};

use crate::config::{is_in_memory, DatabaseSettings};
use crate::error::Result;
use crate::listing::{Facet, ListingFilter};
use crate::model::{
    Choice, Entity, NewClaim, NewFoodListing, NewProvider, NewReceiver,
};
use crate::report::{ReportCatalog, DAYS_PARAM, TODAY_PARAM};
use crate::sql::{col, BoundQuery, OrderByExpr, Query, TableRef};
use crate::table::{column_names, Cell, Table};

pub use clock::{Clock, FixedClock, SystemClock};
pub use pool::PoolOptions;
use pool::ConnectionPool;

/// Provider and receiver contact tables.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ContactDirectory {
    pub providers: Table,
    pub receivers: Table,
}

pub struct Store {
    pool: ConnectionPool,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("pool_size", &self.pool.size())
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Open (creating if needed) a database file and bootstrap its schema.
    pub fn open(path: impl AsRef<Path>, options: PoolOptions) -> Result<Self> {
        let pool = ConnectionPool::open(path.as_ref(), options)?;
        Self::bootstrap(pool, Arc::new(SystemClock))
    }

    /// Open the database described by `[database]` settings.
    pub fn from_settings(settings: &DatabaseSettings) -> Result<Self> {
        let path = settings.resolved_path()?;
        if is_in_memory(&path) {
            let pool = ConnectionPool::in_memory(settings.busy_timeout())?;
            return Self::bootstrap(pool, Arc::new(SystemClock));
        }
        Self::open(
            path,
            PoolOptions {
                size: settings.pool_size as usize,
                busy_timeout: settings.busy_timeout(),
            },
        )
    }

    /// A private in-memory database with an empty schema.
    pub fn open_in_memory() -> Result<Self> {
        Self::open_in_memory_with_clock(SystemClock)
    }

    pub fn open_in_memory_with_clock(clock: impl Clock + 'static) -> Result<Self> {
        let pool = ConnectionPool::in_memory(Duration::from_secs(5))?;
        Self::bootstrap(pool, Arc::new(clock))
    }

    /// Replace the clock used for claim timestamps and the expiry window.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    fn bootstrap(pool: ConnectionPool, clock: Arc<dyn Clock>) -> Result<Self> {
        let store = Self { pool, clock };
        store.write(|tx| Ok(schema::bootstrap(tx)?))?;
        Ok(store)
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    // -------------------------------------------------------------------------
    // Listings
    // -------------------------------------------------------------------------

    /// Distinct non-null values of one facet, sorted.
    pub fn list_facet_values(&self, facet: Facet) -> Result<Vec<String>> {
        let table = self.select(&facet.values_query().bind())?;
        Ok(table
            .rows
            .into_iter()
            .filter_map(|mut row| match row.swap_remove(0) {
                Cell::Null => None,
                cell => Some(cell.to_string()),
            })
            .collect())
    }

    /// Listings joined to their provider, restricted by the filter.
    pub fn query_listings(&self, filter: &ListingFilter) -> Result<Table> {
        self.select(&filter.build())
    }

    // -------------------------------------------------------------------------
    // Reports
    // -------------------------------------------------------------------------

    pub fn list_report_names(&self) -> Result<Vec<&'static str>> {
        Ok(ReportCatalog::builtin()?.list_reports())
    }

    /// Run a catalog report by key or title.
    pub fn run_report(&self, name: &str) -> Result<Table> {
        let def = ReportCatalog::builtin()?.get(name)?;
        let today = self.clock.today().format(clock::DATE_FORMAT).to_string();

        self.read(|tx| {
            debug!(report = def.key, sql = def.sql, "running report");
            let mut stmt = tx.prepare(def.sql)?;
            if let Some(idx) = stmt.parameter_index(TODAY_PARAM)? {
                stmt.raw_bind_parameter(idx, &today)?;
            }
            if let (Some(idx), Some(days)) = (stmt.parameter_index(DAYS_PARAM)?, def.window_days()) {
                stmt.raw_bind_parameter(idx, days)?;
            }
            let columns = column_names(&stmt);
            let table = Table::collect(columns, stmt.raw_query())?;
            Ok(table)
        })
    }

    // -------------------------------------------------------------------------
    // Record entry
    // -------------------------------------------------------------------------

    pub fn create_provider(&self, input: &NewProvider) -> Result<i64> {
        input.validate()?;
        let id = self.insert(&input.to_insert().bind())?;
        info!(id, name = %input.name, "created provider");
        Ok(id)
    }

    pub fn create_receiver(&self, input: &NewReceiver) -> Result<i64> {
        input.validate()?;
        let id = self.insert(&input.to_insert().bind())?;
        info!(id, name = %input.name, "created receiver");
        Ok(id)
    }

    pub fn create_food_listing(&self, input: &NewFoodListing) -> Result<i64> {
        input.validate()?;
        let id = self.insert(&input.to_insert().bind())?;
        info!(id, provider_id = input.provider_id, "created food listing");
        Ok(id)
    }

    pub fn create_claim(&self, input: &NewClaim) -> Result<i64> {
        let created_at = self.clock.now();
        let id = self.insert(&input.to_insert(created_at).bind())?;
        info!(
            id,
            food_id = input.food_id,
            receiver_id = input.receiver_id,
            "created claim"
        );
        Ok(id)
    }

    // -------------------------------------------------------------------------
    // Browsing
    // -------------------------------------------------------------------------

    /// Name, type, city and contact of every provider and receiver.
    pub fn contact_directory(&self) -> Result<ContactDirectory> {
        let contacts = |table: &str| {
            Query::new()
                .select(vec![col("Name"), col("Type"), col("City"), col("Contact")])
                .from(TableRef::new(table))
                .order_by(vec![OrderByExpr::asc(col("Name"))])
                .bind()
        };
        let providers = contacts(schema::PROVIDERS);
        let receivers = contacts(schema::RECEIVERS);

        // both tables come from one transaction
        self.read(|tx| {
            Ok(ContactDirectory {
                providers: run_select(tx, &providers)?,
                receivers: run_select(tx, &receivers)?,
            })
        })
    }

    /// Every row of one table, ordered by id.
    pub fn list_records(&self, entity: Entity) -> Result<Table> {
        let query = Query::new()
            .select_star()
            .from(TableRef::new(entity.table()))
            .order_by(vec![OrderByExpr::asc(col(entity.id_column()))]);
        self.select(&query.bind())
    }

    pub fn provider_choices(&self) -> Result<Vec<Choice>> {
        self.choices(schema::PROVIDERS, "Provider_ID", "Name")
    }

    pub fn receiver_choices(&self) -> Result<Vec<Choice>> {
        self.choices(schema::RECEIVERS, "Receiver_ID", "Name")
    }

    pub fn food_choices(&self) -> Result<Vec<Choice>> {
        self.choices(schema::FOOD_LISTINGS, "Food_ID", "Food_Name")
    }

    fn choices(&self, table: &str, id: &str, name: &str) -> Result<Vec<Choice>> {
        let query = Query::new()
            .select(vec![col(id), col(name)])
            .from(TableRef::new(table))
            .order_by(vec![OrderByExpr::asc(col(name)), OrderByExpr::asc(col(id))]);
        let table = self.select(&query.bind())?;
        Ok(table
            .rows
            .iter()
            .filter_map(|row| {
                Some(Choice {
                    id: row[0].as_i64()?,
                    name: row[1].to_string(),
                })
            })
            .collect())
    }

    // -------------------------------------------------------------------------
    // Transactions
    // -------------------------------------------------------------------------

    fn select(&self, query: &BoundQuery) -> Result<Table> {
        self.read(|tx| run_select(tx, query))
    }

    fn insert(&self, stmt: &BoundQuery) -> Result<i64> {
        self.write(|tx| {
            debug!(sql = %stmt.sql, params = stmt.params.len(), "executing insert");
            tx.execute(&stmt.sql, stmt.params())?;
            Ok(tx.last_insert_rowid())
        })
    }

    fn read<T>(&self, op: impl FnOnce(&Transaction<'_>) -> Result<T>) -> Result<T> {
        self.transaction(TransactionBehavior::Deferred, op)
    }

    fn write<T>(&self, op: impl FnOnce(&Transaction<'_>) -> Result<T>) -> Result<T> {
        self.transaction(TransactionBehavior::Immediate, op)
    }

    fn transaction<T>(
        &self,
        behavior: TransactionBehavior,
        op: impl FnOnce(&Transaction<'_>) -> Result<T>,
    ) -> Result<T> {
        let mut conn = self.pool.get();
        let tx = conn.transaction_with_behavior(behavior)?;
        match op(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(err) => {
                warn!(error = %err, "rolling back transaction");
                if let Err(rollback) = tx.rollback() {
                    warn!(error = %rollback, "rollback failed");
                }
                Err(err)
            }
        }
    }
}

fn run_select(tx: &Transaction<'_>, query: &BoundQuery) -> Result<Table> {
    debug!(sql = %query.sql, params = query.params.len(), "executing query");
    let mut stmt = tx.prepare(&query.sql)?;
    Ok(Table::query(&mut stmt, query.params())?)
}
