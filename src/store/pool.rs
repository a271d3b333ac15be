//! Fixed-size SQLite connection pool.
//!
//! Connections are opened eagerly and handed out one at a time. A checkout
//! blocks until a connection is returned.

use std::ops::{Deref, DerefMut};
use std::path::Path;
use std::sync::{Condvar, Mutex, PoisonError};
use std::time::Duration;

use rusqlite::Connection;
use tracing::debug;

/// How each pooled connection is configured.
#[derive(Debug, Clone, Copy)]
pub struct PoolOptions {
    pub size: usize,
    pub busy_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            size: 4,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

pub(crate) struct ConnectionPool {
    idle: Mutex<Vec<Connection>>,
    returned: Condvar,
    size: usize,
}

impl ConnectionPool {
    /// Open `options.size` connections to a database file.
    pub fn open(path: &Path, options: PoolOptions) -> rusqlite::Result<Self> {
        let size = options.size.max(1);
        let mut conns = Vec::with_capacity(size);
        for _ in 0..size {
            let conn = Connection::open(path)?;
            let mode: String =
                conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
            debug!(journal_mode = %mode, "configured connection");
            configure(&conn, options.busy_timeout)?;
            conns.push(conn);
        }
        debug!(path = %path.display(), size, "opened connection pool");
        Ok(Self::from_connections(conns))
    }

    /// A single connection to a private in-memory database.
    ///
    /// Each in-memory connection would see its own empty database, so the
    /// pool never holds more than one.
    pub fn in_memory(busy_timeout: Duration) -> rusqlite::Result<Self> {
        let conn = Connection::open_in_memory()?;
        configure(&conn, busy_timeout)?;
        Ok(Self::from_connections(vec![conn]))
    }

    fn from_connections(conns: Vec<Connection>) -> Self {
        Self {
            size: conns.len(),
            idle: Mutex::new(conns),
            returned: Condvar::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Check out a connection, waiting for one to be returned if necessary.
    pub fn get(&self) -> PooledConnection<'_> {
        // a panic while holding the lock cannot leave the Vec half-updated
        let mut idle = self.idle.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            if let Some(conn) = idle.pop() {
                return PooledConnection {
                    pool: self,
                    conn: Some(conn),
                };
            }
            idle = self
                .returned
                .wait(idle)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn put(&self, conn: Connection) {
        let mut idle = self.idle.lock().unwrap_or_else(PoisonError::into_inner);
        idle.push(conn);
        self.returned.notify_one();
    }
}

fn configure(conn: &Connection, busy_timeout: Duration) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.busy_timeout(busy_timeout)?;
    Ok(())
}

/// A connection on loan from the pool; returned when dropped.
pub(crate) struct PooledConnection<'a> {
    pool: &'a ConnectionPool,
    conn: Option<Connection>,
}

impl Deref for PooledConnection<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        self.conn.as_ref().expect("connection present until drop")
    }
}

impl DerefMut for PooledConnection<'_> {
    fn deref_mut(&mut self) -> &mut Connection {
        self.conn.as_mut().expect("connection present until drop")
    }
}

impl Drop for PooledConnection<'_> {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            self.pool.put(conn);
        }
    }
}
