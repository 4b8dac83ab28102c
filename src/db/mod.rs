//! Single-connection SQLite access object.
//!
//! `Database` owns exactly one `rusqlite::Connection`, opened when the value
//! is built and closed when it is dropped. Each verb prepares the SQL, binds
//! the parameters and picks the driver call that matches it:
//!
//! - `select`     → every row
//! - `select_one` → first row, if any
//! - `insert`     → last insert rowid
//! - `update` / `delete` → affected row count
//!
//! Failures come back as `AppError` values tagged with the verb.

pub mod params;
pub mod row;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags, Params};
use tracing::{debug, warn};

pub use params::QueryParams;
pub use row::Row;

pub struct Database {
    conn: Connection,
    path: String,
}

impl Database {
    /// Open the database described by `cfg`. The file must already exist:
    /// `init` creates it, `connect` never does.
    pub fn connect(cfg: &Config) -> AppResult<Self> {
        let mode = if cfg.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE
        };
        let flags = mode | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        debug!(path = %cfg.database, read_only = cfg.read_only, "opening database");

        let conn = Connection::open_with_flags(&cfg.database, flags).map_err(|e| {
            warn!(path = %cfg.database, error = %e, "connection failed");
            AppError::Connection(e)
        })?;

        Self::setup(conn, cfg.database.clone(), cfg.foreign_keys)
    }

    /// Private in-memory database, foreign keys on.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory().map_err(AppError::Connection)?;
        Self::setup(conn, ":memory:".to_string(), true)
    }

    fn setup(conn: Connection, path: String, foreign_keys: bool) -> AppResult<Self> {
        if foreign_keys {
            conn.execute_batch("PRAGMA foreign_keys = ON;")
                .map_err(AppError::Connection)?;
        }

        // SQLite opens lazily: touch the schema so a missing or corrupt file
        // fails here rather than on the first query.
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |r| {
            r.get::<_, i64>(0)
        })
        .map_err(|e| {
            warn!(path = %path, error = %e, "connection failed");
            AppError::Connection(e)
        })?;

        Ok(Self { conn, path })
    }

    /// Underlying connection, for anything the verbs don't cover.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Run a query and return every row.
    pub fn select<P: Params>(&self, sql: &str, params: P) -> AppResult<Vec<Row>> {
        debug!(sql, "select");
        self.fetch_all(sql, params)
            .map_err(|e| failed(AppError::Select(e)))
    }

    /// Run a query and return the first row, or `None` when there is none.
    pub fn select_one<P: Params>(&self, sql: &str, params: P) -> AppResult<Option<Row>> {
        debug!(sql, "select_one");
        self.fetch_one(sql, params)
            .map_err(|e| failed(AppError::SelectOne(e)))
    }

    /// Execute an INSERT and return the rowid of the last inserted row.
    pub fn insert<P: Params>(&self, sql: &str, params: P) -> AppResult<i64> {
        debug!(sql, "insert");
        self.execute(sql, params)
            .map(|_| self.conn.last_insert_rowid())
            .map_err(|e| failed(AppError::Insert(e)))
    }

    /// Execute an UPDATE and return the number of affected rows.
    pub fn update<P: Params>(&self, sql: &str, params: P) -> AppResult<usize> {
        debug!(sql, "update");
        self.execute(sql, params)
            .map_err(|e| failed(AppError::Update(e)))
    }

    /// Execute a DELETE and return the number of affected rows.
    pub fn delete<P: Params>(&self, sql: &str, params: P) -> AppResult<usize> {
        debug!(sql, "delete");
        self.execute(sql, params)
            .map_err(|e| failed(AppError::Delete(e)))
    }

    pub fn in_transaction(&self) -> bool {
        !self.conn.is_autocommit()
    }

    pub fn begin_transaction(&mut self) -> AppResult<()> {
        if self.in_transaction() {
            return Err(failed(AppError::Transaction(
                "There is already an active transaction".to_string(),
            )));
        }
        debug!("begin transaction");
        self.control("BEGIN")
    }

    pub fn commit(&mut self) -> AppResult<()> {
        if !self.in_transaction() {
            return Err(failed(AppError::Transaction(
                "There is no active transaction".to_string(),
            )));
        }
        debug!("commit");
        self.control("COMMIT")
    }

    pub fn rollback(&mut self) -> AppResult<()> {
        if !self.in_transaction() {
            return Err(failed(AppError::Transaction(
                "There is no active transaction".to_string(),
            )));
        }
        debug!("rollback");
        self.control("ROLLBACK")
    }

    /// Run `func` inside a transaction: commit on `Ok`, roll back on `Err`.
    pub fn transaction<T, F>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Database) -> AppResult<T>,
    {
        self.begin_transaction()?;

        let result = func(self).and_then(|value| self.commit().map(|_| value));

        if result.is_err()
            && self.in_transaction()
            && let Err(e) = self.rollback()
        {
            warn!(error = %e, "rollback after failure did not succeed");
        }

        result
    }

    fn control(&self, stmt: &str) -> AppResult<()> {
        self.conn
            .execute_batch(stmt)
            .map_err(|e| failed(AppError::Transaction(e.to_string())))
    }

    fn fetch_all<P: Params>(&self, sql: &str, params: P) -> rusqlite::Result<Vec<Row>> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns = row::column_names(&stmt);
        let rows = stmt.query_map(params, |r| row::map_row(r, &columns))?;
        rows.collect()
    }

    fn fetch_one<P: Params>(&self, sql: &str, params: P) -> rusqlite::Result<Option<Row>> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns = row::column_names(&stmt);
        let mut rows = stmt.query(params)?;
        let first = match rows.next()? {
            Some(r) => Some(row::map_row(r, &columns)?),
            None => None,
        };
        Ok(first)
    }

    fn execute<P: Params>(&self, sql: &str, params: P) -> rusqlite::Result<usize> {
        let mut stmt = self.conn.prepare(sql)?;
        stmt.execute(params)
    }
}

fn failed(err: AppError) -> AppError {
    warn!(error = %err, "database call failed");
    err
}
