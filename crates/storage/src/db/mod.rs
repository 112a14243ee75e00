//! Thin asynchronous access layer over the SQLite store.
//!
//! Every statement goes through one of three primitives (`execute`,
//! `fetch_optional`, `fetch_all`), available both on [`Database`] and on a
//! [`UnitOfWork`] when several statements must succeed or fail together.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{
    Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteQueryResult, SqliteRow,
};
use sqlx::{Executor, FromRow, Transaction};

use crate::error::Result;

pub mod params;

pub use params::SqlParam;

const SCHEMA: &str = include_str!("schema.sql");

/// Outcome of a mutating statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutcome {
    pub last_insert_id: i64,
    pub rows_affected: u64,
}

impl From<SqliteQueryResult> for ExecOutcome {
    fn from(result: SqliteQueryResult) -> Self {
        Self {
            last_insert_id: result.last_insert_rowid(),
            rows_affected: result.rows_affected(),
        }
    }
}

/// Shared handle to the store. Cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database file behind `url`.
    ///
    /// Writers wait at most `busy_timeout` for a lock held by another
    /// connection before the statement fails.
    pub async fn new(url: &str, busy_timeout: Duration) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Private in-memory store with the schema already applied.
    ///
    /// Limited to a single connection that is never recycled, so every
    /// caller sees the same database.
    pub async fn connect_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.apply_schema().await?;
        Ok(db)
    }

    /// Create every table that does not exist yet. Safe to run on each start.
    pub async fn apply_schema(&self) -> Result<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        tracing::debug!("Schema applied");
        Ok(())
    }

    pub async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<ExecOutcome> {
        execute_on(&self.pool, sql, params).await
    }

    pub async fn fetch_optional<T>(&self, sql: &str, params: &[SqlParam]) -> Result<Option<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        fetch_optional_on(&self.pool, sql, params).await
    }

    pub async fn fetch_all<T>(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        fetch_all_on(&self.pool, sql, params).await
    }

    /// Start a unit of work backed by a transaction.
    pub async fn begin(&self) -> Result<UnitOfWork> {
        let tx = self.pool.begin().await?;
        Ok(UnitOfWork { tx })
    }

    /// Close every pooled connection, waiting for checked-out ones to return.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection closed");
    }
}

/// Statements grouped in a single transaction.
///
/// Dropping the unit without calling [`UnitOfWork::commit`] rolls it back.
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

impl UnitOfWork {
    pub async fn execute(&mut self, sql: &str, params: &[SqlParam]) -> Result<ExecOutcome> {
        execute_on(&mut *self.tx, sql, params).await
    }

    pub async fn fetch_optional<T>(&mut self, sql: &str, params: &[SqlParam]) -> Result<Option<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        fetch_optional_on(&mut *self.tx, sql, params).await
    }

    pub async fn fetch_all<T>(&mut self, sql: &str, params: &[SqlParam]) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        fetch_all_on(&mut *self.tx, sql, params).await
    }

    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(self) -> Result<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}

async fn execute_on<'c, E>(executor: E, sql: &str, params: &[SqlParam]) -> Result<ExecOutcome>
where
    E: Executor<'c, Database = Sqlite>,
{
    let mut query = sqlx::query(sql);
    for param in params {
        query = query.bind(param);
    }

    let result = query.execute(executor).await?;
    Ok(ExecOutcome::from(result))
}

async fn fetch_optional_on<'c, E, T>(
    executor: E,
    sql: &str,
    params: &[SqlParam],
) -> Result<Option<T>>
where
    E: Executor<'c, Database = Sqlite>,
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let mut query = sqlx::query_as::<_, T>(sql);
    for param in params {
        query = query.bind(param);
    }

    Ok(query.fetch_optional(executor).await?)
}

async fn fetch_all_on<'c, E, T>(executor: E, sql: &str, params: &[SqlParam]) -> Result<Vec<T>>
where
    E: Executor<'c, Database = Sqlite>,
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let mut query = sqlx::query_as::<_, T>(sql);
    for param in params {
        query = query.bind(param);
    }

    Ok(query.fetch_all(executor).await?)
}
