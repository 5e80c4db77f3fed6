use std::sync::Arc;

use futures::TryStreamExt;
use log::debug;
use sqlx::postgres::{PgPool, PgRow};

use crate::error::{Error, Result};
use crate::value::{bind_params, Value};

/// Handle to one pooled connection, cheap to clone
///
/// Wraps the pool together with its registry key; immutable after creation.
#[derive(Clone, Debug)]
pub struct Client {
    pool: Arc<PgPool>,
    key: String,
}

impl Client {
    /// Wrap an opened pool under its key
    pub fn new(pool: PgPool, key: impl Into<String>) -> Self {
        Self {
            pool: Arc::new(pool),
            key: key.into(),
        }
    }

    /// Get a reference to the inner connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the registry key this client was created under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Run a query and map its first row
    ///
    /// Returns [`Error::RowNotFound`] when the query matches nothing.
    pub async fn query_row<T, F>(&self, sql: &str, params: &[Value], mapper: F) -> Result<T>
    where
        F: FnOnce(&PgRow) -> Result<T>,
    {
        debug!("query_row on '{}': {}", self.key, sql);

        let row = bind_params(sqlx::query(sql), params)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|err| match err {
                sqlx::Error::RowNotFound => Error::RowNotFound,
                other => Error::from(other),
            })?;

        mapper(&row)
    }

    /// Run a query, appending every mapped row into the caller's collection
    ///
    /// Rows are streamed and converted one at a time; the first mapper or
    /// driver error stops the scan. A query matching nothing leaves `items`
    /// untouched.
    pub async fn query<T, C, F>(
        &self,
        sql: &str,
        params: &[Value],
        items: &mut C,
        mut mapper: F,
    ) -> Result<()>
    where
        C: Extend<T>,
        F: FnMut(&PgRow) -> Result<T>,
    {
        debug!("query on '{}': {}", self.key, sql);

        let mut rows = bind_params(sqlx::query(sql), params).fetch(self.pool.as_ref());
        while let Some(row) = rows.try_next().await? {
            let item = mapper(&row)?;
            items.extend(std::iter::once(item));
        }

        Ok(())
    }

    /// Execute a statement and return the affected-row count
    pub async fn execute(&self, sql: &str, params: &[Value]) -> Result<u64> {
        debug!("execute on '{}': {}", self.key, sql);

        let result = bind_params(sqlx::query(sql), params)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
