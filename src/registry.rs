use std::collections::HashMap;
use std::sync::OnceLock;

use log::info;
use sqlx::postgres::{PgPoolOptions, PgRow};
use tokio::sync::RwLock;

use crate::client::Client;
use crate::config::{self, ClientConfig, Driver};
use crate::error::{Error, Result};
use crate::value::Value;

/// Process-wide registry of keyed clients; entries live until the process exits
static CLIENTS: OnceLock<RwLock<HashMap<String, Client>>> = OnceLock::new();

fn clients() -> &'static RwLock<HashMap<String, Client>> {
    CLIENTS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Initialize or fetch the pooled connection registered under a key
///
/// Repeated calls with the same key return the cached handle, so callers can
/// invoke this on every request without exhausting ephemeral ports. The first
/// caller to take the write lock opens the pool; racing callers with a
/// different connection string for the same key get the already-registered
/// client.
pub async fn init(key: &str, url: &str, driver_name: &str, pool_size: u32) -> Result<Client> {
    let driver: Driver = driver_name.parse()?;
    let client_config = ClientConfig::new(key, url, driver, pool_size)?;

    if let Some(client) = get(key).await {
        return Ok(client);
    }

    let mut registry = clients().write().await;
    // Double check under the write lock, the entry may have appeared since
    // the read above. First writer wins.
    if let Some(client) = registry.get(key) {
        return Ok(client.clone());
    }

    let client = open_client(&client_config).await?;
    registry.insert(key.to_string(), client.clone());

    Ok(client)
}

/// Fetch a previously initialized client
pub async fn get(key: &str) -> Option<Client> {
    clients().read().await.get(key).cloned()
}

/// Open and ping a pool for the given configuration
async fn open_client(client_config: &ClientConfig) -> Result<Client> {
    let lifetime = config::max_connection_lifetime();

    let pool = PgPoolOptions::new()
        .max_connections(client_config.pool_size)
        .min_connections(client_config.min_connections())
        .max_lifetime(lifetime)
        .connect(&client_config.url)
        .await
        .map_err(|err| {
            Error::connection(
                format!("failed to open pool for key '{}'", client_config.key),
                err,
            )
        })?;

    // Verify the pool before publishing it in the registry
    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(|err| {
            Error::connection(format!("ping failed for key '{}'", client_config.key), err)
        })?;

    info!(
        "opened connection pool '{}' (driver {}, size {}, max lifetime {:?})",
        client_config.key, client_config.driver, client_config.pool_size, lifetime
    );

    Ok(Client::new(pool, client_config.key.clone()))
}

async fn lookup(key: &str) -> Result<Client> {
    get(key).await.ok_or_else(|| Error::unknown_connection(key))
}

/// Run a query on the keyed connection and map its first row
pub async fn query_row<T, F>(key: &str, sql: &str, params: &[Value], mapper: F) -> Result<T>
where
    F: FnOnce(&PgRow) -> Result<T>,
{
    lookup(key).await?.query_row(sql, params, mapper).await
}

/// Run a query on the keyed connection, appending mapped rows into `items`
pub async fn query<T, C, F>(
    key: &str,
    sql: &str,
    params: &[Value],
    items: &mut C,
    mapper: F,
) -> Result<()>
where
    C: Extend<T>,
    F: FnMut(&PgRow) -> Result<T>,
{
    lookup(key).await?.query(sql, params, items, mapper).await
}

/// Execute a statement on the keyed connection, returning affected rows
pub async fn execute(key: &str, sql: &str, params: &[Value]) -> Result<u64> {
    lookup(key).await?.execute(sql, params).await
}
