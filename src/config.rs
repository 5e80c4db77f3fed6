use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable overriding the maximum connection lifetime, in milliseconds
pub const MAX_CONN_LIFE_ENV: &str = "SQL_MAX_CONN_LIFE";

/// Default maximum connection lifetime (2 minutes)
pub const DEFAULT_MAX_CONN_LIFE: Duration = Duration::from_millis(120_000);

/// Database driver selector
///
/// The driver is compiled in, so this mostly guards against a connection URL
/// that was written for a different backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Driver {
    Postgres,
}

impl Driver {
    /// URL schemes accepted for this driver
    fn schemes(&self) -> &'static [&'static str] {
        match self {
            Driver::Postgres => &["postgres", "postgresql"],
        }
    }

    /// Check that a connection URL carries one of the driver's schemes
    pub fn matches_url(&self, url: &str) -> bool {
        match url.split_once("://") {
            Some((scheme, rest)) => {
                !rest.is_empty()
                    && self
                        .schemes()
                        .iter()
                        .any(|candidate| scheme.eq_ignore_ascii_case(candidate))
            }
            None => false,
        }
    }
}

impl FromStr for Driver {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Driver::Postgres),
            other => Err(Error::config(format!("unsupported driver '{}'", other))),
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Driver::Postgres => write!(f, "postgres"),
        }
    }
}

/// Immutable description of one registry entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub key: String,
    pub url: String,
    pub driver: Driver,
    pub pool_size: u32,
}

impl ClientConfig {
    /// Validate and build the configuration for a keyed connection
    pub fn new(
        key: impl Into<String>,
        url: impl Into<String>,
        driver: Driver,
        pool_size: u32,
    ) -> Result<Self> {
        let key = key.into();
        let url = url.into();

        if key.is_empty() {
            return Err(Error::config("connection key must not be empty"));
        }
        if pool_size == 0 {
            return Err(Error::config("connection pool size must be at least 1"));
        }
        if !driver.matches_url(&url) {
            return Err(Error::config(format!(
                "connection URL does not match driver '{}'",
                driver
            )));
        }

        Ok(Self {
            key,
            url,
            driver,
            pool_size,
        })
    }

    /// Number of idle connections kept warm, a third of the pool
    pub fn min_connections(&self) -> u32 {
        self.pool_size / 3
    }
}

/// Maximum lifetime for pooled connections
///
/// Reads `SQL_MAX_CONN_LIFE` (milliseconds). Unset, unparsable or zero values
/// fall back to the 2-minute default.
pub fn max_connection_lifetime() -> Duration {
    match env::var(MAX_CONN_LIFE_ENV) {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(millis) if millis > 0 => Duration::from_millis(millis),
            _ => {
                warn!(
                    "invalid {} value '{}', using default of {:?}",
                    MAX_CONN_LIFE_ENV, raw, DEFAULT_MAX_CONN_LIFE
                );
                DEFAULT_MAX_CONN_LIFE
            }
        },
        Err(_) => DEFAULT_MAX_CONN_LIFE,
    }
}
