use thiserror::Error;

/// Result type for sqlgate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the registry, the query helpers and the column binder
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration rejected before any connection was attempted
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// No client has been initialized under the requested key
    #[error("no connection initialized for key '{key}'")]
    UnknownConnection { key: String },

    /// Opening or pinging a connection pool failed
    #[error("connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    /// A single-row query matched no rows
    #[error("query returned no rows")]
    RowNotFound,

    /// Error reported by the underlying driver during query execution
    #[error(transparent)]
    Driver(#[from] sqlx::Error),

    /// A raw column cell could not be read or converted
    #[error("conversion failed for column '{column}': {message}")]
    Convert { column: String, message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a connection error wrapping the driver failure
    pub fn connection(message: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Connection {
            message: message.into(),
            source,
        }
    }

    /// Create an unknown-connection error for a registry miss
    pub fn unknown_connection(key: impl Into<String>) -> Self {
        Self::UnknownConnection { key: key.into() }
    }

    /// Create a conversion error for a named column
    pub fn convert(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Convert {
            column: column.into(),
            message: message.into(),
        }
    }
}
