use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{Row, ValueRef};

use crate::error::{Error, Result};

/// Capture the raw cells of the named columns from a scanned row
///
/// Each cell keeps the driver's byte representation so a mapper can decide
/// the target type afterwards. The map is transient, meant to be dropped once
/// the row has been converted. A column name absent from the row is an error.
pub fn bind_columns(row: &PgRow, columns: &[&str]) -> Result<HashMap<String, ColumnBinder>> {
    let mut bound = HashMap::with_capacity(columns.len());

    for &column in columns {
        let value = row.try_get_raw(column)?;
        let raw = if value.is_null() {
            None
        } else {
            let bytes = value
                .as_bytes()
                .map_err(|err| Error::convert(column, err.to_string()))?;
            Some(bytes.to_vec())
        };
        bound.insert(column.to_string(), ColumnBinder::new(raw));
    }

    Ok(bound)
}

/// Look up a bound column, turning a missing entry into a conversion error
pub fn required<'a>(
    bound: &'a HashMap<String, ColumnBinder>,
    column: &str,
) -> Result<&'a ColumnBinder> {
    bound
        .get(column)
        .ok_or_else(|| Error::convert(column, "column was not bound"))
}

/// One raw column cell captured from a scanned row
///
/// `None` represents SQL NULL. Conversion accessors return `None` for NULL,
/// empty or unparsable cells; callers wanting the lenient zero-value
/// behaviour chain `unwrap_or_default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnBinder {
    raw: Option<Vec<u8>>,
}

impl ColumnBinder {
    /// Wrap a raw cell, `None` for SQL NULL
    pub fn new(raw: Option<Vec<u8>>) -> Self {
        Self { raw }
    }

    /// Whether the cell held SQL NULL
    #[inline]
    pub fn is_null(&self) -> bool {
        self.raw.is_none()
    }

    /// Cell bytes; `None` for NULL or empty cells
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.raw.as_deref().filter(|bytes| !bytes.is_empty())
    }

    /// Cell as UTF-8 text
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Cell as an owned string
    pub fn as_string(&self) -> Option<String> {
        self.as_str().map(str::to_owned)
    }

    /// Cell parsed as a 64-bit integer
    pub fn as_i64(&self) -> Option<i64> {
        self.as_str()?.trim().parse().ok()
    }

    /// Cell parsed as a 32-bit integer
    pub fn as_i32(&self) -> Option<i32> {
        self.as_str()?.trim().parse().ok()
    }

    /// Cell parsed as a 64-bit float
    pub fn as_f64(&self) -> Option<f64> {
        self.as_str()?.trim().parse().ok()
    }

    /// Cell parsed as a 32-bit float
    pub fn as_f32(&self) -> Option<f32> {
        self.as_str()?.trim().parse().ok()
    }

    /// Cell parsed as a boolean; accepts true/false, t/f, 1/0
    pub fn as_bool(&self) -> Option<bool> {
        match self.as_str()?.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "1" => Some(true),
            "false" | "f" | "0" => Some(false),
            _ => None,
        }
    }

    /// Cell parsed as an RFC 3339 timestamp
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        let raw = self.as_str()?;
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc))
    }

    /// Cell parsed as a timestamp, RFC 3339 first, then a legacy format
    ///
    /// The fallback is a chrono format string for rows written before the
    /// store standardized on RFC 3339; its result is taken as UTC.
    pub fn as_datetime_with(&self, fallback_format: &str) -> Option<DateTime<Utc>> {
        if let Some(parsed) = self.as_datetime() {
            return Some(parsed);
        }
        let raw = self.as_str()?;
        NaiveDateTime::parse_from_str(raw.trim(), fallback_format)
            .ok()
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
    }

    /// Cell parsed as JSON
    pub fn as_json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(self.as_bytes()?).ok()
    }
}
