use anyhow::Result;
use sqlgate::{registry, Error, Value};

mod common;

// These tests exercise the paths that fail before any network activity;
// round-trips against a live database are out of scope for the suite.

#[tokio::test]
async fn test_get_unknown_key_is_none() {
    common::init_logs();
    assert!(registry::get("never-initialized").await.is_none());
}

#[tokio::test]
async fn test_helpers_fail_on_unknown_key() -> Result<()> {
    let err = registry::execute("missing", "DELETE FROM widgets", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownConnection { ref key } if key == "missing"));

    let mut items: Vec<i64> = Vec::new();
    let err = registry::query("missing", "SELECT id FROM widgets", &[], &mut items, |_| {
        Ok(0)
    })
    .await
    .unwrap_err();
    assert!(matches!(err, Error::UnknownConnection { .. }));
    assert!(items.is_empty());

    let err = registry::query_row(
        "missing",
        "SELECT id FROM widgets WHERE id = $1",
        &[Value::Int64(1)],
        |_| Ok(()),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("missing"));

    Ok(())
}

#[tokio::test]
async fn test_init_rejects_unsupported_driver() {
    let err = registry::init("orders", "postgres://localhost/orders", "sybase", 5)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("sybase"));
}

#[tokio::test]
async fn test_init_rejects_mismatched_url() {
    let err = registry::init("orders", "mysql://localhost/orders", "postgres", 5)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[tokio::test]
async fn test_init_rejects_bad_shape() {
    let err = registry::init("", "postgres://localhost/orders", "postgres", 5)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));

    let err = registry::init("orders", "postgres://localhost/orders", "postgres", 0)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}
