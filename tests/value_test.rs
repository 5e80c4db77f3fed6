use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};
use sqlgate::Value;

#[test]
fn test_value_from_primitives() {
    assert!(matches!(Value::from(true), Value::Bool(true)));
    assert!(matches!(Value::from(7_i16), Value::Int16(7)));
    assert!(matches!(Value::from(42_i32), Value::Int32(42)));
    assert!(matches!(Value::from(42_i64), Value::Int64(42)));
    assert!(matches!(Value::from(1.5_f64), Value::Float64(v) if v == 1.5));

    let v: Value = "hello".into();
    assert!(matches!(v, Value::Text(ref s) if s == "hello"));

    let v: Value = vec![0xde_u8, 0xad].into();
    assert!(matches!(v, Value::Bytes(ref b) if b == &[0xde, 0xad]));
}

#[test]
fn test_value_from_option() {
    let v: Value = None::<i64>.into();
    assert!(v.is_null());

    let v: Value = Some(5_i64).into();
    assert!(matches!(v, Value::Int64(5)));

    assert!(!Value::Int32(0).is_null());
}

#[test]
fn test_value_from_temporal_and_json() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert!(matches!(Value::from(date), Value::Date(d) if d == date));

    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    assert!(matches!(Value::from(at), Value::DateTimeTz(t) if t == at));

    let json = serde_json::json!({"active": true});
    assert!(matches!(Value::from(json.clone()), Value::Json(j) if j == json));
}

#[test]
fn test_value_serde_round_trip() -> Result<()> {
    let values = vec![
        Value::Null,
        Value::Bool(false),
        Value::Int64(-3),
        Value::Text("row".into()),
        Value::Bytes(vec![1, 2, 3]),
        Value::Json(serde_json::json!([1, 2])),
    ];

    for value in values {
        let encoded = serde_json::to_string(&value)?;
        let decoded: Value = serde_json::from_str(&encoded)?;
        assert_eq!(decoded, value);
    }

    Ok(())
}
