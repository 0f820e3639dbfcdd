use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

pub type Fields = BTreeMap<String, FieldValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Timestamp(DateTime<Utc>),
    Array(Vec<FieldValue>),
    Map(Fields),
}

impl FieldValue {
    /// Encodes the value in the typed JSON form of the Firestore REST API.
    pub fn to_firestore(&self) -> Value {
        match self {
            Self::Null => json!({ "nullValue": null }),
            Self::Boolean(value) => json!({ "booleanValue": value }),
            // int64 travels as a decimal string
            Self::Integer(value) => json!({ "integerValue": value.to_string() }),
            Self::Double(value) => json!({ "doubleValue": value }),
            Self::String(value) => json!({ "stringValue": value }),
            Self::Timestamp(value) => json!({
                "timestampValue": value.to_rfc3339_opts(SecondsFormat::Micros, true)
            }),
            Self::Array(values) => json!({
                "arrayValue": {
                    "values": values.iter().map(FieldValue::to_firestore).collect::<Vec<Value>>()
                }
            }),
            Self::Map(fields) => json!({ "mapValue": { "fields": encode_fields(fields) } }),
        }
    }
}

pub fn encode_fields(fields: &Fields) -> Value {
    Value::Object(
        fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_firestore()))
            .collect(),
    )
}

pub fn record<const N: usize>(fields: [(&str, FieldValue); N]) -> Fields {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<Fields> for FieldValue {
    fn from(fields: Fields) -> Self {
        Self::Map(fields)
    }
}
