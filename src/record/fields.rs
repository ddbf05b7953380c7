use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single display value. Unit variant covers JSON `null`; anything that
/// is not a string or an integer is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Number(i64),
    Null,
    Other(serde_json::Value),
}

/// Display fields of a record, keyed by column name.
/// Opaque to the selection engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields {
    inner: BTreeMap<String, FieldValue>,
}

impl Fields {
    pub fn new() -> Self {
        Fields {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), FieldValue::String(value.into()));
    }

    pub fn insert_number(&mut self, key: impl Into<String>, value: i64) {
        self.inner.insert(key.into(), FieldValue::Number(value));
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.inner.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
