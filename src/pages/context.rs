//! Flat key/value mapping handed to the template renderer.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::AppResult;

/// Named values available to one page template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PageContext {
    entries: BTreeMap<String, Value>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a plain value, replacing any previous entry under `key`.
    pub fn put(&mut self, key: &str, value: impl Into<Value>) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Insert any serializable value.
    pub fn put_serialized<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> AppResult<()> {
        self.entries
            .insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Copy every entry of `other` into this context.
    pub fn extend(&mut self, other: PageContext) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
