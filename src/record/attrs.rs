//! Attribute snapshots: primitive values and the ordered field mapping.
//!
//! The dumper treats attributes as opaque payload. [`AttributeMap`] keeps
//! fields in insertion order so a tuple stream replays a record's snapshot
//! exactly as the entity source declared it.

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Primitive attribute value carried in a record snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Explicit null/absence of value
    Null,
    /// Boolean flag
    Bool(bool),
    /// Integer value (ids, counts)
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Timestamp (created_at, updated_at)
    Timestamp(DateTime<Utc>),
    /// String value (names, titles, bodies)
    String(String),
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Int(value as i64)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(value: DateTime<Utc>) -> Self {
        AttributeValue::Timestamp(value)
    }
}

/// Ordered field-name → value mapping for a record snapshot.
///
/// Unlike a hash map, iteration and serialization follow insertion order.
/// Re-inserting an existing field replaces its value in place without
/// moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeMap {
    /// Create a new empty attribute map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder pattern: add an attribute and return self.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an attribute value, replacing in place if the field exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get an attribute value by field name.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Check if a field exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Type-safe getter for string attributes.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(AttributeValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Type-safe getter for integer attributes.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key) {
            Some(AttributeValue::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// Type-safe getter for float attributes.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.get(key) {
            Some(AttributeValue::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// Type-safe getter for boolean attributes.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(AttributeValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Type-safe getter for timestamp attributes.
    pub fn get_timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        match self.get(key) {
            Some(AttributeValue::Timestamp(t)) => Some(*t),
            _ => None,
        }
    }
}

impl FromIterator<(String, AttributeValue)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (String, AttributeValue)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

// Serialized as a plain map so the tuple stream stays self-describing;
// entry order is the insertion order.
impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributeMapVisitor;

        impl<'de> Visitor<'de> for AttributeMapVisitor {
            type Value = AttributeMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of attribute values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = AttributeMap::new();
                while let Some((key, value)) = access.next_entry::<String, AttributeValue>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(AttributeMapVisitor)
    }
}
