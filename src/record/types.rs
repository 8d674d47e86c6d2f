//! Record identity: ids, memo keys, the record contract, and the output tuple.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attrs::AttributeMap;
use crate::error::{DumpError, Result};

/// Stable identifier for a record, unique within its kind.
///
/// Identity comparisons never cross representations: `Int(7)` and
/// `Str("7")` are distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric identifier (auto-increment primary keys)
    Int(i64),
    /// UUID identifier
    Uuid(Uuid),
    /// Opaque string identifier (slugs, logins)
    Str(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Int(i) => write!(f, "{i}"),
            RecordId::Uuid(u) => write!(f, "{u}"),
            RecordId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Int(value)
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        RecordId::Int(value as i64)
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        RecordId::Uuid(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Str(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Str(value.to_string())
    }
}

/// Composite identity key: `(kind, id)`.
///
/// This is the unit the session memo stores. Two records of different
/// kinds that happen to share an id value produce distinct keys; the key
/// is a struct, not a formatted string, so no concatenation collisions
/// are possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    /// Kind discriminator
    pub kind: String,
    /// Identifier within the kind
    pub id: RecordId,
}

impl RecordKey {
    /// Create a key from its parts.
    pub fn new(kind: impl Into<String>, id: impl Into<RecordId>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Derive the identity key of a record.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::MalformedRecord`] if the record's kind is
    /// empty; a record without a resolvable kind can never be emitted.
    pub fn of<E: Replicate + ?Sized>(record: &E) -> Result<Self> {
        let kind = record.kind();
        if kind.is_empty() {
            return Err(DumpError::malformed(format!(
                "record {} has an empty kind",
                record.id()
            )));
        }
        Ok(Self {
            kind: kind.to_string(),
            id: record.id(),
        })
    }
}

// Display form is for logs only; identity is the struct itself.
impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Contract a record must satisfy to be dumped.
///
/// The dumper never mutates records and never looks past these three
/// accessors; relationships are the business of expansion rules.
pub trait Replicate {
    /// Kind discriminator, e.g. `"repository"`. Must be non-empty and
    /// stable for the record's concrete type.
    fn kind(&self) -> &str;

    /// Stable identifier, unique within the kind.
    fn id(&self) -> RecordId;

    /// Materialize the record's attribute snapshot.
    ///
    /// # Errors
    ///
    /// Implementations that load attributes lazily may fail here; the
    /// failure aborts the session before anything is written for this
    /// record.
    fn snapshot(&self) -> Result<AttributeMap>;
}

/// The unit of output: one self-describing `(kind, id, attributes)` tuple.
///
/// Exactly one tuple is written per distinct [`RecordKey`] in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicantTuple {
    /// Kind discriminator of the emitted record
    pub kind: String,
    /// Identifier of the emitted record
    pub id: RecordId,
    /// Attribute snapshot, field order preserved
    pub attributes: AttributeMap,
}

impl ReplicantTuple {
    /// Create a tuple from its parts.
    pub fn new(kind: impl Into<String>, id: impl Into<RecordId>, attributes: AttributeMap) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            attributes,
        }
    }

    /// Identity key of this tuple.
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.kind.clone(), self.id.clone())
    }
}
