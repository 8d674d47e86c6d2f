//! Record model: identity, attribute snapshots, and relationship shapes.
//!
//! This module defines the fundamental building blocks:
//! - [`Replicate`]: the contract a record must satisfy to be dumped
//! - [`RecordId`] / [`RecordKey`]: stable identity within a session
//! - [`AttributeMap`] / [`AttributeValue`]: the opaque snapshot payload
//! - [`ReplicantTuple`]: the self-describing output unit
//! - [`Related`]: zero/one/many relationship results

mod attrs;
mod related;
mod types;

pub use attrs::{AttributeMap, AttributeValue};
pub use related::Related;
pub use types::{RecordId, RecordKey, Replicate, ReplicantTuple};
