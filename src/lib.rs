//! # repligraph
//!
//! A streaming graph dumper: exports a connected subgraph of typed,
//! identity-bearing records as a flat, ordered stream of self-describing
//! `(kind, id, attributes)` tuples, suitable for transport, storage, or
//! later reconstruction.
//!
//! ## Core Principles
//!
//! - **Visit Once**: each distinct record is written at most once, no
//!   matter how many relationship paths reach it, cycles included
//! - **Streaming First**: tuples go to the sink as traversal proceeds;
//!   nothing waits for the whole result set
//! - **Policy Out, Engine In**: per-kind expansion rules decide ordering;
//!   the engine only guarantees de-duplication and mark-before-write
//! - **Fail Fast**: the first sink or record error aborts the session,
//!   no retries, no partial recovery
//!
//! ## Architecture
//!
//! ```text
//! Caller records (Replicate / HostedRecord impls)
//!     ↓
//! Expansion Rules (per-kind policy, replica module or your own)
//!     ↓
//! Dumper (dump/emit, memo, default rule)
//!     ↓
//! Write Sink (memory, JSON lines, closure, yours)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use repligraph::{AttributeMap, Dumper, RecordId, Replicate, Result};
//!
//! struct Tag {
//!     id: i64,
//!     name: &'static str,
//! }
//!
//! impl Replicate for Tag {
//!     fn kind(&self) -> &str {
//!         "tag"
//!     }
//!
//!     fn id(&self) -> RecordId {
//!         RecordId::from(self.id)
//!     }
//!
//!     fn snapshot(&self) -> Result<AttributeMap> {
//!         Ok(AttributeMap::new().with("name", self.name))
//!     }
//! }
//!
//! let mut dumper: Dumper<Tag> = Dumper::new();
//! dumper.dump(vec![Tag { id: 1, name: "alpha" }, Tag { id: 2, name: "beta" }])?;
//!
//! // No rule is registered for "tag", so the default rule emitted each
//! // record with no expansion.
//! assert_eq!(dumper.tuples().len(), 2);
//! # Ok::<(), repligraph::DumpError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod dumper;
pub mod error;
pub mod memo;
pub mod record;
pub mod replica;
pub mod sink;

// Re-export main types
pub use dumper::Dumper;
pub use error::{DumpError, Result};
pub use memo::Memo;
pub use record::{
    AttributeMap, AttributeValue, RecordId, RecordKey, Related, Replicate, ReplicantTuple,
};
pub use sink::{sink_fn, JsonLinesSink, MemorySink, SinkFn, WriteSink};
