//! The traversal engine: depth-first dump of a record graph.

use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, trace};

use crate::error::Result;
use crate::memo::Memo;
use crate::record::{RecordKey, Related, Replicate, ReplicantTuple};
use crate::sink::{MemorySink, WriteSink};

/// An expansion rule: given one record of its kind, decides which related
/// records to dump and when to emit the record itself.
type Rule<E, S> = Rc<dyn Fn(&mut Dumper<E, S>, &E) -> Result<()>>;

/// Streaming dumper for a connected record graph.
///
/// Starting from one or more roots, the dumper follows the relationships
/// its registered expansion rules declare, visits each distinct record at
/// most once, and writes every visited record to the sink as a
/// [`ReplicantTuple`]. Tuples are written as traversal proceeds; the full
/// result set is never resident in memory unless the sink keeps it.
///
/// Traversal is synchronous and single-threaded by design: it is a
/// depth-first walk driven entirely by the call stack of expansion rules,
/// and the memo is read and mutated without synchronization. One session
/// is confined to one logical thread of control; run concurrent sessions
/// by giving each its own `Dumper` and sink.
///
/// A session that returns an error is finished: the memo is left
/// partially marked, so retries need a fresh `Dumper`.
pub struct Dumper<E: Replicate, S: WriteSink = MemorySink> {
    sink: S,
    memo: Memo,
    rules: HashMap<String, Rule<E, S>>,
}

impl<E: Replicate> Dumper<E> {
    /// Create a dumper that accumulates tuples in memory.
    ///
    /// The result list is retrievable with [`tuples`](Self::tuples) or
    /// [`into_tuples`](Self::into_tuples) after the session completes.
    pub fn new() -> Self {
        Self::with_sink(MemorySink::new())
    }

    /// Tuples written so far, in emission order.
    pub fn tuples(&self) -> &[ReplicantTuple] {
        self.sink.tuples()
    }

    /// Consume the session and take ownership of the accumulated tuples.
    pub fn into_tuples(self) -> Vec<ReplicantTuple> {
        self.sink.into_tuples()
    }
}

impl<E: Replicate> Default for Dumper<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Replicate, S: WriteSink> Dumper<E, S> {
    /// Create a dumper that writes to the given sink.
    ///
    /// The sink is owned for the duration of the session; the caller gets
    /// it back with [`into_sink`](Self::into_sink) and owns the lifecycle
    /// of any underlying resource, including on error exit.
    pub fn with_sink(sink: S) -> Self {
        Self {
            sink,
            memo: Memo::new(),
            rules: HashMap::new(),
        }
    }

    /// Register the expansion rule for a kind, replacing any previous one.
    ///
    /// A rule receives the dumper and one record of its kind. It may call
    /// [`dump`](Self::dump) and [`emit`](Self::emit) on any related
    /// records in any order, and emit the subject itself at any point.
    /// The convention the reference rules follow, and which keeps a
    /// consumer of the stream from seeing a record before its
    /// prerequisites: dump prerequisite relations first, emit the subject,
    /// then dump dependent relations. The engine does not enforce it.
    ///
    /// Rules must not assume anything was previously marked beyond what
    /// `dump` guarantees.
    pub fn register<F>(&mut self, kind: impl Into<String>, rule: F)
    where
        F: Fn(&mut Self, &E) -> Result<()> + 'static,
    {
        self.rules.insert(kind.into(), Rc::new(rule));
    }

    /// True if a rule is registered for this kind.
    pub fn has_rule(&self, kind: &str) -> bool {
        self.rules.contains_key(kind)
    }

    /// Dump zero, one, or many records, expanding relationships.
    ///
    /// For each record in input order: a record whose key is already known
    /// is skipped; that check is the sole de-duplication and the sole
    /// cycle-breaking mechanism. Otherwise the record's kind is resolved
    /// to its registered expansion rule; a kind with no rule falls back to
    /// the default rule, which emits the record with no expansion. Rule
    /// lookup is total; there is no "no rule found" error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DumpError::MalformedRecord`] for a record with an
    /// empty kind or a failing snapshot, and propagates any rule or sink
    /// error immediately, aborting the remainder of the traversal.
    pub fn dump(&mut self, records: impl Into<Related<E>>) -> Result<()> {
        for record in records.into() {
            let key = RecordKey::of(&record)?;
            if self.memo.is_known(&key) {
                trace!("Skipping known record {key}");
                continue;
            }
            match self.rules.get(key.kind.as_str()).cloned() {
                Some(rule) => {
                    debug!("Expanding {key}");
                    rule(self, &record)?;
                }
                None => self.emit(&record)?,
            }
        }
        Ok(())
    }

    /// Emit one record with no relationship expansion.
    ///
    /// This is the primitive, idempotent write operation: a no-op if the
    /// record is already known; otherwise the record is marked known
    /// *before* its attributes are materialized, so a re-entrant
    /// self-reference during snapshot cannot recurse, and then the tuple
    /// goes to the sink. Calling `emit` twice on the same record produces
    /// exactly one sink invocation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DumpError::MalformedRecord`] if the kind is empty
    /// or the snapshot fails, and [`crate::DumpError::SinkWrite`] (or the
    /// sink's own error) if the write fails. Either way the session is
    /// over; no partial tuple is written.
    pub fn emit(&mut self, record: &E) -> Result<()> {
        let key = RecordKey::of(record)?;
        if !self.memo.mark(key.clone()) {
            trace!("Already emitted {key}");
            return Ok(());
        }
        let attributes = record.snapshot()?;
        debug!("Emitting {key}");
        let tuple = ReplicantTuple::new(key.kind, key.id, attributes);
        self.sink.write(tuple)
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the session and return the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
