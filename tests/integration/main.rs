//! Integration test suite: end-to-end dump sessions over a linked
//! record graph.

mod fixtures;
