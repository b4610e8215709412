//! Abstraction layers for non-deterministic dependencies
//!
//! Identifier generation sits behind a trait so the pure transition
//! functions can be driven deterministically in tests.

pub mod ids;

pub use ids::{IdGenerator, IdKind, LineId, OrderId, SequentialIds, SlotId, UuidIds};
