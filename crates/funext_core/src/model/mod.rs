//! Script data records exchanged between host and extensions.
//!
//! # Responsibility
//! - Define the plain shapes both sides agree on: action, script, context.
//! - Stay serialization-agnostic; serde derives only fix field naming.
//!
//! # Invariants
//! - Records carry no validation and no derived state.
//! - Sequence order is meaningful and always preserved.

pub mod context;
pub mod script;
