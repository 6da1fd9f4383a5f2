//! In-memory contact directory keyed by a unique reference number.
//!
//! The core lives in [`domain::store::ContactBook`]: a keyed collection that
//! validates every mutation and leaves itself untouched when a rule would be
//! violated. The binary in `main.rs` is only a menu loop around it.

pub mod cli;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod validation;
