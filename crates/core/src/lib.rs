//! Pure domain logic for the course platform.
//!
//! This crate contains no database or HTTP dependencies; evaluation is done
//! against pre-loaded data passed in by the caller. The `db` crate owns
//! persistence, the `api` crate owns transport.

pub mod error;
pub mod naming;
pub mod ordering;
pub mod progress;
pub mod publish;
pub mod types;
