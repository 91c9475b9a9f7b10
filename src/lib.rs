//! Classic object-oriented design patterns, re-derived in idiomatic Rust.
//!
//! The demo binaries under `src/bin/` are independent vignettes, each with a
//! fixed transcript in a trailing comment block. This library holds the idiom
//! they share: a capability contract implemented by several concrete variants,
//! owned and invoked by a client that only knows the contract.

pub mod chain;
pub mod client;
pub mod error;
pub mod history;
pub mod observer;
pub mod registry;
pub mod shapes;

pub use error::PatternError;
