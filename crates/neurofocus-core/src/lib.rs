//! neurofocus-core
//!
//! Pure domain types for the NeuroFocus screener. No I/O, no async runtime —
//! this is the shared vocabulary of the scoring, export and storage crates.

pub mod error;
pub mod models;
