//! neurofocus-storage
//!
//! History of completed screeners. Backends implement [`store::ResultStore`];
//! the scoring path only ever hands records to [`persist::spawn_persist`].

pub mod error;
pub mod file;
pub mod memory;
pub mod persist;
pub mod store;
pub mod stored;
