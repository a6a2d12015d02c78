//! SQLite storage.
//!
//! The database holds the durable attendance snapshot; see [`snapshot`].

pub mod db;
pub mod snapshot;
