//! Core library modules for the clockin application.
//!
//! ## Attendance core
//!
//! - [`clock`]: current wall-clock instant in 12-hour display format
//! - [`duration`] / [`formatter`]: elapsed time between instants and its compact rendering
//! - [`session`]: the attendance session and its durable snapshot
//! - [`ticker`]: live timer for an active session
//! - [`confirmation`]: propose → confirm/cancel protocol around login and logout
//!
//! ## Infrastructure
//!
//! - [`identity`]: the signed-in user
//! - [`config`], [`data_storage`]: settings and on-disk locations
//! - [`error`], [`messages`], [`view`]: error types, user-facing text, terminal tables
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use clockin::libs::identity::Identity;
//! use clockin::libs::session::{MemorySnapshot, SessionStore};
//!
//! let mut store = SessionStore::new(MemorySnapshot::new());
//! let dana = Identity::new("E-7", "Dana");
//! let date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
//!
//! let _ = store.login(&dana, "09:00:00 AM", date);
//! let closed = store.logout("05:30:15 PM").unwrap().into_value();
//! assert_eq!(closed.working_period().unwrap().to_string(), "8h 30m 15s");
//! ```

pub mod clock;
pub mod config;
pub mod confirmation;
pub mod data_storage;
pub mod duration;
pub mod error;
pub mod formatter;
pub mod identity;
pub mod messages;
pub mod session;
pub mod ticker;
pub mod view;
