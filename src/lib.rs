//! # Clockin - attendance time tracking
//!
//! A command-line attendance tracker. An employee logs in and out through a
//! two-step confirmation, a live timer shows the time worked so far, and the
//! session survives restarts through a durable snapshot that is discarded as
//! soon as the signed-in user goes away.
//!
//! ## Features
//!
//! - **Confirmed transitions**: login and logout are proposed, then confirmed or cancelled
//! - **Durable session**: the open session is restored on the next start
//! - **Live timer**: elapsed time recomputed every second from the login instant
//! - **Remote log**: optional attendance records on a server, with search and date filters
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clockin::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
