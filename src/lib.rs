//! # Miqat - Prayer Window Notifier
//!
//! A command-line utility that computes daily prayer time windows for a
//! fixed location and delivers timed notifications through Telegram.
//!
//! ## Features
//!
//! - **Timetable Reconciliation**: Adjusts the officially published London
//!   timetable with per-event solar deltas for the configured coordinates
//! - **Astronomical Fallback**: Computes all instants locally when the
//!   timetable is unreachable
//! - **Notification Loop**: Minute-resolution start/end/reminder delivery,
//!   at most once per event per day
//! - **Daily Summary**: Fixed-width prayer table sent each morning
//! - **Liveness Endpoint**: Minimal HTTP responder for external supervisors
//!
//! ## Usage
//!
//! ```rust,no_run
//! use miqat::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
