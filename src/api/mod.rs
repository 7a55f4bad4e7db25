//! API client modules for external service integrations.
//!
//! Provides the two outward-facing HTTP clients the notifier depends on:
//! the official timetable source and the Telegram delivery transport. Both
//! apply bounded timeouts and degrade gracefully: the timetable client
//! collapses every failure into "unavailable", the Telegram client offers
//! a log-only send, and no network condition can take the watch loop down.

// API client modules
pub mod telegram;
pub mod timetable;

// Re-export client structs for easier access from other modules
pub use telegram::Telegram;
pub use timetable::{Timetable, TimetableError, TimetableRow};
