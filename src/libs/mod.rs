//! Core library modules for the miqat application.
//!
//! Serves as the main entry point for all miqat library components.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, messaging, liveness endpoint
//! - **Reconciliation Engine**: Timetable adjustment and astronomical fallback
//! - **Notification Loop**: Minute-resolution delivery with per-day idempotence
//! - **Presentation**: Daily summary rendering, terminal tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use miqat::libs::config::Config;
//! use miqat::libs::solar::SolarCalculator;
//!
//! let config = Config::from_env()?;
//! let calculator = SolarCalculator::new(config.latitude, config.longitude, config.zone);
//! # anyhow::Ok(())
//! ```

pub mod config;
pub mod health;
pub mod messages;
pub mod notifier;
pub mod schedule;
pub mod solar;
pub mod summary;
pub mod view;
