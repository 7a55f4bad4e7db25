//! Configuration management for the miqat application.
//!
//! All settings come from the process environment (with `.env` support via
//! `dotenv` in the binary entry point). The process must not run without a
//! defined location, timezone and Telegram credentials, so missing or
//! malformed required variables are fatal at startup rather than silently
//! defaulted.
//!
//! ## Variables
//!
//! | Variable                 | Required | Meaning                                        |
//! |--------------------------|----------|------------------------------------------------|
//! | `MIQAT_LATITUDE`         | yes      | Target latitude in degrees (-90..=90)          |
//! | `MIQAT_LONGITUDE`        | yes      | Target longitude in degrees (-180..=180)       |
//! | `MIQAT_TIMEZONE`         | yes      | IANA zone name, e.g. `Europe/London`           |
//! | `MIQAT_BOT_TOKEN`        | yes      | Telegram bot token                             |
//! | `MIQAT_CHAT_ID`          | yes      | Telegram chat identifier                       |
//! | `MIQAT_TIMETABLE_API_KEY`| no       | Timetable API key; absent ⇒ astronomical path  |
//! | `MIQAT_LOCATION_LABEL`   | no       | Summary header label                           |
//! | `MIQAT_HEALTH_PORT`      | no       | Liveness endpoint port (default 8080)          |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use miqat::libs::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("zone: {}", config.zone);
//! # anyhow::Ok(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use chrono_tz::Tz;
use std::env;

/// Default text for the daily summary header when no label is configured.
const DEFAULT_LOCATION_LABEL: &str = "Rainham, LDN 🇬🇧";

/// Default port for the liveness endpoint.
const DEFAULT_HEALTH_PORT: u16 = 8080;

/// Runtime configuration for the notifier.
///
/// Built once at startup and shared by reference; nothing mutates it after
/// construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target latitude in degrees.
    pub latitude: f64,

    /// Target longitude in degrees.
    pub longitude: f64,

    /// Timezone all schedule instants are expressed in.
    pub zone: Tz,

    /// Telegram bot token used for the outbound transport.
    pub bot_token: String,

    /// Telegram chat the notifications are delivered to.
    pub chat_id: String,

    /// API key for the official timetable service.
    ///
    /// When absent the reconciliation engine always takes the astronomical
    /// fallback path.
    pub timetable_api_key: Option<String>,

    /// Free-text location label shown in the daily summary header.
    pub location_label: String,

    /// Port the liveness endpoint binds to.
    pub health_port: u16,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first required variable that is missing
    /// or carries a value that cannot be parsed or is out of range.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests drive this directly with an in-memory
    /// map so they never mutate the real process environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let latitude: f64 = parse_required(&lookup, "MIQAT_LATITUDE")?;
        let longitude: f64 = parse_required(&lookup, "MIQAT_LONGITUDE")?;

        if !(-90.0..=90.0).contains(&latitude) {
            msg_bail_anyhow!(Message::ConfigInvalidValue("MIQAT_LATITUDE", latitude.to_string()));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            msg_bail_anyhow!(Message::ConfigInvalidValue("MIQAT_LONGITUDE", longitude.to_string()));
        }

        let zone: Tz = parse_required(&lookup, "MIQAT_TIMEZONE")?;
        let bot_token = required(&lookup, "MIQAT_BOT_TOKEN")?;
        let chat_id = required(&lookup, "MIQAT_CHAT_ID")?;

        let health_port = match optional(&lookup, "MIQAT_HEALTH_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| msg_error_anyhow!(Message::ConfigInvalidValue("MIQAT_HEALTH_PORT", raw)))?,
            None => DEFAULT_HEALTH_PORT,
        };

        Ok(Config {
            latitude,
            longitude,
            zone,
            bot_token,
            chat_id,
            timetable_api_key: optional(&lookup, "MIQAT_TIMETABLE_API_KEY"),
            location_label: optional(&lookup, "MIQAT_LOCATION_LABEL").unwrap_or_else(|| DEFAULT_LOCATION_LABEL.to_string()),
            health_port,
        })
    }
}

/// Reads a required variable, failing with its name when absent or blank.
fn required<F>(lookup: &F, name: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(msg_error_anyhow!(Message::ConfigMissingVar(name))),
    }
}

/// Reads an optional variable, treating a blank value as absent.
fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty())
}

/// Reads and parses a required variable in one step.
fn parse_required<F, T>(lookup: &F, name: &'static str) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = required(lookup, name)?;
    raw.parse()
        .map_err(|_| msg_error_anyhow!(Message::ConfigInvalidValue(name, raw)))
}
