//! Client for the official London prayer timetable API.
//!
//! Fetches the published (non-jamāʿat) times for one calendar day at the
//! timetable's reference location. The service has changed its response
//! shape over time, so the parser accepts both the current flat object and
//! the legacy `{"times": [...]}` wrapper, and both spellings of the Maghrib
//! field.
//!
//! ## Error Resilience
//!
//! The reconciliation engine must never fail because the timetable is
//! unreachable: `fetch` converts every failure (network, non-200 status,
//! unrecognized JSON, a missing field, an unparsable time) into `None`
//! after logging it, and the caller falls back to astronomical computation.
//! The typed [`TimetableError`] taxonomy exists for the log line and for
//! tests, not for propagation.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use chrono::{DateTime, Datelike, LocalResult, NaiveDate, TimeZone};
use chrono_tz::Tz;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Endpoint of the official timetable service.
const API_URL: &str = "https://www.londonprayertimes.com/api/times/";

/// City identifier the timetable is published for.
const CITY: &str = "london";

/// Bound on every timetable request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Ways a timetable fetch can fail. All of them are treated as "timetable
/// unavailable" by the caller.
#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("unrecognized payload shape: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("timetable contains no rows")]
    EmptyTimetable,

    #[error("invalid time value `{0}`")]
    InvalidTime(String),

    #[error("time {0} does not exist on {1} in the configured zone")]
    NonexistentLocalTime(String, NaiveDate),
}

/// Published instants for one day at the reference location, localized to
/// the configured zone.
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableRow {
    pub fajr: DateTime<Tz>,
    pub sunrise: DateTime<Tz>,
    pub dhuhr: DateTime<Tz>,
    /// The published Asr. Usually first-shadow; the engine recomputes its
    /// own and only logs this one.
    pub asr: DateTime<Tz>,
    pub maghrib: DateTime<Tz>,
    pub isha: DateTime<Tz>,
}

/// Raw row as the service serializes it: naive "HH:MM" strings.
#[derive(Debug, Deserialize)]
struct RawRow {
    fajr: String,
    sunrise: String,
    dhuhr: String,
    asr: String,
    #[serde(alias = "magrib")]
    maghrib: String,
    isha: String,
}

/// Either response shape the service is known to produce.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TimetablePayload {
    Wrapped { times: Vec<RawRow> },
    Flat(RawRow),
}

/// Timetable API client.
#[derive(Debug)]
pub struct Timetable {
    client: Client,
    api_key: Option<String>,
    zone: Tz,
}

impl Timetable {
    pub fn new(api_key: Option<String>, zone: Tz) -> Self {
        Self {
            client: Client::new(),
            api_key,
            zone,
        }
    }

    /// Fetches the row for a date, or `None` when the timetable is
    /// unavailable for any reason (including a missing API key).
    pub async fn fetch(&self, date: NaiveDate) -> Option<TimetableRow> {
        let key = match &self.api_key {
            Some(key) => key,
            None => {
                msg_debug!(Message::TimetableDisabled);
                return None;
            }
        };

        match self.request(key, date).await {
            Ok(row) => {
                msg_debug!(Message::TimetableRow(format!(
                    "fajr={} sunrise={} dhuhr={} asr={} maghrib={} isha={}",
                    row.fajr.format("%H:%M"),
                    row.sunrise.format("%H:%M"),
                    row.dhuhr.format("%H:%M"),
                    row.asr.format("%H:%M"),
                    row.maghrib.format("%H:%M"),
                    row.isha.format("%H:%M"),
                )));
                Some(row)
            }
            Err(error) => {
                msg_warning!(Message::TimetableUnavailable(error.to_string()));
                None
            }
        }
    }

    async fn request(&self, key: &str, date: NaiveDate) -> Result<TimetableRow, TimetableError> {
        let date_param = date.format("%Y-%m-%d").to_string();
        let response = self
            .client
            .get(API_URL)
            .query(&[
                ("format", "json"),
                ("key", key),
                ("date", date_param.as_str()),
                ("city", CITY),
                ("24hours", "true"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TimetableError::Status(status));
        }

        let payload = response.json::<Value>().await?;
        Self::parse_row(payload, date, self.zone)
    }

    /// Parses a response payload into a localized row.
    pub fn parse_row(payload: Value, date: NaiveDate, zone: Tz) -> Result<TimetableRow, TimetableError> {
        let raw = match serde_json::from_value::<TimetablePayload>(payload)? {
            TimetablePayload::Wrapped { times } => times.into_iter().next().ok_or(TimetableError::EmptyTimetable)?,
            TimetablePayload::Flat(row) => row,
        };

        Ok(TimetableRow {
            fajr: local_instant(&raw.fajr, date, zone)?,
            sunrise: local_instant(&raw.sunrise, date, zone)?,
            dhuhr: local_instant(&raw.dhuhr, date, zone)?,
            asr: local_instant(&raw.asr, date, zone)?,
            maghrib: local_instant(&raw.maghrib, date, zone)?,
            isha: local_instant(&raw.isha, date, zone)?,
        })
    }
}

/// Interprets a naive "HH:MM" string as a local instant on the given date.
///
/// On an ambiguous wall-clock time (the repeated hour when clocks go back)
/// the earlier instant is taken.
fn local_instant(raw: &str, date: NaiveDate, zone: Tz) -> Result<DateTime<Tz>, TimetableError> {
    let (hour, minute) = raw.split_once(':').ok_or_else(|| TimetableError::InvalidTime(raw.to_string()))?;
    let hour: u32 = hour.parse().map_err(|_| TimetableError::InvalidTime(raw.to_string()))?;
    let minute: u32 = minute.parse().map_err(|_| TimetableError::InvalidTime(raw.to_string()))?;
    if hour > 23 || minute > 59 {
        return Err(TimetableError::InvalidTime(raw.to_string()));
    }

    match zone.with_ymd_and_hms(date.year(), date.month(), date.day(), hour, minute, 0) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(TimetableError::NonexistentLocalTime(raw.to_string(), date)),
    }
}
