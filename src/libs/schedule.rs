//! Prayer window reconciliation engine.
//!
//! Produces the day's six prayer windows from one of two sources and tags
//! the result so callers can tell them apart:
//!
//! - **Timetable-adjusted**: the officially published timetable for the
//!   reference location, shifted per anchor event by the whole-minute solar
//!   delta between the reference and the target coordinates. Sunrise-anchored
//!   instants (Fajr, the auxiliary sunrise) move by the sunrise delta,
//!   noon-anchored (Dhuhr) by the noon delta, sunset-anchored (Maghrib, Isha)
//!   by the sunset delta. Asr is never shifted: published rows commonly carry
//!   the first-shadow convention, so it is recomputed from scratch at the
//!   target coordinates with the second-shadow convention instead.
//! - **Astronomical**: every instant computed directly at the target
//!   coordinates when the timetable cannot be fetched. On this path an Isha
//!   that lands at 23:00 or later is capped to Maghrib + 80 minutes.
//!
//! Derived on both paths: Tahajjud opens at the start of the final third of
//! the night (Maghrib to next Fajr, rounded up to the whole minute so the
//! notification never fires early), Maghrib closes 30 minutes after it opens,
//! and every window carries a reminder instant 20 minutes before its end
//! with seconds zeroed.
//!
//! Window ends chain to the next boundary event: Fajr ends at sunrise, Dhuhr
//! at Asr, Asr at Maghrib, Isha and Tahajjud at the night's end. The whole
//! set is immutable; a recomputation builds a new set from scratch.

use crate::api::timetable::{Timetable, TimetableRow};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::solar::{PrayerEstimate, SolarCalculator, SolarEvents};
use crate::msg_debug;
use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use std::fmt;

/// Latitude of the reference location the official timetable is published
/// for (East London Mosque area).
pub const REF_LATITUDE: f64 = 51.5162;

/// Longitude of the reference location.
pub const REF_LONGITUDE: f64 = -0.0650;

/// Fixed congregation allowance after the Maghrib opening.
const MAGHRIB_SPAN_MINUTES: i64 = 30;

/// Minutes before a window's end at which the reminder fires.
const REMINDER_LEAD_MINUTES: i64 = 20;

/// Latest acceptable local hour for an astronomical Isha; from this hour on
/// the capped value replaces it.
const ISHA_CAP_HOUR: u32 = 23;

/// Cap applied to an unreasonably late astronomical Isha.
const ISHA_CAP_MINUTES: i64 = 80;

/// The notified prayers, in chronological order.
///
/// Sunrise is deliberately absent: it is an auxiliary boundary (Fajr's end),
/// not a prayer of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    Tahajjud,
}

impl PrayerName {
    /// All prayers in window order.
    pub const ALL: [PrayerName; 6] = [
        PrayerName::Fajr,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
        PrayerName::Tahajjud,
    ];
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
            PrayerName::Tahajjud => "Tahajjud",
        };
        write!(f, "{}", name)
    }
}

/// Which computation path produced a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSource {
    /// Official timetable shifted by solar deltas.
    TimetableAdjusted,
    /// Direct astronomical computation at the target coordinates.
    Astronomical,
}

impl ScheduleSource {
    /// Human-readable method label for the daily summary.
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleSource::TimetableAdjusted => "London timetable (official, non-jamāʿat) · Hanafi/Mithl-2 · coord-adjusted",
            ScheduleSource::Astronomical => "Astronomical fallback (MWL angles) · Hanafi/Mithl-2",
        }
    }
}

/// One prayer window: its opening, closing and reminder instants.
///
/// `start <= end` for every window except the night-spanning ones (Isha,
/// Tahajjud), whose `end` falls on the following calendar day. Comparisons
/// must therefore use the full instants, never bare times of day.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerWindow {
    pub name: PrayerName,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    /// `end` minus 20 minutes, truncated to the whole minute.
    pub reminder: DateTime<Tz>,
}

/// The full window set for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerSchedule {
    pub date: NaiveDate,
    /// Windows in [`PrayerName::ALL`] order.
    pub windows: Vec<PrayerWindow>,
    pub source: ScheduleSource,
}

/// Whole-minute offsets of the target location's solar events relative to
/// the reference location, for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarDeltas {
    pub sunrise: i64,
    pub noon: i64,
    pub sunset: i64,
}

impl SolarDeltas {
    /// Differences the two event sets, target minus reference, rounded to
    /// the nearest whole minute.
    pub fn between(reference: &SolarEvents, target: &SolarEvents) -> Self {
        SolarDeltas {
            sunrise: whole_minutes(reference.sunrise, target.sunrise),
            noon: whole_minutes(reference.noon, target.noon),
            sunset: whole_minutes(reference.sunset, target.sunset),
        }
    }
}

impl PrayerSchedule {
    /// Builds the window set from an official timetable row.
    ///
    /// `asr` is the independently recomputed second-shadow Asr at the target
    /// coordinates; the row's own Asr value is never used.
    pub fn from_timetable(date: NaiveDate, row: &TimetableRow, deltas: &SolarDeltas, asr: DateTime<Tz>) -> Self {
        let fajr = row.fajr + Duration::minutes(deltas.sunrise);
        let sunrise = row.sunrise + Duration::minutes(deltas.sunrise);
        let dhuhr = row.dhuhr + Duration::minutes(deltas.noon);
        let maghrib = row.maghrib + Duration::minutes(deltas.sunset);
        let isha = row.isha + Duration::minutes(deltas.sunset);

        Self::assemble(date, fajr, sunrise, dhuhr, asr, maghrib, isha, ScheduleSource::TimetableAdjusted)
    }

    /// Builds the window set from the astronomical estimate alone.
    ///
    /// An Isha whose local hour has reached 23 is replaced with
    /// Maghrib + 80 minutes; at high latitudes the configured twilight angle
    /// may otherwise push it past midnight.
    pub fn from_astronomical(date: NaiveDate, estimate: &PrayerEstimate) -> Self {
        let maghrib = estimate.maghrib;
        let isha = if estimate.isha.hour() >= ISHA_CAP_HOUR {
            maghrib + Duration::minutes(ISHA_CAP_MINUTES)
        } else {
            estimate.isha
        };

        Self::assemble(
            date,
            estimate.fajr,
            estimate.sunrise,
            estimate.dhuhr,
            estimate.asr,
            maghrib,
            isha,
            ScheduleSource::Astronomical,
        )
    }

    /// The window for a prayer. Windows are stored in declaration order, so
    /// the enum discriminant doubles as the index.
    pub fn window(&self, name: PrayerName) -> &PrayerWindow {
        &self.windows[name as usize]
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        date: NaiveDate,
        fajr: DateTime<Tz>,
        sunrise: DateTime<Tz>,
        dhuhr: DateTime<Tz>,
        asr: DateTime<Tz>,
        maghrib: DateTime<Tz>,
        isha: DateTime<Tz>,
        source: ScheduleSource,
    ) -> Self {
        // Night window for Tahajjud: Maghrib to the next Fajr. Guard against
        // a Fajr instant that numerically precedes Maghrib on the same date.
        let night_start = maghrib;
        let night_end = if fajr > night_start { fajr } else { fajr + Duration::days(1) };
        let night = night_end - night_start;

        // Final third of the night, rounded up to the next whole minute.
        let tahajjud = ceil_minute(night_start + Duration::milliseconds(night.num_milliseconds() * 2 / 3));

        let maghrib_end = maghrib + Duration::minutes(MAGHRIB_SPAN_MINUTES);

        let spans = [
            (PrayerName::Fajr, fajr, sunrise),
            (PrayerName::Dhuhr, dhuhr, asr),
            (PrayerName::Asr, asr, maghrib),
            (PrayerName::Maghrib, maghrib, maghrib_end),
            (PrayerName::Isha, isha, night_end),
            (PrayerName::Tahajjud, tahajjud, night_end),
        ];

        let windows = spans
            .into_iter()
            .map(|(name, start, end)| PrayerWindow {
                name,
                start,
                end,
                reminder: truncate_minute(end - Duration::minutes(REMINDER_LEAD_MINUTES)),
            })
            .collect();

        PrayerSchedule { date, windows, source }
    }
}

/// Computes today's schedule, preferring the official timetable.
///
/// Timetable failures of any kind have already been converted into `None`
/// by the client, so the only errors left here are solar-geometry ones,
/// which cannot occur at coordinates the configuration accepted.
pub async fn reconcile(config: &Config, timetable: &Timetable, calculator: &SolarCalculator) -> Result<PrayerSchedule> {
    let today = Utc::now().with_timezone(&config.zone).date_naive();

    match timetable.fetch(today).await {
        Some(row) => {
            let reference = calculator.solar_events_at(today, REF_LATITUDE, REF_LONGITUDE)?;
            let target = calculator.solar_events(today)?;
            let deltas = SolarDeltas::between(&reference, &target);
            msg_debug!(Message::SolarDeltas {
                sunrise: deltas.sunrise,
                noon: deltas.noon,
                sunset: deltas.sunset,
            });

            let asr = calculator.hanafi_asr(today)?;
            msg_debug!(Message::AsrRecomputed(
                row.asr.format("%H:%M").to_string(),
                asr.format("%H:%M").to_string()
            ));

            Ok(PrayerSchedule::from_timetable(today, &row, &deltas, asr))
        }
        None => {
            let estimate = calculator.prayer_estimate(today)?;
            Ok(PrayerSchedule::from_astronomical(today, &estimate))
        }
    }
}

/// Drops the seconds and sub-second part of an instant.
pub fn truncate_minute<T: TimeZone>(instant: DateTime<T>) -> DateTime<T> {
    let seconds = i64::from(instant.second());
    let nanos = i64::from(instant.nanosecond());
    instant - Duration::seconds(seconds) - Duration::nanoseconds(nanos)
}

/// Rounds an instant up to the next whole minute; exact minutes stay put.
pub fn ceil_minute<T: TimeZone>(instant: DateTime<T>) -> DateTime<T> {
    let floored = truncate_minute(instant.clone());
    if floored == instant {
        instant
    } else {
        floored + Duration::minutes(1)
    }
}

fn whole_minutes(from: DateTime<Tz>, to: DateTime<Tz>) -> i64 {
    ((to - from).num_seconds() as f64 / 60.0).round() as i64
}
