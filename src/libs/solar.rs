//! Solar geometry adapter for prayer-time computation.
//!
//! Wraps the NREL SPA implementation from the `solar-positioning` crate and
//! derives the prayer-specific instants from its primitives: transit and
//! horizon crossings for sunrise/noon/sunset, twilight-angle crossings for
//! dawn (Fajr) and nightfall (Isha), and the second-shadow-length altitude
//! for the Hanafi Asr. Angles and conventions are fixed by [`MethodParams`].

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use solar_positioning::{spa, time::DeltaT, Horizon, SunriseResult};

/// Calculation method parameters.
///
/// The defaults follow the Muslim World League twilight angles with the
/// Hanafi (second shadow length) Asr convention.
#[derive(Debug, Clone, Copy)]
pub struct MethodParams {
    /// Depression angle of the sun below the horizon at dawn, in degrees.
    pub fajr_angle: f64,
    /// Depression angle of the sun below the horizon at nightfall, in degrees.
    pub isha_angle: f64,
    /// Shadow length factor for Asr: 2.0 for Hanafi, 1.0 for the majority view.
    pub asr_shadow: f64,
}

impl Default for MethodParams {
    fn default() -> Self {
        MethodParams {
            fajr_angle: 18.0,
            isha_angle: 17.0,
            asr_shadow: 2.0,
        }
    }
}

/// The three solar anchor instants for one day at one location.
#[derive(Debug, Clone, Copy)]
pub struct SolarEvents {
    pub sunrise: DateTime<Tz>,
    pub noon: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
}

/// The six canonical astronomical prayer instants at the target coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PrayerEstimate {
    pub fajr: DateTime<Tz>,
    pub sunrise: DateTime<Tz>,
    pub dhuhr: DateTime<Tz>,
    pub asr: DateTime<Tz>,
    pub maghrib: DateTime<Tz>,
    pub isha: DateTime<Tz>,
}

/// Computes solar events and prayer instants for a fixed observer.
#[derive(Debug, Clone)]
pub struct SolarCalculator {
    latitude: f64,
    longitude: f64,
    zone: Tz,
    params: MethodParams,
}

impl SolarCalculator {
    pub fn new(latitude: f64, longitude: f64, zone: Tz) -> Self {
        Self {
            latitude,
            longitude,
            zone,
            params: MethodParams::default(),
        }
    }

    /// Sunrise, solar noon and sunset at the observer's own coordinates.
    pub fn solar_events(&self, date: NaiveDate) -> Result<SolarEvents> {
        self.solar_events_at(date, self.latitude, self.longitude)
    }

    /// Sunrise, solar noon and sunset at arbitrary coordinates.
    ///
    /// The calculation method does not affect these events, so the same
    /// values serve both the delta baseline and the target location.
    pub fn solar_events_at(&self, date: NaiveDate, latitude: f64, longitude: f64) -> Result<SolarEvents> {
        let result = spa::sunrise_sunset_for_horizon(day_start_utc(date), latitude, longitude, delta_t(date)?, Horizon::SunriseSunset)?;
        match result {
            SunriseResult::RegularDay { sunrise, transit, sunset } => Ok(SolarEvents {
                sunrise: sunrise.with_timezone(&self.zone),
                noon: transit.with_timezone(&self.zone),
                sunset: sunset.with_timezone(&self.zone),
            }),
            _ => Err(msg_error_anyhow!(Message::SolarEventsUnavailable(date.to_string()))),
        }
    }

    /// The Asr instant at the observer's coordinates by shadow length.
    ///
    /// Asr begins when an object's shadow exceeds its noon shadow by
    /// `asr_shadow` times the object's height; the corresponding sun
    /// altitude is `atan(1 / (asr_shadow + tan(noon zenith)))`, and Asr is
    /// the afternoon descent through that altitude.
    pub fn hanafi_asr(&self, date: NaiveDate) -> Result<DateTime<Tz>> {
        let events = self.solar_events(date)?;
        self.asr_from_noon(date, &events)
    }

    /// All six canonical instants at the observer's coordinates.
    ///
    /// When a twilight crossing does not occur (high latitudes in summer),
    /// the twilight-angle rule substitutes the angle's share of the night:
    /// dawn at `sunrise - night * fajr_angle / 60`, nightfall at
    /// `sunset + night * isha_angle / 60`, with the night measured from
    /// sunset to the following day's sunrise.
    pub fn prayer_estimate(&self, date: NaiveDate) -> Result<PrayerEstimate> {
        let events = self.solar_events(date)?;
        let asr = self.asr_from_noon(date, &events)?;

        let dawn = self.twilight_crossing(date, self.params.fajr_angle)?.map(|(morning, _)| morning);
        let dusk = self.twilight_crossing(date, self.params.isha_angle)?.map(|(_, evening)| evening);

        let (fajr, isha) = match (dawn, dusk) {
            (Some(fajr), Some(isha)) => (fajr, isha),
            (dawn, dusk) => {
                let next = self.solar_events(date + Duration::days(1))?;
                let night = next.sunrise - events.sunset;
                (
                    dawn.unwrap_or(events.sunrise - night_portion(night, self.params.fajr_angle)),
                    dusk.unwrap_or(events.sunset + night_portion(night, self.params.isha_angle)),
                )
            }
        };

        Ok(PrayerEstimate {
            fajr,
            sunrise: events.sunrise,
            dhuhr: events.noon,
            asr,
            maghrib: events.sunset,
            isha,
        })
    }

    fn asr_from_noon(&self, date: NaiveDate, events: &SolarEvents) -> Result<DateTime<Tz>> {
        let noon_utc = events.noon.with_timezone(&Utc);
        let position = spa::solar_position(noon_utc, self.latitude, self.longitude, 0.0, delta_t(date)?, None)?;
        let noon_zenith = position.zenith_angle().to_radians();
        let altitude = (1.0 / (self.params.asr_shadow + noon_zenith.tan())).atan().to_degrees();

        let result = spa::sunrise_sunset(day_start_utc(date), self.latitude, self.longitude, delta_t(date)?, altitude)?;
        match result {
            SunriseResult::RegularDay { sunset, .. } => Ok(sunset.with_timezone(&self.zone)),
            _ => Err(msg_error_anyhow!(Message::AsrCrossingUnavailable(date.to_string()))),
        }
    }

    /// Morning and evening crossings of the given depression angle, or
    /// `None` when the sun never reaches it on that date.
    fn twilight_crossing(&self, date: NaiveDate, angle: f64) -> Result<Option<(DateTime<Tz>, DateTime<Tz>)>> {
        let result = spa::sunrise_sunset(day_start_utc(date), self.latitude, self.longitude, delta_t(date)?, -angle)?;
        match result {
            SunriseResult::RegularDay { sunrise, sunset, .. } => {
                Ok(Some((sunrise.with_timezone(&self.zone), sunset.with_timezone(&self.zone))))
            }
            _ => Ok(None),
        }
    }
}

/// Start of the given calendar day as a UTC instant for the SPA routines.
fn day_start_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// ΔT (TT − UT1) estimate for the date, in seconds.
fn delta_t(date: NaiveDate) -> Result<f64> {
    Ok(DeltaT::estimate_from_date(date.year(), date.month())?)
}

/// The share of the night allotted to a twilight angle, one degree per
/// sixtieth of the night.
fn night_portion(night: Duration, angle: f64) -> Duration {
    Duration::milliseconds((night.num_milliseconds() as f64 * angle / 60.0) as i64)
}
