//! Minute-resolution notification loop.
//!
//! Holds the current day's prayer windows and compares the wall clock,
//! truncated to the minute, against each window's reminder, end and start
//! instants. Matching is by formatted "HH:MM" equality, so a tick that is
//! delayed past a minute boundary simply misses that minute: delivery is
//! best-effort with no catch-up. Within a day each (prayer, event) pair
//! fires at most once, enforced by an explicit fired-set rather than tick
//! timing, so observing the same minute twice emits nothing new.
//!
//! The window set is replaced wholesale on the daily recomputation, never
//! patched in place, and only this loop touches it.

use crate::api::{Telegram, Timetable};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::schedule::{self, PrayerName, PrayerSchedule};
use crate::libs::solar::SolarCalculator;
use crate::libs::summary;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use std::collections::HashSet;
use tokio::time::{self, Duration};

/// Only these prayers get an "ended" notification; the other ends are
/// routine boundaries, not news.
pub const END_NOTIFY: [PrayerName; 2] = [PrayerName::Fajr, PrayerName::Maghrib];

/// The three notification occasions of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Started,
    Ended,
    Reminder,
}

/// One pending outbound notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub name: PrayerName,
    pub kind: EventKind,
    pub text: String,
}

/// Collects the notifications due at a minute, in delivery order:
/// reminders, then ends, then starts. Evaluating ends before starts keeps
/// an end that coincides with a start deterministic.
pub fn due_notifications(schedule: &PrayerSchedule, fired: &HashSet<(PrayerName, EventKind)>, minute: &str) -> Vec<Notification> {
    let mut due = Vec::new();

    // 20-minute warnings, for every prayer
    for window in &schedule.windows {
        if hhmm(&window.reminder) == minute && !fired.contains(&(window.name, EventKind::Reminder)) {
            due.push(Notification {
                name: window.name,
                kind: EventKind::Reminder,
                text: Message::PrayerEndingSoon(window.name.to_string(), hhmm(&window.end)).to_string(),
            });
        }
    }

    for window in &schedule.windows {
        if END_NOTIFY.contains(&window.name) && hhmm(&window.end) == minute && !fired.contains(&(window.name, EventKind::Ended)) {
            due.push(Notification {
                name: window.name,
                kind: EventKind::Ended,
                text: Message::PrayerEnded(window.name.to_string(), hhmm(&window.end)).to_string(),
            });
        }
    }

    for window in &schedule.windows {
        if hhmm(&window.start) == minute && !fired.contains(&(window.name, EventKind::Started)) {
            due.push(Notification {
                name: window.name,
                kind: EventKind::Started,
                text: Message::PrayerStarted(window.name.to_string(), hhmm(&window.start)).to_string(),
            });
        }
    }

    due
}

/// Whether the held schedule is stale: the local date moved past it, or the
/// clock reads exactly 00:01. The matching tick is the sole recomputation
/// trigger; there is no separate timer.
pub fn needs_refresh(day: NaiveDate, now: &DateTime<Tz>) -> bool {
    now.date_naive() != day || now.format("%H:%M").to_string() == "00:01"
}

/// The notification scheduler: one infinite loop, one owner of the state.
pub struct Notifier {
    config: Config,
    telegram: Telegram,
    timetable: Timetable,
    calculator: SolarCalculator,
    day: NaiveDate,
    schedule: PrayerSchedule,
    fired: HashSet<(PrayerName, EventKind)>,
}

impl Notifier {
    /// Computes the initial schedule and wires up the clients.
    pub async fn new(config: Config) -> Result<Self> {
        let telegram = Telegram::new(&config);
        let timetable = Timetable::new(config.timetable_api_key.clone(), config.zone);
        let calculator = SolarCalculator::new(config.latitude, config.longitude, config.zone);

        let schedule = schedule::reconcile(&config, &timetable, &calculator).await?;
        msg_info!(Message::ScheduleComputed(schedule.date.to_string(), schedule.source.label().to_string()));
        let day = schedule.date;

        Ok(Self {
            config,
            telegram,
            timetable,
            calculator,
            day,
            schedule,
            fired: HashSet::new(),
        })
    }

    /// Sends the opening summary and ticks once a minute until the process
    /// is terminated. Transient failures inside a tick are logged no-ops;
    /// nothing here returns an error once the loop has started.
    pub async fn run(&mut self) -> Result<()> {
        self.announce().await;

        loop {
            self.tick().await;
            time::sleep(Duration::from_secs(60)).await;
        }
    }

    async fn tick(&mut self) {
        let now = Utc::now().with_timezone(&self.config.zone);
        let minute = now.format("%H:%M").to_string();

        if needs_refresh(self.day, &now) {
            match schedule::reconcile(&self.config, &self.timetable, &self.calculator).await {
                Ok(schedule) => {
                    msg_info!(Message::MidnightRefresh(now.date_naive().to_string()));
                    self.day = now.date_naive();
                    // Wholesale swap; the previous set is dropped untouched.
                    self.schedule = schedule;
                    self.fired.clear();
                    self.announce().await;
                }
                // Keep the previous windows; the next tick retries.
                Err(error) => msg_error!(Message::ScheduleRecomputeFailed(error.to_string())),
            }
        }

        for notification in due_notifications(&self.schedule, &self.fired, &minute) {
            msg_print!(&notification.text);
            self.telegram.notify(&notification.text).await;
            self.fired.insert((notification.name, notification.kind));
        }
    }

    async fn announce(&self) {
        let text = summary::render(&self.schedule, &self.config.location_label);
        match self.telegram.send_html(&text).await {
            Ok(()) => msg_info!(Message::SummarySent(self.schedule.date.to_string())),
            Err(error) => msg_error!(Message::TelegramSendFailed(error.to_string())),
        }
    }
}

fn hhmm(instant: &DateTime<Tz>) -> String {
    instant.format("%H:%M").to_string()
}
