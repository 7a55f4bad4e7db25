//! Display implementation for miqat application messages.
//!
//! Converts structured `Message` variants into the human-readable text used
//! for terminal output, tracing records and outbound Telegram notifications.
//! Keeping every user-facing string in one place makes the notification
//! wording trivially consistent between the console and the chat channel.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigMissingVar(name) => format!("Required environment variable {} is not set", name),
            Message::ConfigInvalidValue(name, value) => format!("Environment variable {} has an invalid value: {}", name, value),
            Message::ConfigLoaded { zone, latitude, longitude } => {
                format!("Configuration loaded: {} at {:.4}, {:.4}", zone, latitude, longitude)
            }

            // === SCHEDULE MESSAGES ===
            Message::ScheduleComputed(date, label) => format!("Prayer windows computed for {} [{}]", date, label),
            Message::ScheduleRecomputeFailed(error) => format!("Failed to recompute prayer windows, keeping the previous set: {}", error),
            Message::MidnightRefresh(date) => format!("Date rolled over, recomputing prayer windows for {}", date),
            Message::SolarDeltas { sunrise, noon, sunset } => {
                format!("Solar deltas (mins): sunrise={}, noon={}, sunset={}", sunrise, noon, sunset)
            }
            Message::AsrRecomputed(published, recomputed) => {
                format!("Published Asr {} replaced with second-shadow Asr {} at target coordinates", published, recomputed)
            }
            Message::SolarEventsUnavailable(date) => format!("No sunrise or sunset occurs on {} at these coordinates", date),
            Message::AsrCrossingUnavailable(date) => format!("The Asr shadow-length altitude is never crossed on {}", date),

            // === TIMETABLE MESSAGES ===
            Message::TimetableDisabled => "No timetable API key set; using astronomical computation".to_string(),
            Message::TimetableUnavailable(error) => format!("Timetable unavailable, falling back to astronomical computation: {}", error),
            Message::TimetableRow(row) => format!("Timetable row: {}", row),

            // === NOTIFICATION MESSAGES ===
            Message::PrayerStarted(prayer, time) => format!("⏰ {} has started: {}", prayer, time),
            Message::PrayerEnded(prayer, time) => format!("🚨 {} has ended: {}", prayer, time),
            Message::PrayerEndingSoon(prayer, time) => format!("🔔 Reminder: {} ends soon at {}", prayer, time),
            Message::SummarySent(date) => format!("Daily summary sent for {}", date),
            Message::TelegramSendFailed(error) => format!("Failed to send Telegram message: {}", error),
            Message::TelegramRejected(status) => format!("Telegram rejected the message. Status: {}", status),

            // === WATCHER MESSAGES ===
            Message::WatcherStarted => "Prayer watcher is running".to_string(),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down gracefully...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down gracefully...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down gracefully...".to_string(),
            Message::WatcherCtrlCListenFailed(error) => format!("Failed to listen for Ctrl+C: {}", error),
            Message::WatcherSignalHandlingNotSupported => "Warning: Signal handling not supported on this platform".to_string(),
            Message::WatcherShuttingDown => "Shutting down watcher...".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),

            // === HEALTH MESSAGES ===
            Message::HealthListening(port) => format!("Liveness endpoint listening on port {}", port),
            Message::HealthServerFailed(error) => format!("Liveness endpoint failed: {}", error),
        };

        write!(f, "{}", text)
    }
}
