#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigMissingVar(&'static str),
    ConfigInvalidValue(&'static str, String), // variable, offending value
    ConfigLoaded { zone: String, latitude: f64, longitude: f64 },

    // === SCHEDULE MESSAGES ===
    ScheduleComputed(String, String), // date, method label
    ScheduleRecomputeFailed(String),
    MidnightRefresh(String), // date
    SolarDeltas { sunrise: i64, noon: i64, sunset: i64 },
    AsrRecomputed(String, String),  // published value, recomputed value
    SolarEventsUnavailable(String), // date
    AsrCrossingUnavailable(String), // date

    // === TIMETABLE MESSAGES ===
    TimetableDisabled,
    TimetableUnavailable(String), // error detail
    TimetableRow(String),         // formatted row summary

    // === NOTIFICATION MESSAGES ===
    PrayerStarted(String, String),    // prayer, HH:MM
    PrayerEnded(String, String),      // prayer, HH:MM
    PrayerEndingSoon(String, String), // prayer, HH:MM of the end
    SummarySent(String),              // date
    TelegramSendFailed(String),
    TelegramRejected(String), // HTTP status

    // === WATCHER MESSAGES ===
    WatcherStarted,
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherSignalHandlingNotSupported,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,
    WatcherShuttingDown,

    // === HEALTH MESSAGES ===
    HealthListening(u16),
    HealthServerFailed(String),
}
