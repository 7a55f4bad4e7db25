#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Timelike};
    use chrono_tz::Tz;
    use miqat::api::timetable::TimetableRow;
    use miqat::libs::schedule::{ceil_minute, truncate_minute, PrayerName, PrayerSchedule, ScheduleSource, SolarDeltas};
    use miqat::libs::solar::{PrayerEstimate, SolarEvents};

    const ZONE: Tz = chrono_tz::Europe::London;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 21).unwrap()
    }

    fn at(hour: u32, minute: u32) -> DateTime<Tz> {
        ZONE.with_ymd_and_hms(2025, 6, 21, hour, minute, 0).unwrap()
    }

    fn at_secs(hour: u32, minute: u32, second: u32) -> DateTime<Tz> {
        ZONE.with_ymd_and_hms(2025, 6, 21, hour, minute, second).unwrap()
    }

    fn next_day(hour: u32, minute: u32) -> DateTime<Tz> {
        ZONE.with_ymd_and_hms(2025, 6, 22, hour, minute, 0).unwrap()
    }

    /// The published row used throughout: official times at the reference
    /// location for 2025-06-21.
    fn row() -> TimetableRow {
        TimetableRow {
            fajr: at(4, 30),
            sunrise: at(4, 45),
            dhuhr: at(13, 5),
            asr: at(17, 30),
            maghrib: at(20, 15),
            isha: at(21, 45),
        }
    }

    fn deltas() -> SolarDeltas {
        SolarDeltas {
            sunrise: 4,
            noon: 0,
            sunset: -2,
        }
    }

    fn timetable_schedule() -> PrayerSchedule {
        PrayerSchedule::from_timetable(day(), &row(), &deltas(), at(18, 42))
    }

    fn estimate() -> PrayerEstimate {
        PrayerEstimate {
            fajr: at(3, 1),
            sunrise: at(4, 43),
            dhuhr: at(13, 5),
            asr: at(18, 40),
            maghrib: at(21, 21),
            isha: at(22, 58),
        }
    }

    #[test]
    fn test_timetable_shifts_follow_anchor_deltas() {
        let schedule = timetable_schedule();

        // Sunrise-anchored events move by the sunrise delta, sunset-anchored
        // ones by the sunset delta.
        assert_eq!(schedule.window(PrayerName::Fajr).start, at(4, 34));
        assert_eq!(schedule.window(PrayerName::Maghrib).start, at(20, 13));
        assert_eq!(schedule.window(PrayerName::Maghrib).end, at(20, 43));
        assert_eq!(schedule.window(PrayerName::Dhuhr).start, at(13, 5));
        assert_eq!(schedule.window(PrayerName::Isha).start, at(21, 43));
    }

    #[test]
    fn test_timetable_asr_is_the_recomputed_instant() {
        let schedule = timetable_schedule();

        // The published 17:30 Asr must not leak through, shifted or not.
        assert_eq!(schedule.window(PrayerName::Asr).start, at(18, 42));
    }

    #[test]
    fn test_window_ends_chain_to_the_next_boundary() {
        let schedule = timetable_schedule();

        // Fajr ends at the adjusted sunrise.
        assert_eq!(schedule.window(PrayerName::Fajr).end, at(4, 49));
        assert_eq!(schedule.window(PrayerName::Dhuhr).end, schedule.window(PrayerName::Asr).start);
        assert_eq!(schedule.window(PrayerName::Asr).end, schedule.window(PrayerName::Maghrib).start);
    }

    #[test]
    fn test_maghrib_window_is_thirty_minutes_on_both_paths() {
        for schedule in [timetable_schedule(), PrayerSchedule::from_astronomical(day(), &estimate())] {
            let window = schedule.window(PrayerName::Maghrib).clone();
            assert_eq!(window.end - window.start, Duration::minutes(30));
        }
    }

    #[test]
    fn test_night_windows_end_at_next_day_fajr() {
        let schedule = timetable_schedule();
        let night_end = next_day(4, 34);

        assert_eq!(schedule.window(PrayerName::Isha).end, night_end);
        assert_eq!(schedule.window(PrayerName::Tahajjud).end, night_end);
    }

    #[test]
    fn test_tahajjud_starts_at_the_final_third_of_the_night() {
        let schedule = timetable_schedule();

        // Night runs 20:13 -> 04:34, 501 minutes; two thirds is exactly
        // 334 minutes, so no rounding applies.
        assert_eq!(schedule.window(PrayerName::Tahajjud).start, next_day(1, 47));
    }

    #[test]
    fn test_tahajjud_partial_minute_rounds_forward() {
        // Night 21:21 -> 03:01, 340 minutes; two thirds is 226 minutes 40
        // seconds and must round up to 227, never down.
        let schedule = PrayerSchedule::from_astronomical(day(), &estimate());
        assert_eq!(schedule.window(PrayerName::Tahajjud).start, next_day(1, 8));
    }

    #[test]
    fn test_tahajjud_falls_strictly_inside_the_night() {
        for schedule in [timetable_schedule(), PrayerSchedule::from_astronomical(day(), &estimate())] {
            let tahajjud = schedule.window(PrayerName::Tahajjud).clone();
            let maghrib = schedule.window(PrayerName::Maghrib).start;

            assert!(tahajjud.start > maghrib);
            assert!(tahajjud.start < tahajjud.end);
        }
    }

    #[test]
    fn test_reminders_are_twenty_minutes_before_the_end() {
        for schedule in [timetable_schedule(), PrayerSchedule::from_astronomical(day(), &estimate())] {
            for name in PrayerName::ALL {
                let window = schedule.window(name).clone();
                assert_eq!(window.reminder, truncate_minute(window.end - Duration::minutes(20)));
                assert_eq!(window.reminder.second(), 0);
                assert_eq!(window.reminder.nanosecond(), 0);
            }
        }
    }

    #[test]
    fn test_reminder_seconds_are_zeroed_for_uneven_ends() {
        // A sunrise with seconds makes the Fajr end uneven; the reminder
        // still lands on a whole minute.
        let estimate = PrayerEstimate {
            sunrise: at_secs(4, 43, 27),
            ..estimate()
        };
        let schedule = PrayerSchedule::from_astronomical(day(), &estimate);

        assert_eq!(schedule.window(PrayerName::Fajr).reminder, at(4, 23));
    }

    #[test]
    fn test_isha_before_the_cap_hour_is_untouched() {
        let schedule = PrayerSchedule::from_astronomical(day(), &estimate());
        assert_eq!(schedule.window(PrayerName::Isha).start, at(22, 58));
    }

    #[test]
    fn test_isha_at_the_cap_hour_is_replaced() {
        let late = PrayerEstimate {
            isha: at(23, 10),
            ..estimate()
        };
        let schedule = PrayerSchedule::from_astronomical(day(), &late);

        // Maghrib 21:21 plus 80 minutes.
        assert_eq!(schedule.window(PrayerName::Isha).start, at(22, 41));
    }

    #[test]
    fn test_schedules_are_tagged_with_their_source() {
        assert_eq!(timetable_schedule().source, ScheduleSource::TimetableAdjusted);
        assert_eq!(
            PrayerSchedule::from_astronomical(day(), &estimate()).source,
            ScheduleSource::Astronomical
        );
        assert_ne!(
            ScheduleSource::TimetableAdjusted.label(),
            ScheduleSource::Astronomical.label()
        );
    }

    #[test]
    fn test_solar_deltas_round_to_whole_minutes() {
        let reference = SolarEvents {
            sunrise: at_secs(4, 45, 10),
            noon: at(13, 5),
            sunset: at(20, 15),
        };
        let target = SolarEvents {
            sunrise: at_secs(4, 49, 40),
            noon: at_secs(13, 5, 20),
            sunset: at_secs(20, 13, 10),
        };

        let deltas = SolarDeltas::between(&reference, &target);

        // 4m30s rounds away from zero, 20s rounds to zero, -1m50s rounds to -2.
        assert_eq!(deltas.sunrise, 5);
        assert_eq!(deltas.noon, 0);
        assert_eq!(deltas.sunset, -2);
    }

    #[test]
    fn test_minute_truncation_and_ceiling() {
        let uneven = at_secs(20, 13, 45);
        assert_eq!(truncate_minute(uneven), at(20, 13));
        assert_eq!(ceil_minute(uneven), at(20, 14));

        let exact = at(20, 13);
        assert_eq!(truncate_minute(exact), exact);
        assert_eq!(ceil_minute(exact), exact);
    }
}
