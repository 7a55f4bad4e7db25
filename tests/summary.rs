#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, TimeZone};
    use chrono_tz::Tz;
    use miqat::api::timetable::TimetableRow;
    use miqat::libs::schedule::{PrayerSchedule, SolarDeltas};
    use miqat::libs::summary::render;

    const ZONE: Tz = chrono_tz::Europe::London;

    fn at(hour: u32, minute: u32) -> DateTime<Tz> {
        ZONE.with_ymd_and_hms(2025, 6, 21, hour, minute, 0).unwrap()
    }

    fn schedule() -> PrayerSchedule {
        let row = TimetableRow {
            fajr: at(4, 30),
            sunrise: at(4, 45),
            dhuhr: at(13, 5),
            asr: at(17, 30),
            maghrib: at(20, 15),
            isha: at(21, 45),
        };
        let deltas = SolarDeltas {
            sunrise: 4,
            noon: 0,
            sunset: -2,
        };
        PrayerSchedule::from_timetable(NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(), &row, &deltas, at(18, 42))
    }

    #[test]
    fn test_summary_is_wrapped_in_a_pre_block() {
        let text = render(&schedule(), "Rainham, LDN 🇬🇧");
        assert!(text.starts_with("<pre>\n"));
        assert!(text.ends_with("\n</pre>"));
    }

    #[test]
    fn test_summary_header_has_date_and_location() {
        let text = render(&schedule(), "Rainham, LDN 🇬🇧");
        assert!(text.contains("📍 Prayer Times for Sat 21-06-25 (Rainham, LDN 🇬🇧)"));
    }

    #[test]
    fn test_summary_lists_every_prayer_start_and_end() {
        let text = render(&schedule(), "Rainham, LDN 🇬🇧");

        for label in ["Fajr starts", "Dhuhr starts", "Asr starts", "Maghrib starts", "Isha starts", "Tahajjud starts"] {
            assert!(text.contains(label), "missing {}", label);
        }
        assert_eq!(text.lines().filter(|line| line.contains("⏳ Ends:")).count(), 6);
    }

    #[test]
    fn test_summary_columns_are_aligned() {
        let text = render(&schedule(), "Rainham, LDN 🇬🇧");

        // Every value line pads its label to 24 characters before the HH:MM
        // value, so all value lines are exactly 29 characters wide.
        let value_lines: Vec<&str> = text.lines().filter(|line| line.contains("starts:") || line.contains("Ends:")).collect();
        assert_eq!(value_lines.len(), 12);
        for line in value_lines {
            assert_eq!(line.chars().count(), 29, "misaligned line: {:?}", line);
        }
    }

    #[test]
    fn test_summary_shows_the_adjusted_times() {
        let text = render(&schedule(), "Rainham, LDN 🇬🇧");

        let fajr_line = text.lines().find(|line| line.contains("Fajr starts:")).unwrap();
        assert!(fajr_line.ends_with("04:34"));

        let maghrib_line = text.lines().find(|line| line.contains("Maghrib starts:")).unwrap();
        assert!(maghrib_line.ends_with("20:13"));
    }

    #[test]
    fn test_summary_separates_prayers_with_blank_lines_and_ends_with_the_method() {
        let text = render(&schedule(), "Rainham, LDN 🇬🇧");
        let inner = text.trim_start_matches("<pre>\n").trim_end_matches("\n</pre>");

        assert_eq!(inner.lines().filter(|line| line.is_empty()).count(), 7);
        assert!(inner.lines().last().unwrap().contains("coord-adjusted"));
    }
}
