#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, TimeZone};
    use chrono_tz::Tz;
    use miqat::api::timetable::{Timetable, TimetableError};
    use serde_json::json;

    const ZONE: Tz = chrono_tz::Europe::London;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 21).unwrap()
    }

    fn at(hour: u32, minute: u32) -> DateTime<Tz> {
        ZONE.with_ymd_and_hms(2025, 6, 21, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_parse_flat_payload() {
        let payload = json!({
            "fajr": "02:46",
            "sunrise": "04:43",
            "dhuhr": "13:05",
            "asr": "17:40",
            "maghrib": "21:21",
            "isha": "22:46"
        });

        let row = Timetable::parse_row(payload, day(), ZONE).unwrap();

        assert_eq!(row.fajr, at(2, 46));
        assert_eq!(row.sunrise, at(4, 43));
        assert_eq!(row.dhuhr, at(13, 5));
        assert_eq!(row.asr, at(17, 40));
        assert_eq!(row.maghrib, at(21, 21));
        assert_eq!(row.isha, at(22, 46));
    }

    #[test]
    fn test_parse_legacy_wrapped_payload() {
        let payload = json!({
            "times": [{
                "fajr": "02:46",
                "sunrise": "04:43",
                "dhuhr": "13:05",
                "asr": "17:40",
                "magrib": "21:21",
                "isha": "22:46"
            }]
        });

        let row = Timetable::parse_row(payload, day(), ZONE).unwrap();

        // The legacy spelling of maghrib still lands in the right field.
        assert_eq!(row.maghrib, at(21, 21));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let payload = json!({
            "date": "2025-06-21",
            "fajr": "02:46",
            "sunrise": "04:43",
            "dhuhr": "13:05",
            "asr": "17:40",
            "asr_mithl_1": "17:40",
            "asr_mithl_2": "18:42",
            "maghrib": "21:21",
            "isha": "22:46"
        });

        assert!(Timetable::parse_row(payload, day(), ZONE).is_ok());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let payload = json!({
            "fajr": "02:46",
            "sunrise": "04:43",
            "dhuhr": "13:05",
            "asr": "17:40",
            "maghrib": "21:21"
        });

        let error = Timetable::parse_row(payload, day(), ZONE).unwrap_err();
        assert!(matches!(error, TimetableError::Payload(_)));
    }

    #[test]
    fn test_unrecognized_shape_is_rejected() {
        let error = Timetable::parse_row(json!(["02:46", "04:43"]), day(), ZONE).unwrap_err();
        assert!(matches!(error, TimetableError::Payload(_)));
    }

    #[test]
    fn test_empty_times_list_is_rejected() {
        let error = Timetable::parse_row(json!({ "times": [] }), day(), ZONE).unwrap_err();
        assert!(matches!(error, TimetableError::EmptyTimetable));
    }

    #[test]
    fn test_out_of_range_time_is_rejected() {
        let payload = json!({
            "fajr": "24:00",
            "sunrise": "04:43",
            "dhuhr": "13:05",
            "asr": "17:40",
            "maghrib": "21:21",
            "isha": "22:46"
        });

        let error = Timetable::parse_row(payload, day(), ZONE).unwrap_err();
        assert!(matches!(error, TimetableError::InvalidTime(_)));
    }

    #[test]
    fn test_malformed_time_is_rejected() {
        let payload = json!({
            "fajr": "2.46",
            "sunrise": "04:43",
            "dhuhr": "13:05",
            "asr": "17:40",
            "maghrib": "21:21",
            "isha": "22:46"
        });

        let error = Timetable::parse_row(payload, day(), ZONE).unwrap_err();
        assert!(matches!(error, TimetableError::InvalidTime(_)));
    }

    #[test]
    fn test_nonexistent_local_time_is_rejected() {
        // Clocks jump 01:00 -> 02:00 on 2025-03-30 in London.
        let spring_forward = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
        let payload = json!({
            "fajr": "01:30",
            "sunrise": "05:43",
            "dhuhr": "12:05",
            "asr": "15:40",
            "maghrib": "18:21",
            "isha": "19:46"
        });

        let error = Timetable::parse_row(payload, spring_forward, ZONE).unwrap_err();
        assert!(matches!(error, TimetableError::NonexistentLocalTime(_, _)));
    }
}
