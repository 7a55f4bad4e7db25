use crate::libs::schedule::PrayerSchedule;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn windows(schedule: &PrayerSchedule) {
        let mut table = Table::new();

        table.add_row(row!["PRAYER", "STARTS", "ENDS", "REMINDER"]);
        for window in &schedule.windows {
            table.add_row(row![
                window.name.to_string(),
                window.start.format("%H:%M"),
                window.end.format("%H:%M"),
                window.reminder.format("%H:%M")
            ]);
        }
        table.printstd();
    }
}
