//! Daily summary rendering.
//!
//! Produces the fixed-width prayer table sent to the chat every morning:
//! a header with the date and location label, one start line and one end
//! line per prayer separated by blank lines, and the computation method as
//! the final line, all wrapped in a `<pre>` block so Telegram preserves the
//! column alignment.

use crate::libs::schedule::{PrayerName, PrayerSchedule};

/// Width of the label column in characters, including the emoji prefix and
/// the trailing colon.
const LABEL_WIDTH: usize = 24;

/// Renders the daily summary for a schedule.
pub fn render(schedule: &PrayerSchedule, location_label: &str) -> String {
    let header = format!("📍 Prayer Times for {} ({})", schedule.date.format("%a %d-%m-%y"), location_label);

    let mut lines = vec![header];
    for window in &schedule.windows {
        lines.push(String::new());
        lines.push(row(emoji(window.name), &format!("{} starts", window.name), &window.start.format("%H:%M").to_string()));
        lines.push(row("   ⏳", "Ends", &window.end.format("%H:%M").to_string()));
    }
    lines.push(String::new());
    lines.push(schedule.source.label().to_string());

    format!("<pre>\n{}\n</pre>", lines.join("\n"))
}

fn row(emoji: &str, label: &str, time: &str) -> String {
    let head = format!("{} {}:", emoji, label);
    format!("{:<width$}{}", head, time, width = LABEL_WIDTH)
}

fn emoji(name: PrayerName) -> &'static str {
    match name {
        PrayerName::Fajr => "🌅",
        PrayerName::Dhuhr => "🕛",
        PrayerName::Asr => "🕒",
        PrayerName::Maghrib => "🌇",
        PrayerName::Isha => "🌃",
        PrayerName::Tahajjud => "🌌",
    }
}
