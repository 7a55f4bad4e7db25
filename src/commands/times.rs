use crate::api::Timetable;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::schedule;
use crate::libs::solar::SolarCalculator;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

// Computes today's prayer windows and prints them as a table.
pub async fn cmd() -> Result<()> {
    let config = Config::from_env()?;
    let timetable = Timetable::new(config.timetable_api_key.clone(), config.zone);
    let calculator = SolarCalculator::new(config.latitude, config.longitude, config.zone);

    let schedule = schedule::reconcile(&config, &timetable, &calculator).await?;
    msg_print!(Message::ScheduleComputed(schedule.date.to_string(), schedule.source.label().to_string()), true);
    View::windows(&schedule);

    Ok(())
}
