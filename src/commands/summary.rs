use crate::api::{Telegram, Timetable};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::solar::SolarCalculator;
use crate::libs::{schedule, summary};
use crate::msg_success;
use anyhow::Result;

// Computes today's schedule and sends the formatted summary once.
pub async fn cmd() -> Result<()> {
    let config = Config::from_env()?;
    let timetable = Timetable::new(config.timetable_api_key.clone(), config.zone);
    let calculator = SolarCalculator::new(config.latitude, config.longitude, config.zone);

    let schedule = schedule::reconcile(&config, &timetable, &calculator).await?;
    let text = summary::render(&schedule, &config.location_label);
    Telegram::new(&config).send_html(&text).await?;
    msg_success!(Message::SummarySent(schedule.date.to_string()));

    Ok(())
}
