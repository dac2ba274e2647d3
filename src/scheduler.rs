//! Cron-cadence helpers for the import loop.
//!
//! The supervisor computes the next occurrence only after the in-flight cycle
//! has finished, so two cycles can never overlap: an occurrence whose moment
//! passes while a cycle is still running is skipped, not queued.

use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use cron::Schedule;

/// Parses a six-field cron expression (seconds first).
pub fn parse_schedule(expr: &str) -> Result<Schedule, cron::error::Error> {
    Schedule::from_str(expr)
}

/// Time from now until the schedule's next occurrence.
///
/// Returns `None` if the schedule has no future occurrences. A negative
/// remainder (the occurrence passed between computation and now) clamps to
/// zero so the caller fires immediately instead of erroring.
pub fn until_next_tick(schedule: &Schedule) -> Option<Duration> {
    let next = schedule.upcoming(Utc).next()?;
    Some((next - Utc::now()).to_std().unwrap_or(Duration::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SCHEDULE;

    #[test]
    fn default_schedule_parses() {
        parse_schedule(DEFAULT_SCHEDULE).expect("default cadence should parse");
    }

    #[test]
    fn malformed_expression_is_rejected() {
        assert!(parse_schedule("every 15 minutes").is_err());
        assert!(parse_schedule("*/15 * * *").is_err());
    }

    #[test]
    fn every_second_schedule_ticks_within_a_second() {
        let schedule = parse_schedule("* * * * * *").expect("should parse");
        let delay = until_next_tick(&schedule).expect("should have an occurrence");
        assert!(delay <= Duration::from_secs(1));
    }

    #[test]
    fn default_schedule_ticks_within_fifteen_minutes() {
        let schedule = parse_schedule(DEFAULT_SCHEDULE).expect("should parse");
        let delay = until_next_tick(&schedule).expect("should have an occurrence");
        assert!(delay <= Duration::from_secs(15 * 60));
    }
}
