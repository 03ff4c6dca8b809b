//! Schedule validator
//!
//! Parses a submitted traffic-light schedule, validates it against the
//! city model and compiles each scheduled street's green window. Within
//! one intersection the windows are laid out back to back in submission
//! order starting at offset 0, so together they tile `[0, cycle)`.

use log::info;
use std::collections::HashSet;
use thiserror::Error;

use super::city::City;
use super::types::GreenWindow;

/// Validation failures, all fatal to the run
///
/// The engine never runs on a partially validated schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("submission ended before all declared schedule entries were read")]
    TruncatedSubmission,
    #[error("expected a numeric count, found `{0}`")]
    MalformedCount(String),
    #[error("intersection {0} is scheduled more than once")]
    DuplicateIntersectionSchedule(u32),
    #[error("street `{street}` does not run into intersection {intersection}")]
    StreetIntersectionMismatch { street: String, intersection: u32 },
    #[error("expected a numeric green duration, found `{0}`")]
    MalformedGreenDuration(String),
    #[error("green duration {0} is outside 1..={1}")]
    GreenDurationOutOfRange(i64, u32),
}

/// Running totals accumulated during validation, surfaced in the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleStats {
    /// Number of scheduled intersections
    pub intersections: usize,
    /// Number of scheduled street entries across all intersections
    pub entries: usize,
    /// Sum of cycle lengths over scheduled intersections
    pub cycle_total: u64,
    /// Sum of green durations over scheduled street entries
    pub green_total: u64,
}

impl ScheduleStats {
    /// Average cycle length per scheduled intersection
    pub fn average_cycle(&self) -> f64 {
        self.cycle_total as f64 / self.intersections as f64
    }

    /// Average green duration per scheduled street entry
    pub fn average_green(&self) -> f64 {
        self.green_total as f64 / self.entries as f64
    }
}

/// Validate a submission against the city model and compile green windows
///
/// On success every scheduled street carries its green window and the
/// cycle length of the intersection it runs into. A street name that is
/// absent from the city model is not an error: its green time still
/// occupies a slot of the cycle, there is just no street to record the
/// window on.
pub fn apply_schedule(city: &mut City, submission: &str) -> Result<ScheduleStats, ScheduleError> {
    let duration = city.config.duration;
    let mut lines = submission
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());
    let mut next_line = || lines.next().ok_or(ScheduleError::TruncatedSubmission);

    let header = next_line()?;
    let scheduled: usize = parse_count(header)?;

    let mut seen: HashSet<u32> = HashSet::with_capacity(scheduled);
    let mut stats = ScheduleStats::default();

    for _ in 0..scheduled {
        let id_line = next_line()?;
        let intersection: u32 = parse_count(id_line)?;
        if !seen.insert(intersection) {
            return Err(ScheduleError::DuplicateIntersectionSchedule(intersection));
        }

        let count_line = next_line()?;
        let incoming: usize = parse_count(count_line)?;

        let mut offset = 0u32;
        let mut compiled: Vec<usize> = Vec::with_capacity(incoming);
        for _ in 0..incoming {
            let entry = next_line()?;
            let mut fields = entry.split_whitespace();
            let name = fields.next().unwrap_or("");
            let green_token = fields.next().unwrap_or("");
            let green: i64 = green_token
                .parse()
                .map_err(|_| ScheduleError::MalformedGreenDuration(green_token.to_string()))?;
            if green < 1 || green > duration as i64 {
                return Err(ScheduleError::GreenDurationOutOfRange(green, duration));
            }
            let green = green as u32;

            if let Some(&idx) = city.street_index.get(name) {
                let street = &mut city.streets[idx];
                if street.end != intersection {
                    return Err(ScheduleError::StreetIntersectionMismatch {
                        street: name.to_string(),
                        intersection,
                    });
                }
                street.green = Some(GreenWindow {
                    start: offset,
                    end: offset + green - 1,
                });
                compiled.push(idx);
            }

            offset += green;
            stats.entries += 1;
            stats.green_total += u64::from(green);
        }

        // The final offset is the intersection's cycle length; every
        // street it scheduled repeats with that period.
        for idx in compiled {
            city.streets[idx].cycle = offset;
        }
        stats.intersections += 1;
        stats.cycle_total += u64::from(offset);
    }

    info!(
        "Schedule valid: {} intersections, {} street entries",
        stats.intersections, stats.entries
    );

    Ok(stats)
}

fn parse_count<T: std::str::FromStr>(token: &str) -> Result<T, ScheduleError> {
    token
        .parse()
        .map_err(|_| ScheduleError::MalformedCount(token.to_string()))
}
