//! Report aggregation and rendering
//!
//! Pure computation over the final car states and the validator's
//! running totals, plus the plain-text rendering of the three-paragraph
//! insights report.

use std::fmt::Write as _;

use super::city::City;
use super::schedule::ScheduleStats;
use super::types::Arrival;

/// Aggregated results of a judged run
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub total_cars: usize,
    pub arrived: usize,
    pub total_score: u64,
    /// `bonus x arrived`
    pub bonus_score: u64,
    /// Score earned by arriving before the horizon ran out
    pub early_score: u64,
    /// Commute time and score of the first car to arrive
    pub earliest: Option<Arrival>,
    /// Commute time and score of the last car to arrive
    pub latest: Option<Arrival>,
    /// Average commute of arrived cars; NaN when none arrived
    pub average_commute: f64,
    pub average_cycle: f64,
    pub average_green: f64,
}

/// Aggregate final car states and schedule statistics into insights
pub fn aggregate(city: &City, stats: &ScheduleStats) -> Insights {
    let mut arrivals: Vec<Arrival> = city.cars.iter().filter_map(|car| car.arrival).collect();
    // Stable sort keeps dataset order between cars arriving on the same
    // tick, matching the earliest/latest tie-break.
    arrivals.sort_by_key(|arrival| arrival.commute);

    let arrived = arrivals.len();
    let total_score: u64 = arrivals.iter().map(|arrival| arrival.score).sum();
    let bonus_score = u64::from(city.config.bonus) * arrived as u64;
    let commute_total: u64 = arrivals.iter().map(|a| u64::from(a.commute)).sum();

    Insights {
        total_cars: city.cars.len(),
        arrived,
        total_score,
        bonus_score,
        early_score: total_score - bonus_score,
        earliest: arrivals.first().copied(),
        latest: arrivals.last().copied(),
        average_commute: commute_total as f64 / arrived as f64,
        average_cycle: stats.average_cycle(),
        average_green: stats.average_green(),
    }
}

/// Render the three-paragraph insights report
pub fn render(insights: &Insights) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Total score: {} ({} from arrival bonuses, {} from early arrivals)",
        insights.total_score, insights.bonus_score, insights.early_score
    );
    let _ = writeln!(out);

    let percentage = if insights.total_cars > 0 {
        insights.arrived as f64 / insights.total_cars as f64 * 100.0
    } else {
        0.0
    };
    let _ = writeln!(
        out,
        "{} of {} cars arrived ({:.1}%)",
        insights.arrived, insights.total_cars, percentage
    );
    if let (Some(earliest), Some(latest)) = (insights.earliest, insights.latest) {
        let _ = writeln!(
            out,
            "Earliest arrival: commute {} ticks, score {}",
            earliest.commute, earliest.score
        );
        let _ = writeln!(
            out,
            "Latest arrival: commute {} ticks, score {}",
            latest.commute, latest.score
        );
        let _ = writeln!(
            out,
            "Average commute: {:.1} ticks",
            insights.average_commute
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Average cycle length: {:.1} ticks",
        insights.average_cycle
    );
    let _ = writeln!(
        out,
        "Average green duration: {:.1} ticks",
        insights.average_green
    );

    out
}
