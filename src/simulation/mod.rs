//! Standalone judging pipeline for the traffic-signaling contest
//!
//! This module contains all the scoring logic and can run independently
//! of any file or terminal I/O. Data flows one way through it:
//! dataset parser -> schedule validator -> simulation engine -> report.

mod city;
mod engine;
mod report;
mod schedule;
mod types;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use city::{parse_dataset, City};
#[allow(unused_imports)]
pub use engine::run;
#[allow(unused_imports)]
pub use report::{aggregate, render, Insights};
#[allow(unused_imports)]
pub use schedule::{apply_schedule, ScheduleError, ScheduleStats};
#[allow(unused_imports)]
pub use types::{Arrival, Car, CarId, GreenWindow, SimulationConfig, Street, StreetId};
