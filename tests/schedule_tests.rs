//! Schedule validator tests
//!
//! These cover green-window compilation and every fatal validation error.

use traffic_judge::simulation::{apply_schedule, parse_dataset, City, GreenWindow, ScheduleError};

const DATASET: &str = "\
10 3 3 2 100
0 1 ab 2
1 2 bc 3
0 1 cd 1
2 ab bc
1 cd
";

fn city() -> City {
    parse_dataset(DATASET).expect("dataset should parse")
}

#[test]
fn test_green_windows_tile_the_cycle() {
    let mut city = city();
    let submission = "1\n1\n2\nab 2\ncd 3\n";

    let stats = apply_schedule(&mut city, submission).expect("schedule should validate");

    let ab = city.street("ab").unwrap();
    assert_eq!(ab.green, Some(GreenWindow { start: 0, end: 1 }));
    assert_eq!(ab.cycle, 5);

    let cd = city.street("cd").unwrap();
    assert_eq!(cd.green, Some(GreenWindow { start: 2, end: 4 }));
    assert_eq!(cd.cycle, 5);

    // bc was not scheduled, so it stays permanently red
    let bc = city.street("bc").unwrap();
    assert_eq!(bc.green, None);
    assert_eq!(bc.cycle, 0);

    assert_eq!(stats.intersections, 1);
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.cycle_total, 5);
    assert_eq!(stats.green_total, 5);
    assert_eq!(stats.average_cycle(), 5.0);
    assert_eq!(stats.average_green(), 2.5);
}

#[test]
fn test_unknown_street_still_occupies_cycle_time() {
    let mut city = city();
    // `zz` is not in the city model; its green time shifts the windows
    // that follow it but records nothing.
    let submission = "1\n1\n2\nzz 4\nab 1\n";

    let stats = apply_schedule(&mut city, submission).expect("schedule should validate");

    let ab = city.street("ab").unwrap();
    assert_eq!(ab.green, Some(GreenWindow { start: 4, end: 4 }));
    assert_eq!(ab.cycle, 5);

    assert_eq!(stats.entries, 2);
    assert_eq!(stats.green_total, 5);
    assert_eq!(stats.cycle_total, 5);
}

#[test]
fn test_empty_schedule_is_valid() {
    let mut city = city();
    let stats = apply_schedule(&mut city, "0\n").expect("empty schedule should validate");
    assert_eq!(stats.intersections, 0);
    assert_eq!(stats.entries, 0);
}

#[test]
fn test_rejects_truncated_submission() {
    let mut city = city();
    let result = apply_schedule(&mut city, "3\n");
    assert_eq!(result.unwrap_err(), ScheduleError::TruncatedSubmission);

    // Declared two entries but only supplied one
    let mut city = self::city();
    let result = apply_schedule(&mut city, "1\n1\n2\nab 2\n");
    assert_eq!(result.unwrap_err(), ScheduleError::TruncatedSubmission);
}

#[test]
fn test_rejects_non_numeric_counts() {
    let mut city = city();
    let result = apply_schedule(&mut city, "x\n");
    assert_eq!(
        result.unwrap_err(),
        ScheduleError::MalformedCount("x".to_string())
    );

    let mut city = self::city();
    let result = apply_schedule(&mut city, "1\n1\nnope\n");
    assert_eq!(
        result.unwrap_err(),
        ScheduleError::MalformedCount("nope".to_string())
    );
}

#[test]
fn test_rejects_duplicate_intersection() {
    let mut city = city();
    let submission = "2\n1\n1\nab 2\n1\n1\ncd 2\n";
    let result = apply_schedule(&mut city, submission);
    assert_eq!(
        result.unwrap_err(),
        ScheduleError::DuplicateIntersectionSchedule(1)
    );
}

#[test]
fn test_rejects_street_not_ending_at_intersection() {
    let mut city = city();
    // bc runs into intersection 2, not 1
    let submission = "1\n1\n1\nbc 2\n";
    let result = apply_schedule(&mut city, submission);
    assert_eq!(
        result.unwrap_err(),
        ScheduleError::StreetIntersectionMismatch {
            street: "bc".to_string(),
            intersection: 1,
        }
    );
}

#[test]
fn test_rejects_out_of_range_green_durations() {
    // Zero is below the minimum
    let mut city = city();
    let result = apply_schedule(&mut city, "1\n1\n1\nab 0\n");
    assert_eq!(
        result.unwrap_err(),
        ScheduleError::GreenDurationOutOfRange(0, 10)
    );

    // One past the simulation horizon
    let mut city = self::city();
    let result = apply_schedule(&mut city, "1\n1\n1\nab 11\n");
    assert_eq!(
        result.unwrap_err(),
        ScheduleError::GreenDurationOutOfRange(11, 10)
    );
}

#[test]
fn test_rejects_non_numeric_green_duration() {
    let mut city = city();
    let result = apply_schedule(&mut city, "1\n1\n1\nab abc\n");
    assert_eq!(
        result.unwrap_err(),
        ScheduleError::MalformedGreenDuration("abc".to_string())
    );
}
