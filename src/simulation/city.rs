//! City model and dataset parser
//!
//! The city holds an index-stable street table plus a name lookup built
//! once at parse time, and the ordered car list. The schedule validator
//! and the engine mutate it in place during their phases.

use anyhow::{Context, Result};
use log::info;
use std::collections::HashMap;

use super::types::{Car, CarId, SimulationConfig, Street, StreetId};

/// The parsed city model shared by the validator and the engine
#[derive(Debug, Clone)]
pub struct City {
    pub config: SimulationConfig,
    /// All streets, in dataset order
    pub streets: Vec<Street>,
    /// Street name to index in `streets`, built once at parse time
    pub street_index: HashMap<String, usize>,
    /// All cars, in dataset order
    pub cars: Vec<Car>,
}

impl City {
    /// Look up a street by name
    pub fn street(&self, name: &str) -> Option<&Street> {
        self.street_index.get(name).map(|&idx| &self.streets[idx])
    }
}

/// Parse a contest dataset into a city model
///
/// Contest datasets are trusted: beyond literal numeric conversion no
/// validation happens here, and a malformed file surfaces as a generic
/// parse error rather than a typed one.
pub fn parse_dataset(text: &str) -> Result<City> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = lines.next().context("dataset is empty")?;
    let mut fields = header.split_whitespace();
    let mut next_int = |what: &str| -> Result<u32> {
        fields
            .next()
            .with_context(|| format!("dataset header is missing {what}"))?
            .parse()
            .with_context(|| format!("dataset header has a non-numeric {what}"))
    };
    let config = SimulationConfig {
        duration: next_int("duration")?,
        intersections: next_int("intersection count")?,
        streets: next_int("street count")?,
        cars: next_int("car count")?,
        bonus: next_int("bonus")?,
    };

    let mut streets = Vec::with_capacity(config.streets as usize);
    let mut street_index = HashMap::with_capacity(config.streets as usize);
    for _ in 0..config.streets {
        let line = lines.next().context("dataset ended before all streets")?;
        let mut fields = line.split_whitespace();
        let start: u32 = fields
            .next()
            .context("street line is missing its start intersection")?
            .parse()
            .context("non-numeric start intersection")?;
        let end: u32 = fields
            .next()
            .context("street line is missing its end intersection")?
            .parse()
            .context("non-numeric end intersection")?;
        let name = fields
            .next()
            .context("street line is missing its name")?
            .to_string();
        let travel_time: u32 = fields
            .next()
            .context("street line is missing its travel time")?
            .parse()
            .context("non-numeric travel time")?;

        street_index.insert(name.clone(), streets.len());
        streets.push(Street::new(name, start, end, travel_time));
    }

    // Cars join their first street's queue in dataset order, which fixes
    // queuing-number ties between cars starting on the same street.
    let mut cars = Vec::with_capacity(config.cars as usize);
    for index in 0..config.cars {
        let line = lines.next().context("dataset ended before all cars")?;
        let mut fields = line.split_whitespace();
        let route_len: usize = fields
            .next()
            .context("car line is missing its route length")?
            .parse()
            .context("non-numeric route length")?;

        let mut route = Vec::with_capacity(route_len);
        for _ in 0..route_len {
            let name = fields.next().context("car route ended early")?;
            let &idx = street_index
                .get(name)
                .with_context(|| format!("car route names unknown street `{name}`"))?;
            route.push(StreetId(idx));
        }
        let first = *route.first().context("car route is empty")?;

        let first_street = &mut streets[first.0];
        let ticket = first_street.issue_ticket();
        let travel_time = first_street.travel_time;
        cars.push(Car::new(CarId(index as usize), route, travel_time, ticket));
    }

    info!(
        "Parsed city: {} intersections, {} streets, {} cars, horizon {} ticks",
        config.intersections, config.streets, config.cars, config.duration
    );

    Ok(City {
        config,
        streets,
        street_index,
        cars,
    })
}
