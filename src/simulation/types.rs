//! Core types for the traffic-signaling judge
//!
//! These are standalone types that don't depend on any I/O layer.

/// A wrapper type for street indices into the city's street table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreetId(pub usize);

/// A wrapper type for car indices, matching dataset order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarId(pub usize);

/// Header values of a contest dataset
///
/// Immutable after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Simulation horizon in ticks; tick indices run over `0..=duration`
    pub duration: u32,
    /// Number of intersections in the city
    pub intersections: u32,
    /// Number of streets in the city
    pub streets: u32,
    /// Number of cars in the city
    pub cars: u32,
    /// Bonus points awarded for every car that arrives within the horizon
    pub bonus: u32,
}

/// Inclusive tick-offset range within a repeating cycle during which a
/// street may be crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreenWindow {
    pub start: u32,
    pub end: u32,
}

/// A one-way street connecting two intersections
///
/// The FIFO arrival queue is virtual: instead of physically queuing car
/// ids, the street hands out monotonically increasing tickets and records
/// the last ticket that crossed. A car is at the head of the queue when
/// its ticket is exactly one past the last crossed ticket.
#[derive(Debug, Clone)]
pub struct Street {
    pub name: String,
    /// Intersection the street leaves from
    pub start: u32,
    /// Intersection the street runs into; its light lives here
    pub end: u32,
    /// Ticks required to traverse the street once a green light is taken
    pub travel_time: u32,
    /// Compiled green window, if the submission scheduled this street.
    /// A street with no window is permanently red.
    pub green: Option<GreenWindow>,
    /// Cycle length of the intersection this street runs into; zero until
    /// the validator records a schedule for that intersection
    pub cycle: u32,
    /// Next queue ticket to hand out
    tickets_issued: u64,
    /// Ticket of the last car that crossed this street
    pub last_crossed: Option<u64>,
    /// Tick at which the last crossing happened, for the
    /// one-crossing-per-tick rule
    pub last_cross_tick: Option<u32>,
}

impl Street {
    pub fn new(name: String, start: u32, end: u32, travel_time: u32) -> Self {
        Self {
            name,
            start,
            end,
            travel_time,
            green: None,
            cycle: 0,
            tickets_issued: 0,
            last_crossed: None,
            last_cross_tick: None,
        }
    }

    /// Hand out the next queue ticket for this street
    pub fn issue_ticket(&mut self) -> u64 {
        let ticket = self.tickets_issued;
        self.tickets_issued += 1;
        ticket
    }

    /// Whether the street's light is green at the given tick
    ///
    /// Unscheduled streets never report green.
    pub fn is_green(&self, tick: u32) -> bool {
        match self.green {
            Some(window) if self.cycle > 0 => {
                let offset = tick % self.cycle;
                offset >= window.start && offset <= window.end
            }
            _ => false,
        }
    }
}

/// Terminal state of a car that reached the end of its route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    /// Tick at which the car arrived
    pub commute: u32,
    /// Bonus plus remaining horizon at arrival
    pub score: u64,
}

/// A car following a fixed route of streets
#[derive(Debug, Clone)]
pub struct Car {
    pub id: CarId,
    /// Ordered route of streets; never branches, length >= 1
    pub route: Vec<StreetId>,
    /// Index of the street the car is currently on
    pub position: usize,
    /// Ticks left before the car reaches the end of its current street
    pub remaining: u32,
    /// Queue ticket for the current street
    pub ticket: u64,
    /// Queue ticket pre-registered for the next street, issued one tick
    /// before the car finishes its current street
    pub next_ticket: Option<u64>,
    /// Set once the car completes its route; terminal
    pub arrival: Option<Arrival>,
}

impl Car {
    /// Create a car at the start of its route
    ///
    /// A car entering a street at tick `t` reaches the street end at tick
    /// `t + travel_time`, with decrements starting the following tick.
    /// Cars enter their first street at tick 0, but tick 0 itself also
    /// decrements, hence the extra unit here.
    pub fn new(id: CarId, route: Vec<StreetId>, first_travel_time: u32, ticket: u64) -> Self {
        Self {
            id,
            route,
            position: 0,
            remaining: first_travel_time + 1,
            ticket,
            next_ticket: None,
            arrival: None,
        }
    }

    /// Whether the car is on the last street of its route
    pub fn on_last_street(&self) -> bool {
        self.position + 1 == self.route.len()
    }
}
