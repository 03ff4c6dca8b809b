//! Traffic Signaling Judge Library
//!
//! A referee and scorer for the traffic-signaling optimization contest.
//! It can run as a library or through the command-line binary.

pub mod simulation;
