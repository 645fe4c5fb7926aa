//! Intercity route recommendation server.
//!
//! A web application that answers: "Between these two Indian cities, should
//! I take the train, a flight, the bus or drive, given what I care about?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod planner;
pub mod registry;
pub mod snapshot;
pub mod source;
pub mod web;
