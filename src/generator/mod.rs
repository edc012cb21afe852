//! # Flight Generator
//!
//! Fabricates the empty-leg listing. Every request builds its own list
//! from scratch; nothing is stored between runs.

mod config;
mod flight;
mod generator;

pub use config::GeneratorConfig;
pub use flight::{Flight, FlightStatus};
pub use generator::FlightGenerator;
