//! # life_engine
//!
//! A simulation engine for Conway's Game of Life on a toroidal grid.
//! Only the classical B3/S23 rule is supported.

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod simulation;

pub use cell::Cell;
pub use config::SimulationConfig;
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use patterns::Pattern;
pub use simulation::FinishedReason;
pub use simulation::Simulation;
pub use simulation::SimulationState;
