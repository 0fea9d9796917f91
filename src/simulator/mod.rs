//! Game balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of games with an automatic player to see how often a
//! strategy wins, where players die, and how much gold they bank. Every game
//! goes through the same `Game` loop as interactive play.

mod config;
mod report;
mod runner;
mod strategy;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunResult, RunStats};
pub use strategy::{AutoPilot, RunTally, Strategy};
