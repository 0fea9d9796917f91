//! Plays whole games headlessly through the same `Game` the binary uses.

use super::config::SimConfig;
use super::report::SimReport;
use super::strategy::{AutoPilot, RunTally};
use crate::character::{Combatant, Player};
use crate::combat::EncounterOutcome;
use crate::core::game_loop::{Game, GameSummary};
use crate::core::rng::GameRng;
use crate::monster::MonsterKind;
use std::collections::BTreeMap;
use std::io;

/// How a single simulated game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunResult {
    Won,
    Died { killed_by: MonsterKind },
    TimedOut,
}

/// Statistics for one simulated game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub seed: u64,
    pub result: RunResult,
    pub encounters: u64,
    pub final_level: u32,
    pub final_gold: u32,
    pub final_health: i32,
    pub kills: BTreeMap<MonsterKind, u64>,
    pub flee_attempts: u64,
    pub flees: u64,
    pub damage_dealt: u64,
    pub damage_taken: u64,
}

impl RunStats {
    fn new(seed: u64) -> Self {
        Self {
            seed,
            result: RunResult::TimedOut,
            encounters: 0,
            final_level: 0,
            final_gold: 0,
            final_health: 0,
            kills: BTreeMap::new(),
            flee_attempts: 0,
            flees: 0,
            damage_dealt: 0,
            damage_taken: 0,
        }
    }

    fn record(&mut self, outcome: EncounterOutcome) {
        self.encounters += 1;
        match outcome {
            EncounterOutcome::MonsterKilled { kind, .. } => {
                *self.kills.entry(kind).or_insert(0) += 1;
            }
            EncounterOutcome::PlayerKilled { kind } => {
                self.result = RunResult::Died { killed_by: kind };
            }
            EncounterOutcome::Fled { .. } => {}
        }
    }

    fn finish(&mut self, player: &Player, summary: Option<GameSummary>, tally: &RunTally) {
        if summary.is_some_and(|s| s.is_victory()) {
            self.result = RunResult::Won;
        }
        self.final_level = player.level();
        self.final_gold = player.gold();
        self.final_health = player.health();
        self.flee_attempts = tally.flee_attempts;
        self.flees = tally.flees;
        self.damage_dealt = tally.damage_dealt;
        self.damage_taken = tally.damage_taken;
    }

    pub fn total_kills(&self) -> u64 {
        self.kills.values().sum()
    }
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> io::Result<SimReport> {
    let base_seed = config
        .seed
        .unwrap_or_else(|| GameRng::from_clock().seed());
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = base_seed.wrapping_add(u64::from(run_idx));
        let stats = simulate_single_run(config, seed)?;

        if config.verbosity >= 2 {
            eprintln!(
                "Run {}/{} (seed {}) - {:?}, Level {}, Gold {}, Encounters {}",
                run_idx + 1,
                config.num_runs,
                stats.seed,
                stats.result,
                stats.final_level,
                stats.final_gold,
                stats.encounters
            );
        }
        all_runs.push(stats);
    }

    Ok(SimReport::from_runs(config.strategy, all_runs))
}

/// Play one game from a fresh player until it ends or hits the encounter cap.
pub fn simulate_single_run(config: &SimConfig, seed: u64) -> io::Result<RunStats> {
    let mut game = Game::new(Player::new("SimPlayer"), GameRng::from_seed(seed));
    let mut pilot = AutoPilot::new(config.strategy).verbose(config.verbosity >= 3);
    let mut stats = RunStats::new(seed);

    while !game.is_over() && stats.encounters < config.max_encounters_per_run {
        let outcome = game.play_encounter(&mut pilot)?;
        stats.record(outcome);
    }

    stats.finish(game.player(), game.summary(), pilot.tally());
    Ok(stats)
}
