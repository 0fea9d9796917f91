//! Simulation report generation.

use super::runner::{RunResult, RunStats};
use super::strategy::Strategy;
use crate::monster::MonsterKind;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Aggregated results from multiple simulated games.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub strategy: Strategy,
    pub num_runs: u32,
    pub runs_won: u32,
    pub runs_died: u32,
    pub runs_timed_out: u32,
    pub win_rate: f64,

    // Averages over all runs
    pub avg_final_level: f64,
    pub avg_final_gold: f64,
    pub avg_encounters: f64,
    pub avg_flee_attempts: f64,
    pub flee_success_rate: f64,

    // Distributions
    pub level_distribution: BTreeMap<u32, u32>,
    pub kills_by_monster: BTreeMap<MonsterKind, u64>,
    pub deaths_by_monster: BTreeMap<MonsterKind, u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], value: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(value).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    pub fn from_runs(strategy: Strategy, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let runs_won = runs.iter().filter(|r| r.result == RunResult::Won).count() as u32;
        let runs_timed_out = runs
            .iter()
            .filter(|r| r.result == RunResult::TimedOut)
            .count() as u32;
        let runs_died = num_runs - runs_won - runs_timed_out;

        let win_rate = if num_runs == 0 {
            0.0
        } else {
            runs_won as f64 / num_runs as f64
        };

        let total_attempts: u64 = runs.iter().map(|r| r.flee_attempts).sum();
        let total_flees: u64 = runs.iter().map(|r| r.flees).sum();
        let flee_success_rate = if total_attempts == 0 {
            0.0
        } else {
            total_flees as f64 / total_attempts as f64
        };

        let mut level_distribution = BTreeMap::new();
        let mut kills_by_monster = BTreeMap::new();
        let mut deaths_by_monster = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
            for (kind, kills) in &run.kills {
                *kills_by_monster.entry(*kind).or_insert(0) += kills;
            }
            if let RunResult::Died { killed_by } = run.result {
                *deaths_by_monster.entry(killed_by).or_insert(0) += 1;
            }
        }

        Self {
            strategy,
            num_runs,
            runs_won,
            runs_died,
            runs_timed_out,
            win_rate,
            avg_final_level: average(&runs, |r| r.final_level as f64),
            avg_final_gold: average(&runs, |r| r.final_gold as f64),
            avg_encounters: average(&runs, |r| r.encounters as f64),
            avg_flee_attempts: average(&runs, |r| r.flee_attempts as f64),
            flee_success_rate,
            level_distribution,
            kills_by_monster,
            deaths_by_monster,
            run_stats: runs,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Single line for `--quiet` output.
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {}/{} won ({:.1}%), avg level {:.2}, avg gold {:.1}",
            self.strategy,
            self.runs_won,
            self.num_runs,
            self.win_rate * 100.0,
            self.avg_final_level,
            self.avg_final_gold
        )
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strategy:          {}", self.strategy)?;
        writeln!(f, "Runs:              {}", self.num_runs)?;
        writeln!(
            f,
            "Won / Died / Cap:  {} / {} / {}",
            self.runs_won, self.runs_died, self.runs_timed_out
        )?;
        writeln!(f, "Win rate:          {:.1}%", self.win_rate * 100.0)?;
        writeln!(f, "Avg final level:   {:.2}", self.avg_final_level)?;
        writeln!(f, "Avg final gold:    {:.1}", self.avg_final_gold)?;
        writeln!(f, "Avg encounters:    {:.1}", self.avg_encounters)?;
        if self.avg_flee_attempts > 0.0 {
            writeln!(
                f,
                "Flee attempts:     {:.1} per run, {:.1}% successful",
                self.avg_flee_attempts,
                self.flee_success_rate * 100.0
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Kills by monster:")?;
        for kind in MonsterKind::ALL {
            let kills = self.kills_by_monster.get(&kind).copied().unwrap_or(0);
            writeln!(f, "  {:<8} {}", kind, kills)?;
        }

        writeln!(f)?;
        writeln!(f, "Deaths by monster:")?;
        for kind in MonsterKind::ALL {
            let deaths = self.deaths_by_monster.get(&kind).copied().unwrap_or(0);
            writeln!(f, "  {:<8} {}", kind, deaths)?;
        }

        writeln!(f)?;
        writeln!(f, "Final level distribution:")?;
        for (level, count) in &self.level_distribution {
            writeln!(f, "  L{:<3} {}", level, count)?;
        }
        Ok(())
    }
}
