//! Simulation configuration.

use super::strategy::Strategy;
use crate::core::constants::{SIM_DEFAULT_MAX_ENCOUNTERS, SIM_DEFAULT_RUNS};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = clock seeded)
    pub seed: Option<u64>,

    /// How the automatic player decides between run and fight
    pub strategy: Strategy,

    /// Encounters per game before the run counts as timed out
    pub max_encounters_per_run: u64,

    /// Log verbosity (0 = summary line only, 1 = full report, 2 = per run, 3 = every event)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: SIM_DEFAULT_RUNS,
            seed: None,
            strategy: Strategy::AlwaysFight,
            max_encounters_per_run: SIM_DEFAULT_MAX_ENCOUNTERS,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small reproducible config for quick checks
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 100,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Same runs under a different strategy
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.num_runs, 1000);
        assert_eq!(config.seed, None);
        assert_eq!(config.strategy, Strategy::AlwaysFight);
        assert_eq!(config.verbosity, 1);
    }

    #[test]
    fn test_quick_is_seeded_and_silent() {
        let config = SimConfig::quick(9).with_strategy(Strategy::Cautious);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.verbosity, 0);
        assert_eq!(config.strategy, Strategy::Cautious);
        assert_eq!(config.num_runs, 100);
    }
}
