//! Integration test: balance simulator
//!
//! Runs small seeded simulations for each strategy and checks the report
//! adds up.

use slayer::simulator::{run_simulation, simulate_single_run, RunResult, SimConfig, Strategy};
use slayer::MonsterKind;

#[test]
fn test_report_totals_add_up() {
    for strategy in Strategy::ALL {
        let config = SimConfig::quick(42).with_strategy(strategy);
        let report = run_simulation(&config).unwrap();

        assert_eq!(report.num_runs, 100);
        assert_eq!(
            report.runs_won + report.runs_died + report.runs_timed_out,
            report.num_runs
        );
        let levels: u32 = report.level_distribution.values().sum();
        assert_eq!(levels, report.num_runs);
        let deaths: u32 = report.deaths_by_monster.values().sum();
        assert_eq!(deaths, report.runs_died);
    }
}

#[test]
fn test_always_fight_never_flees() {
    let report = run_simulation(&SimConfig::quick(7)).unwrap();
    assert_eq!(report.avg_flee_attempts, 0.0);
    assert_eq!(report.runs_timed_out, 0);
}

#[test]
fn test_avoid_dragons_never_kills_a_dragon() {
    let config = SimConfig::quick(8).with_strategy(Strategy::AvoidDragons);
    let report = run_simulation(&config).unwrap();
    assert_eq!(report.kills_by_monster.get(&MonsterKind::Dragon), None);
    assert!(report.avg_flee_attempts > 0.0);
}

#[test]
fn test_flee_success_rate_is_near_half() {
    let config = SimConfig {
        num_runs: 500,
        ..SimConfig::quick(9).with_strategy(Strategy::AvoidDragons)
    };
    let report = run_simulation(&config).unwrap();
    assert!(
        (0.4..0.6).contains(&report.flee_success_rate),
        "flee success rate {}",
        report.flee_success_rate
    );
}

#[test]
fn test_runs_are_reproducible() {
    let config = SimConfig::quick(10).with_strategy(Strategy::Cautious);
    let a = run_simulation(&config).unwrap();
    let b = run_simulation(&config).unwrap();
    assert_eq!(a.run_stats, b.run_stats);
}

#[test]
fn test_winning_runs_stop_at_level_twenty() {
    let config = SimConfig::quick(11);
    for seed in 0..200 {
        let stats = simulate_single_run(&config, seed).unwrap();
        if stats.result == RunResult::Won {
            assert_eq!(stats.final_level, 20);
            assert!(stats.final_health > 0);
        }
    }
}
