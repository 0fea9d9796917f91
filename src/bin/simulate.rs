//! Game balance simulator CLI.
//!
//! Plays many games with an automatic player and reports how they went.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 1000 always-fight runs
//!   cargo run --bin simulate -- -n 200 --seed 42      # Reproducible run
//!   cargo run --bin simulate -- --strategy cautious   # Different player
//!   cargo run --bin simulate -- --strategy all --quiet

use slayer::simulator::{run_simulation, SimConfig, Strategy};
use std::env;

struct CliOptions {
    config: SimConfig,
    strategies: Vec<Strategy>,
    json: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    if options.config.verbosity >= 1 && !options.json {
        println!("Slayer balance simulator");
        println!("  Runs:            {}", options.config.num_runs);
        println!(
            "  Max encounters:  {}",
            options.config.max_encounters_per_run
        );
        if let Some(seed) = options.config.seed {
            println!("  Seed:            {}", seed);
        }
        println!();
    }

    let mut reports = Vec::with_capacity(options.strategies.len());
    for strategy in &options.strategies {
        let config = options.config.clone().with_strategy(*strategy);
        match run_simulation(&config) {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("Simulation failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    if options.json {
        let body = if reports.len() == 1 {
            reports[0].to_json()
        } else {
            serde_json::to_string_pretty(&reports)
        };
        match body {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    for report in &reports {
        if options.config.verbosity == 0 {
            println!("{}", report.summary_line());
        } else {
            println!("{}", report);
        }
    }
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut config = SimConfig::default();
    let mut strategies = vec![Strategy::AlwaysFight];
    let mut json = false;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                i += 1;
                config.num_runs = parse_number(args, i, "--runs");
            }
            "--seed" => {
                i += 1;
                config.seed = Some(parse_number(args, i, "--seed"));
            }
            "--max-encounters" => {
                i += 1;
                config.max_encounters_per_run = parse_number(args, i, "--max-encounters");
            }
            "--strategy" => {
                i += 1;
                let name = args.get(i).map(String::as_str).unwrap_or("");
                strategies = if name == "all" {
                    Strategy::ALL.to_vec()
                } else {
                    match name.parse() {
                        Ok(strategy) => vec![strategy],
                        Err(e) => fail(&e),
                    }
                };
            }
            "--json" => json = true,
            "--verbose" | "-v" => config.verbosity = config.verbosity.max(2),
            "-vv" => config.verbosity = 3,
            "--quiet" | "-q" => config.verbosity = 0,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => fail(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    CliOptions {
        config,
        strategies,
        json,
    }
}

fn parse_number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|s| s.parse().ok()) {
        Some(value) => value,
        None => fail(&format!("{} requires a number", flag)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!();
    print_help();
    std::process::exit(1);
}

fn print_help() {
    eprintln!(
        "Slayer balance simulator\n\
         \n\
         Usage: simulate [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 -n, --runs N          Number of games per strategy (default: 1000)\n\
         \x20 --seed N              Base RNG seed; run i uses N + i (default: clock)\n\
         \x20 --strategy NAME       always-fight, avoid-dragons, cautious, or all\n\
         \x20 --max-encounters N    Encounters before a game counts as timed out (default: 10000)\n\
         \x20 --json                Print the report as JSON\n\
         \x20 -v, --verbose         One line per run on stderr\n\
         \x20 -vv                   Every combat event on stderr\n\
         \x20 -q, --quiet           Only the summary line\n\
         \x20 -h, --help            Show this help"
    );
}
