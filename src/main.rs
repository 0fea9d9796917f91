use slayer::build_info;
use slayer::console::Console;
use slayer::{Game, GameRng, Player};
use std::io;

struct Args {
    seed: Option<u64>,
}

fn print_usage() {
    println!("Slayer - fight monsters until you reach level 20 or die trying\n");
    println!("Usage: slayer [options]\n");
    println!("Options:");
    println!("  --seed N       Play a reproducible game");
    println!("  --version, -v  Show version information");
    println!("  --help, -h     Show this help message");
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args { seed: None };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(seed) => parsed.seed = Some(seed),
                    None => {
                        eprintln!("--seed requires a number");
                        std::process::exit(1);
                    }
                }
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'slayer --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }
    parsed
}

fn play(seed: Option<u64>) -> io::Result<()> {
    // Seeded once, before anything else draws from it
    let rng = seed.map_or_else(GameRng::from_clock, GameRng::from_seed);

    let mut console = Console::stdio();
    let name = console.ask_name()?;
    let mut game = Game::new(Player::new(name), rng);

    let summary = game.run(&mut console)?;
    console.report(&summary)
}

fn main() -> io::Result<()> {
    let args = parse_args();

    match play(args.seed) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            eprintln!("\nInput closed. Goodbye.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
