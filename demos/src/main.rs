//! Run a finder on a scenario and print the route over the map.
//!
//! Run: cargo run --bin parkpath -- scenario.json
//!      cargo run --bin parkpath -- --random 30x12 [ALGORITHM] [SEED]
//!
//! Set `RUST_LOG=debug` to see search diagnostics.

use std::str::FromStr;

use parkpath_demos::{DemoError, Scenario, parse_size, random_scenario, render};
use parkpath_finders::{Algorithm, FinderOptions};
use rand::{RngExt, SeedableRng};

const USAGE: &str = "usage: parkpath SCENARIO.json | parkpath --random WxH [ALGORITHM] [SEED]";
const RANDOM_DENSITY: f64 = 0.25;

fn load(args: &[String]) -> Result<Scenario, DemoError> {
    match args {
        [flag, size, rest @ ..] if flag == "--random" => {
            let (w, h) = parse_size(size)?;
            let algorithm = match rest.first() {
                Some(name) => Algorithm::from_str(name)?,
                None => Algorithm::AStar,
            };
            let seed = match rest.get(1) {
                Some(s) => s
                    .parse()
                    .map_err(|_| DemoError::Usage(format!("bad seed {s:?}")))?,
                None => rand::rng().random_range(0..u64::MAX),
            };
            log::info!("random map {w}x{h}, seed {seed}");
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let options = FinderOptions::default()
                .with_allow_diagonal(true)
                .with_dont_cross_corners(true)
                .with_time_limit(5.0);
            random_scenario(&mut rng, w, h, RANDOM_DENSITY, algorithm, options)
        }
        [path] => Scenario::from_json(&std::fs::read_to_string(path)?),
        _ => Err(DemoError::Usage(USAGE.to_string())),
    }
}

fn run(args: &[String]) -> Result<(), DemoError> {
    let scenario = load(args)?;
    let outcome = scenario.run()?;
    println!("{}", render(&outcome.grid, &outcome.path));
    if outcome.path.is_empty() {
        println!(
            "{}: no route from {} to {}",
            scenario.algorithm, scenario.start, scenario.goal
        );
    } else {
        println!(
            "{}: {} steps, cost {:.3}, {} cells explored",
            scenario.algorithm,
            outcome.path.len() - 1,
            outcome.cost,
            outcome.explored
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
