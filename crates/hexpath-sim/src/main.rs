//! hexpath-sim: run the crowd simulation and print a summary.
//!
//! Usage:
//!   hexpath-sim                          # default map, random seed
//!   hexpath-sim --seed 7 --ticks 500     # reproducible run
//!   hexpath-sim --astar-config cfg.json  # custom heuristic factors
//!   HEXPATH_LOG=trace hexpath-sim        # log every search

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use hexpath::AstarConfig;
use hexpath_sim::{SimConfig, World, logger};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "hexpath-sim")]
#[command(about = "Simulate actors walking a random hex map")]
struct Args {
    /// Map width in tiles
    #[arg(long, default_value_t = 48)]
    width: i32,

    /// Map height in tiles
    #[arg(long, default_value_t = 24)]
    height: i32,

    /// Number of actors
    #[arg(short = 'a', long, default_value_t = 40)]
    actors: usize,

    /// Fraction of tiles that become walls
    #[arg(long, default_value_t = 0.2, value_parser = parse_density)]
    walls: f64,

    /// Ticks to simulate
    #[arg(short = 't', long, default_value_t = 200)]
    ticks: u64,

    /// RNG seed; random when omitted
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// JSON file with A* tuning (`x_factor`, `y_factor`, `alternate_factors`)
    #[arg(long)]
    astar_config: Option<PathBuf>,

    /// Print the map after the last tick
    #[arg(short = 'r', long)]
    render: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_density(s: &str) -> Result<f64, String> {
    let d: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..1.0).contains(&d) {
        Ok(d)
    } else {
        Err(format!("{s} is not in 0.0..1.0"))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init(args.verbose)?;

    let astar = match &args.astar_config {
        Some(path) => {
            let cfg: AstarConfig = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            cfg.validate()?;
            cfg
        }
        None => AstarConfig::default(),
    };
    let cfg = SimConfig {
        width: args.width,
        height: args.height,
        actors: args.actors,
        wall_density: args.walls,
        astar,
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = World::generate(&cfg, &mut rng)?;

    let started = Instant::now();
    for _ in 0..args.ticks {
        world.tick(&mut rng)?;
    }
    let elapsed = started.elapsed();

    if args.render {
        print!("{}", world.render());
    }
    let s = world.stats();
    println!("seed:      {seed}");
    println!("ticks:     {}", s.ticks);
    println!(
        "searches:  {} ({} found, {} no path, {} re-paths)",
        s.searches, s.found, s.no_path, s.repaths
    );
    println!("moves:     {} ({} waits, {} arrivals)", s.moves, s.waits, s.arrivals);
    println!("expanded:  {} nodes", s.expanded);
    if s.searches > 0 {
        println!(
            "time:      {:.2?} total, {:.2?} per search",
            elapsed,
            elapsed.div_f64(s.searches as f64)
        );
    }
    Ok(())
}
