//! Playbook CLI
//!
//! Non-interactive driver for the passing-play engine: generates seeded
//! random play calls (routes, coverage drags, throw timing) and runs them
//! through the simulation, either one snap at a time or as a whole drive.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use playbook_core::api::{simulate_play, OutcomeKind, PlayRequest, RouteSpec, StrategySpec, ThrowSpec};
use playbook_core::engine::physics_constants::field;
use playbook_core::{DriveState, DriveStatus, PlayOutcome};

#[derive(Parser)]
#[command(name = "playbook")]
#[command(about = "Run scripted passing plays through the simulation engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one play and print the response JSON
    Play {
        /// RNG seed for the generated play call
        #[arg(long, default_value_t = 7)]
        seed: u64,
    },

    /// Run a full drive, one random play call per snap, until the game ends
    Drive {
        /// RNG seed for the generated play calls
        #[arg(long, default_value_t = 7)]
        seed: u64,

        /// Hard cap on snaps, in case the offense keeps converting
        #[arg(long, default_value_t = 40)]
        max_plays: usize,
    },
}

/// Generate one random but plausible play call.
fn random_play(rng: &mut ChaCha8Rng) -> PlayRequest {
    let mut routes = Vec::with_capacity(field::NUM_RECEIVERS);
    let mut spawns = Vec::with_capacity(field::NUM_RECEIVERS);

    for _ in 0..field::NUM_RECEIVERS {
        let spawn_x = rng.gen_range(60.0..field::WIDTH_PX - 60.0);
        let mut waypoints = vec![[spawn_x, field::HEIGHT_PX - 5.0]];
        let mut actions = vec![3u8];

        let mut x = spawn_x;
        let mut y = field::HEIGHT_PX - 5.0;
        let legs = rng.gen_range(1..=3);
        for leg in 0..legs {
            y -= rng.gen_range(60.0..160.0);
            x = (x + rng.gen_range(-80.0..80.0)).clamp(20.0, field::WIDTH_PX - 20.0);
            waypoints.push([x, y]);
            // Intermediate cuts keep the route alive; the last point ends it
            let action = if leg + 1 == legs {
                if rng.gen_bool(0.5) {
                    0
                } else {
                    1
                }
            } else if rng.gen_bool(0.5) {
                2
            } else {
                3
            };
            actions.push(action);
        }

        spawns.push(waypoints[0]);
        routes.push(RouteSpec { waypoints, actions });
    }

    let mut defense = Vec::with_capacity(field::NUM_DEFENDERS);
    for i in 0..field::NUM_DEFENDERS {
        // Mix of man drags on receiver spawns and open-field zone drops
        let press = if i < spawns.len() && rng.gen_bool(0.6) {
            let spawn = spawns[i];
            [spawn[0] + rng.gen_range(-20.0..20.0), spawn[1] - rng.gen_range(0.0..30.0)]
        } else {
            [
                rng.gen_range(50.0..field::WIDTH_PX - 50.0),
                rng.gen_range(250.0..field::HEIGHT_PX - 150.0),
            ]
        };
        let release = [press[0] + rng.gen_range(-40.0..40.0), press[1] - rng.gen_range(10.0..60.0)];
        defense.push(StrategySpec { press, release });
    }

    // Aim at the end of a random route, with some scatter
    let target_route = &routes[rng.gen_range(0..routes.len())];
    let last = target_route.waypoints.last().copied().unwrap_or([field::RELEASE_X, 500.0]);
    let aim = [last[0] + rng.gen_range(-25.0..25.0), last[1] + rng.gen_range(-25.0..25.0)];

    PlayRequest {
        schema_version: playbook_core::api::json_api::SCHEMA_VERSION,
        routes,
        defense,
        throw: ThrowSpec {
            aim,
            hold_seconds: rng.gen_range(0.1..1.2),
            snap_to_throw_seconds: rng.gen_range(2.0..8.0),
        },
        config: None,
    }
}

fn run_play(seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let request = random_play(&mut rng);
    let response = simulate_play(&request).map_err(|e| anyhow!("{e}"))?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn run_drive(seed: u64, max_plays: usize) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut drive = DriveState::new();

    for snap in 1..=max_plays {
        println!("Down: {} -- To Go: {:.0}", drive.down, drive.to_go());
        println!("Yard Line: {:.0}", drive.display_yard_line());

        let request = random_play(&mut rng);
        log::debug!(
            "snap {}: aim at ({:.0}, {:.0}), held {:.2}s",
            snap,
            request.throw.aim[0],
            request.throw.aim[1],
            request.throw.hold_seconds
        );
        let response = simulate_play(&request).map_err(|e| anyhow!("{e}"))?;

        let outcome = match response.outcome {
            OutcomeKind::Catch => {
                println!("Catch! Gain of {:.0}", response.yards_gained);
                PlayOutcome::Catch { yards: response.yards_gained }
            }
            OutcomeKind::Incomplete => {
                println!("No catch");
                PlayOutcome::Incomplete
            }
            OutcomeKind::Interception => PlayOutcome::Interception,
        };

        match drive.apply(outcome) {
            DriveStatus::DriveOn => {}
            DriveStatus::Interception => {
                println!("Interception! You lose! ({} snaps)", snap);
                return Ok(());
            }
            DriveStatus::TurnoverOnDowns => {
                println!("Turnover on Downs! You lose! ({} snaps)", snap);
                return Ok(());
            }
            DriveStatus::Touchdown => {
                println!("Touchdown! YOU WIN!!! ({} snaps)", snap);
                return Ok(());
            }
        }
        println!();
    }

    println!("Drive still alive after {} snaps, calling it a day", max_plays);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed } => run_play(seed),
        Commands::Drive { seed, max_plays } => run_drive(seed, max_plays),
    }
}
