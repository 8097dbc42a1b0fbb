//! Flip Dot entry point
//!
//! Runs the game headless: simulated frame clock, recorded drawing, scripted
//! menu input and an optional autopilot. Prints the run summary as JSON.

use std::path::PathBuf;

use clap::Parser;

use flip_dot::platform::{HeadlessPlatform, Platform};
use flip_dot::sim::Trajectory;
use flip_dot::{Game, Settings};

#[derive(Parser)]
#[command(name = "flip-dot")]
#[command(about = "Headless runner for the Flip Dot simulation", long_about = None)]
struct Cli {
    /// Settings file (JSON); defaults are used when omitted or unreadable
    #[arg(short, long)]
    settings: Option<PathBuf>,
    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many frames
    #[arg(short, long, default_value = "3600")]
    frames: u64,
    /// Restarts to take from the game-over menu before quitting
    #[arg(short, long, default_value = "0")]
    restarts: u32,
    /// Disable the autopilot (the dot then never moves)
    #[arg(long)]
    no_autopilot: bool,
    /// Use the frame-rate independent integrator with this reference frame (ms)
    #[arg(long)]
    fixed_step: Option<u64>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if let Some(reference_frame_ms) = cli.fixed_step {
        settings.trajectory = Trajectory::FixedStep { reference_frame_ms };
    }
    settings.frame_limit = Some(cli.frames);

    let mut platform = HeadlessPlatform::new(settings.frame_ms)
        .with_autopilot(!cli.no_autopilot)
        .with_restarts(cli.restarts);

    let mut game = Game::new(settings, platform.now_ms());
    let Some(summary) = game.run(&mut platform) else {
        std::process::exit(1);
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Cannot serialize run summary: {}", e),
    }
}
