use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tankwar_app::control;
use tankwar_app::demo::DemoPilot;
use tankwar_app::game_loop::TICK_DURATION;
use tankwar_app::state::AppState;
use tankwar_core::constants::TICK_RATE;
use tankwar_core::enums::ControllerSetup;
use tankwar_sim::SimConfig;

/// Run the tank arena headless with a scripted pilot at the controls.
#[derive(Debug, Parser)]
#[command(name = "tankwar")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON settings file. Missing fields take their defaults.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// How long to play, in seconds
    #[arg(short, long, default_value = "10")]
    seconds: u64,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Name of an attached joystick; keyboard only when absent
    #[arg(short, long, value_name = "NAME")]
    joystick: Option<String>,

    /// Print the final snapshot as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = build_config(&args)?;
    info!(seed = config.seed, seconds = args.seconds, "starting tankwar");

    let state = AppState::new();
    control::start_game(&state, config).map_err(|e| anyhow!("failed to start game: {e}"))?;

    let mut pilot = DemoPilot::new();
    let total_ticks = args.seconds.saturating_mul(u64::from(TICK_RATE));
    let mut deadline = Instant::now();

    for tick in 0..total_ticks {
        for event in pilot.inputs_for_tick(tick) {
            control::send_input(event, &state).map_err(|e| anyhow!(e))?;
        }

        if tick > 0 && tick % u64::from(TICK_RATE) == 0 {
            report(&state)?;
        }

        deadline += TICK_DURATION;
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }

    control::stop_game(&state).map_err(|e| anyhow!(e))?;

    let snapshot = control::get_snapshot(&state)
        .map_err(|e| anyhow!(e))?
        .context("game loop produced no snapshot")?;
    info!(
        wave = snapshot.wave,
        coins = snapshot.player.coins,
        energy = snapshot.player.energy,
        fuel = snapshot.player.fuel,
        elapsed = ?Duration::from_secs_f64(snapshot.time.elapsed_secs),
        "final state"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?;
        println!("{json}");
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

/// Config file (if any), then command-line overrides, then validation.
fn build_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(name) = &args.joystick {
        config.controller = ControllerSetup::Joystick { name: name.clone() };
    }

    config.validate().map_err(|e| anyhow!("invalid settings: {e}"))?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    SimConfig::from_json(&json).map_err(|e| anyhow!("{}: {e}", path.display()))
}

/// Log a one-line status from the latest snapshot.
fn report(state: &AppState) -> Result<()> {
    if let Some(snapshot) = control::get_snapshot(state).map_err(|e| anyhow!(e))? {
        info!(
            tick = snapshot.time.tick,
            wave = snapshot.wave,
            enemies = snapshot.enemies.len(),
            coins = snapshot.player.coins,
            energy = snapshot.player.energy,
            fuel = snapshot.player.fuel,
            "status"
        );
    }
    Ok(())
}
