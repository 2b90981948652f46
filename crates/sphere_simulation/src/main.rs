//! Headless прогон симуляции
//!
//! Загружает конфиг, спавнит сцену и крутит N тиков. Без `--autopilot`
//! input пустой (игрок стоит, враги-преследователи идут к нему).

use std::path::PathBuf;
use std::process::ExitCode;

use bevy::prelude::*;
use clap::Parser;
use sphere_simulation::{
    build_render_frame, create_headless_app, log_error, log_info, run_tick, set_log_level,
    spawn_scene, Autopilot, EnemyRoster, LogLevel, PlayerDamaged, SimulationConfig,
};

/// Headless top-down симуляция (fixed tick)
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON конфиг (tuning + сцена); без него стартовая карта
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Сколько тиков прогнать
    #[arg(short, long, default_value_t = 1000)]
    ticks: u32,

    /// Seed для DeterministicRng
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Случайный input из seeded RNG
    #[arg(short, long)]
    autopilot: bool,

    /// Debug логи
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => SimulationConfig::load(path),
        None => Ok(SimulationConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut app = create_headless_app(args.seed);
    set_log_level(if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    });

    spawn_scene(app.world_mut(), &config);
    if args.autopilot {
        app.insert_resource(Autopilot::default());
    }

    log_info(&format!(
        "Starting headless simulation (seed: {}, ticks: {})",
        args.seed, args.ticks
    ));

    let mut hits = 0;
    for tick in 1..=args.ticks {
        run_tick(&mut app);
        // После run_tick в Events только события этого тика
        hits += app.world().resource::<Events<PlayerDamaged>>().len();

        if tick % 100 == 0 {
            let enemies = app.world().resource::<EnemyRoster>().len();
            log_info(&format!(
                "Tick {}: {} enemies left, player hit {} times",
                tick, enemies, hits
            ));
        }
    }

    let frame = build_render_frame(app.world_mut());
    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            log_error(&format!("Failed to serialize final frame: {}", err));
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
