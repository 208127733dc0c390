use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use crate::cli::Cli;

use anyhow::{Context, Result};
use game_core::Config;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_DIR: &str = "logs";

/// `logs/<YYYY-mm-dd_HH-MM-SS>.txt` for the current local time
pub fn log_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    PathBuf::from(LOG_DIR).join(format!("{stamp}.txt"))
}

/// Install the global subscriber; returns the log file path when `to_file`
pub fn init(to_file: bool) -> Result<Option<PathBuf>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, path) = if to_file {
        fs::create_dir_all(LOG_DIR).with_context(|| format!("creating {LOG_DIR}/"))?;
        let path = log_path();
        let file = File::create(&path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
        (Some(layer), Some(path))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    Ok(path)
}

/// First lines of every run log: who plays and under which rules
pub fn log_run_parameters(cli: &Cli, config: &Config) {
    info!(system = %cli.paddle1, "paddle 1 system");
    info!(system = %cli.paddle2, "paddle 2 system");
    info!(
        width = config.arena_width,
        height = config.arena_height,
        paddle_speed = config.paddle_accel,
        max_speed = config.paddle_max_speed,
        ball_speed = config.ball_speed,
        max_angle_variation = config.max_angle_variation,
        paddle_size = config.paddle_size,
        score_to_win = ?config.win_score,
        games = cli.games,
        max_ticks = cli.max_ticks,
        seed = cli.seed,
        "run parameters"
    );
}
