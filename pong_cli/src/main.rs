//! `fuzzy-pong`: headless Pong between crisp, fuzzy or manual paddles.

mod cli;
mod logging;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Match, PaddleController};
use tracing::info;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    if cli.view {
        println!("{}", view::render(&config.fuzzy_params())?);
        return Ok(());
    }

    if let Some(path) = logging::init(cli.log)? {
        info!(path = %path.display(), "logging to file");
    }

    logging::log_run_parameters(&cli, &config);

    let params = config.fuzzy_params();
    let left = PaddleController::build(cli.paddle1, &params).context("building paddle 1")?;
    let right = PaddleController::build(cli.paddle2, &params).context("building paddle 2")?;

    let mut game = Match::new(config, left, right, cli.seed)?;
    let mut wins = [0u32; 2];

    for number in 1..=cli.games {
        if number > 1 {
            game.reset();
        }
        info!(game = number, "game started");

        let outcome = game.play(cli.max_ticks);
        if let Some(winner) = outcome.winner {
            wins[winner as usize] += 1;
        }

        info!(
            game = number,
            score = %outcome.score,
            ticks = outcome.ticks,
            decided = outcome.decided,
            winner = outcome.winner.map(|w| w + 1),
            "game ended"
        );
    }

    info!(paddle1 = wins[0], paddle2 = wins[1], "games won");
    Ok(())
}
