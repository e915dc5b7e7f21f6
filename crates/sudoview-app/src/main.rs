//! Sudoview desktop application using egui/eframe.
//!
//! This is the main entry point: it fetches the initial board from the
//! puzzle service (fatal on failure) and opens the fixed-size game window.

use std::process;

use clap::{Parser, ValueEnum};
use eframe::egui::{self, Vec2};
use sudoview_client::{DEFAULT_ENDPOINT, Difficulty, PuzzleClient};

use crate::app::SudoviewApp;

mod app;
mod ui;

const WINDOW_SIDE: f32 = 642.0;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Random,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
            DifficultyArg::Random => Self::Random,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty requested from the puzzle service.
    #[arg(long, value_name = "LEVEL", default_value = "random")]
    difficulty: DifficultyArg,

    /// Puzzle service URL.
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let client = PuzzleClient::new(args.endpoint);
    let givens = match client.fetch(args.difficulty.into()) {
        Ok(grid) => grid,
        Err(err) => {
            log::error!("failed to fetch a puzzle: {err}");
            process::exit(1);
        }
    };
    log::info!("fetched a puzzle with {} givens", givens.filled_count());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_resizable(false)
            .with_inner_size(Vec2::splat(WINDOW_SIDE)),
        ..Default::default()
    };
    eframe::run_native(
        "Sudoview",
        options,
        Box::new(move |cc| Ok(Box::new(SudoviewApp::new(cc, &givens)))),
    )
}
