//! Gomoku GUI
//!
//! Play five-in-a-row against the heuristic engine.

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::ui::GomokuApp;
use gomoku::{EngineConfig, Stone, TieBreak, BOARD_SIZE};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieBreakArg {
    /// Each later tie replaces the current pick on a coin flip
    CoinFlip,
    /// Every tied cell equally likely
    Uniform,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::CoinFlip => TieBreak::CoinFlip,
            TieBreakArg::Uniform => TieBreak::Uniform,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Five-in-a-row against a one-ply heuristic engine")]
struct Args {
    /// Side length of the board
    #[arg(long, default_value_t = BOARD_SIZE)]
    size: usize,

    /// Color the engine plays; Black moves first
    #[arg(long, value_enum, default_value = "white")]
    ai: Side,

    /// Seed for tie-breaking, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "coin-flip")]
    tie_break: TieBreakArg,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = EngineConfig::new(args.size, args.ai.into()).with_tie_break(args.tie_break.into());
    config.seed = args.seed;
    config.validate()?;
    info!(?config, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)?))),
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}
