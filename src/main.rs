//! Ninuki self-play demo
//!
//! Usage: `ninuki [CONFIG.toml]`. Black uses the configured engine, White
//! the other one. Set `RUST_LOG=debug` to see per-pass search logs.

use std::process::ExitCode;

use ninuki::{format_point, Board, Engine, EngineConfig, EngineKind, GameStatus, Player, Stone};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn load_config() -> Result<EngineConfig, ninuki::ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(path),
        None => Ok(EngineConfig::default()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut black = Engine::new(&config);
    let mut white = Engine::new(&config);
    white.set_kind(match config.engine {
        EngineKind::Mcts => EngineKind::AlphaBeta,
        EngineKind::AlphaBeta => EngineKind::Mcts,
    });

    let mut board = Board::new(config.board_size);
    info!(black = ?black.kind(), white = ?white.kind(), size = config.board_size, "starting self-play");

    while board.terminal_status() == GameStatus::Ongoing {
        let color = board.current_player();
        let engine = if color == Stone::Black { &mut black } else { &mut white };
        let mv = engine.choose_move(&board, color);
        if !board.play(mv, color) {
            error!(mv = ?mv, "engine returned an illegal move");
            return ExitCode::FAILURE;
        }
        println!("{} {}", color.to_char(), format_point(mv, board.size()));
        println!("{board}\n");
    }

    match board.terminal_status() {
        GameStatus::Won(color) => println!("{} wins", color.to_char()),
        GameStatus::Draw | GameStatus::Ongoing => println!("draw"),
    }
    ExitCode::SUCCESS
}
