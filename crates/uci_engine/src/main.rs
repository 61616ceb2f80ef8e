//! UCI front end for the minimax engine.
//!
//! Speaks the subset of UCI a GUI needs to play: `uci`, `isready`,
//! `setoption`, `ucinewgame`, `position`, `go`, `quit`. Logs go to stderr
//! so protocol output on stdout stays clean.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use chess_board::{move_to_uci, set_position_from_uci, Position};
use minimax_engine::{ChessEngine, EngineConfig, EvalMode};
use tracing::warn;

/// Optional configuration file, read from the working directory.
const CONFIG_FILE: &str = "engine.toml";

fn load_config() -> EngineConfig {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        match EngineConfig::from_toml_file(path) {
            Ok(config) => return config,
            Err(err) => warn!("ignoring {CONFIG_FILE}: {err}"),
        }
    }
    EngineConfig::default()
}

fn mode_name(mode: EvalMode) -> &'static str {
    match mode {
        EvalMode::Material => "material",
        EvalMode::Network => "network",
    }
}

fn handle_setoption(parts: &[&str], engine: &mut ChessEngine) {
    // Example: setoption name Depth value 4
    let name = parts
        .iter()
        .position(|&p| p == "name")
        .and_then(|i| parts.get(i + 1));
    let value = parts
        .iter()
        .position(|&p| p == "value")
        .and_then(|i| parts.get(i + 1));
    let (Some(&name), Some(&value)) = (name, value) else {
        return;
    };

    match name {
        "Depth" => {
            if let Ok(depth) = value.parse::<u8>() {
                engine.set_depth(depth.clamp(1, 6));
            }
        }
        "EvaluationMode" => {
            let mode = match value.to_lowercase().as_str() {
                "material" => Some(EvalMode::Material),
                "network" => Some(EvalMode::Network),
                _ => None,
            };
            let Some(mode) = mode else {
                warn!("unknown EvaluationMode {value:?}");
                return;
            };
            let mut config = engine.config().clone();
            config.evaluation = mode;
            // Rebuild with the new evaluator; keep the old engine if the
            // new one cannot be constructed (e.g. weights missing).
            match ChessEngine::new(config) {
                Ok(rebuilt) => *engine = rebuilt,
                Err(err) => warn!("keeping current evaluator: {err}"),
            }
        }
        _ => {}
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut engine = ChessEngine::new(load_config())?;
    let mut pos = Position::startpos();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                writeln!(stdout, "id name Minimax-RS {}", env!("CARGO_PKG_VERSION"))?;
                writeln!(stdout, "id author Minimax-RS contributors")?;
                writeln!(
                    stdout,
                    "option name EvaluationMode type string default {}",
                    mode_name(engine.config().evaluation)
                )?;
                writeln!(
                    stdout,
                    "option name Depth type spin default {} min 1 max 6",
                    engine.config().depth
                )?;
                writeln!(stdout, "uciok")?;
                stdout.flush()?;
            }
            "isready" => {
                writeln!(stdout, "readyok")?;
                stdout.flush()?;
            }
            "setoption" => handle_setoption(&parts, &mut engine),
            "ucinewgame" => pos = Position::startpos(),
            "position" => set_position_from_uci(&mut pos, &parts[1..]),
            "go" => {
                let result = engine.best_move(&pos);
                match result.best_move {
                    Some(mv) => writeln!(stdout, "bestmove {}", move_to_uci(&pos, mv))?,
                    None => writeln!(stdout, "bestmove 0000")?,
                }
                stdout.flush()?;
            }
            "quit" => break,
            _ => {
                // Ignore unknown commands, as UCI requires.
            }
        }
    }

    Ok(())
}
