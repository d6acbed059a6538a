//! Command-line probe: FEN in, best move out.
//!
//! ```text
//! bestmove                          # start position, default budget
//! bestmove "<fen>"                  # given position, default budget
//! bestmove "<fen>" <movetime_ms>    # given position, fixed budget
//! ```

use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use woodpusher::search::SearchLimits;
use woodpusher::types::Board;
use woodpusher::EngineHost;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let board = match args.first() {
        Some(fen) => match Board::from_str(fen) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("bad FEN {:?}: {}", fen, e);
                std::process::exit(2);
            }
        },
        None => Board::default(),
    };

    let limits = match args.get(1).map(|ms| ms.parse::<u64>()) {
        Some(Ok(ms)) => SearchLimits::movetime(ms),
        Some(Err(e)) => {
            eprintln!("bad movetime: {}", e);
            std::process::exit(2);
        }
        None => SearchLimits::default(),
    };

    let mut engine = EngineHost::with_limits(limits);
    match engine.find_best_move(&board) {
        Ok(Some(m)) => println!("{}", m),
        Ok(None) => println!("(no legal moves)"),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
