//! Self-play CLI
//!
//! Play engine-vs-engine games, count perft nodes or ask for a best move.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use chess_core::{long_notation, perft_divide, Position};
use classical_engine::Searcher;
use selfplay::{create_engine, play_game, MatchConfig, SelfPlayError, SelfPlayResult};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ML-chess Self-Play");
    println!();
    println!("Usage:");
    println!("  selfplay play [--white E] [--black E] [--depth D] [--plies N]");
    println!("                [--config FILE] [--out FILE] [--seed S]");
    println!("  selfplay perft <depth> [fen]");
    println!("  selfplay best [--depth D] [fen]");
    println!();
    println!("Engines:");
    println!("  classical     - Negamax alpha-beta with piece-square evaluation");
    println!("  random        - Uniformly random legal moves");
    println!();
    println!("Examples:");
    println!("  selfplay play --white classical --black random --depth 3 --out game.json");
    println!("  selfplay perft 4 \"r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -\"");
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> SelfPlayResult<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| SelfPlayError::Usage(format!("{flag} needs a value")))
}

fn number<T: std::str::FromStr>(text: &str, flag: &str) -> SelfPlayResult<T> {
    text.parse()
        .map_err(|_| SelfPlayError::Usage(format!("{flag}: '{text}' is not a valid number")))
}

fn position_arg(fen: Option<&String>) -> SelfPlayResult<Position> {
    match fen {
        Some(f) => Ok(Position::from_fen(f).map_err(chess_core::ChessError::from)?),
        None => Ok(Position::new_game()),
    }
}

fn run_play(args: &[String]) -> SelfPlayResult<()> {
    // A config file is the base; flags on the command line override it.
    let mut config = match args.iter().position(|a| a == "--config") {
        Some(i) => MatchConfig::load(&PathBuf::from(value(args, i, "--config")?))?,
        None => MatchConfig::default(),
    };

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--white" | "-w" => config.white = value(args, i, flag)?.parse()?,
            "--black" | "-b" => config.black = value(args, i, flag)?.parse()?,
            "--depth" | "-d" => config.search.depth = number(value(args, i, flag)?, flag)?,
            "--plies" | "-p" => config.max_plies = number(value(args, i, flag)?, flag)?,
            "--out" | "-o" => config.record_path = Some(PathBuf::from(value(args, i, flag)?)),
            "--seed" => config.seed = Some(number(value(args, i, flag)?, flag)?),
            "--config" => {}
            other => return Err(SelfPlayError::Usage(format!("unknown option '{other}'"))),
        }
        i += 2;
    }

    info!(
        white = %config.white,
        black = %config.black,
        depth = config.search.depth,
        quiescence = config.search.quiescence,
        max_plies = config.max_plies,
        "starting self-play"
    );

    // Give the two random engines different streams when seeded.
    let mut white = create_engine(config.white, config.search, config.seed);
    let mut black = create_engine(config.black, config.search, config.seed.map(|s| s ^ 1));

    let record = play_game(&config, white.as_mut(), black.as_mut())?;
    println!("{}", record.moves.join(" "));
    println!("Result: {} after {} plies", record.outcome, record.plies);

    if let Some(path) = &config.record_path {
        record.save(path)?;
        info!(path = %path.display(), "game record written");
    }
    Ok(())
}

fn run_perft(args: &[String]) -> SelfPlayResult<()> {
    let depth_text = args
        .first()
        .ok_or_else(|| SelfPlayError::Usage("perft requires a depth".to_string()))?;
    let depth: u8 = number(depth_text, "depth")?;
    let mut pos = position_arg(args.get(1))?;

    let start = std::time::Instant::now();
    let divide = perft_divide(&mut pos, depth);
    let total: u64 = divide.iter().map(|(_, n)| n).sum();
    for (mv, n) in &divide {
        println!("{mv}: {n}");
    }
    println!();
    println!("Nodes: {total}");
    println!("Time: {:.3?}", start.elapsed());
    Ok(())
}

fn run_best(args: &[String]) -> SelfPlayResult<()> {
    let mut config = MatchConfig::default().search;
    let mut fen = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--depth" | "-d" => {
                config.depth = number(value(args, i, "--depth")?, "--depth")?;
                i += 1;
            }
            "--no-quiescence" => config.quiescence = false,
            _ => fen = Some(&args[i]),
        }
        i += 1;
    }

    let mut pos = position_arg(fen)?;
    print!("{pos}");

    let mut searcher = Searcher::new(config);
    let (mv, score) = searcher.find_best_move(&mut pos)?;
    println!();
    println!("Best move: {}", long_notation(&mv));
    println!("Score: {score} (side to move)");
    println!("Nodes: {}", searcher.nodes());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let rest = &args[2..];
    let result = match args[1].as_str() {
        "play" => run_play(rest),
        "perft" => run_perft(rest),
        "best" => run_best(rest),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(SelfPlayError::Usage(format!("unknown command '{other}'"))),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            if matches!(e, SelfPlayError::Usage(_)) {
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}
