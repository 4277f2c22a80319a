//! Strictly MNK - terminal front end
//!
//! Plays, self-plays and analyzes m,n,k-game positions.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{BoardArgs, Cli, Command};
use std::io::{BufRead, Write};
use strictly_mnk::{
    Board, Match, MatchConfig, MatchError, Minimax, Move, Occupant, RoundStatus,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Selfplay { dims } => run_selfplay(dims),
        Command::Analyze { moves, dims } => run_analyze(&moves, dims),
    }
}

/// Parses "x,y" or "x y" into a coordinate pair.
fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((x, y))
}

/// Interactive rounds on stdin/stdout.
#[instrument]
fn run_play(config: Option<std::path::PathBuf>) -> Result<()> {
    let config = match config {
        Some(path) => MatchConfig::from_file(&path)?,
        None => MatchConfig::default(),
    };
    let mut game = Match::new(&config)?;
    info!("Starting interactive match");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\nRound {}\n{}", game.round(), game.board());

        while game.status() == RoundStatus::InProgress {
            let seat = game.current_seat().clone();
            if game.is_computer_turn() {
                game.play_computer_turn()?;
                println!("\n{} ({}) played:\n{}", seat.name(), seat.occupant(), game.board());
                continue;
            }

            print!("{} ({}) move as x y: ", seat.name(), seat.occupant());
            std::io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;
            let Some((x, y)) = parse_coord(&line) else {
                println!("Could not read '{}', expected two numbers", line.trim());
                continue;
            };
            match game.play(x, y) {
                Ok(_) => println!("\n{}", game.board()),
                Err(MatchError::Play(e)) => println!("{}", e),
                Err(e) => return Err(e.into()),
            }
        }

        match game.status() {
            RoundStatus::Won(winner) => println!("\n{} wins!", winner),
            RoundStatus::Draw => println!("\nNo one wins."),
            RoundStatus::InProgress => {}
        }
        let scores = game.scores();
        for seat in game.seats() {
            println!(
                "  {} ({}): {}",
                seat.name(),
                seat.occupant(),
                scores.wins_for(*seat.occupant())
            );
        }
        println!("  draws: {}", scores.draws());

        print!("Play again? [y/N] ");
        std::io::stdout().flush()?;
        let again = match lines.next() {
            Some(answer) => answer?.trim().eq_ignore_ascii_case("y"),
            None => false,
        };
        if !again {
            return Ok(());
        }
        game.next_round();
    }
}

/// Minimax against minimax, Cross first.
#[instrument]
fn run_selfplay(dims: BoardArgs) -> Result<()> {
    let (board, record, winner) = selfplay(dims)?;
    let mut replay = Board::new(board.width(), board.height(), board.win_length());
    for (occupant, at) in &record {
        replay.play(*occupant, at.x, at.y)?;
        println!("{} plays {}\n{}\n", occupant, at, replay);
    }
    match winner {
        Some(winner) => println!("{} wins.", winner),
        None => println!("Draw."),
    }
    Ok(())
}

/// Plays both engines against each other until the board is decided.
///
/// Returns the final board, the moves in order and the winner, if any.
fn selfplay(dims: BoardArgs) -> Result<(Board, Vec<(Occupant, Move)>, Option<Occupant>)> {
    let mut board = Board::new(dims.width, dims.height, dims.win_length);
    let mut sides = [
        Minimax::new(Occupant::Cross, Occupant::Circle),
        Minimax::new(Occupant::Circle, Occupant::Cross),
    ];
    let mut record = Vec::new();

    for turn in 0.. {
        let engine = &mut sides[turn % 2];
        let Some(at) = engine.choose_best_move(&board) else {
            bail!("no move available on an undecided board");
        };
        board.play(engine.maximizing(), at.x, at.y)?;
        debug!(nodes = engine.nodes_visited(), "Search statistics");
        record.push((engine.maximizing(), at));

        if let Some(winner) = board.winner() {
            return Ok((board, record, Some(winner)));
        }
        if board.is_draw() {
            break;
        }
    }
    Ok((board, record, None))
}

/// Replays `moves` and prints a JSON report of the resulting position.
#[instrument]
fn run_analyze(moves: &str, dims: BoardArgs) -> Result<()> {
    let report = analyze(moves, dims)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Replays `moves` with Cross first and reports the position.
///
/// Fails if a move is malformed, rejected by the board, or played after the
/// game was already decided.
fn analyze(moves: &str, dims: BoardArgs) -> Result<serde_json::Value> {
    let mut board = Board::new(dims.width, dims.height, dims.win_length);
    let sides = [Occupant::Cross, Occupant::Circle];
    let mut played = 0;

    for token in moves.split_whitespace() {
        if board.winner().is_some() || board.is_draw() {
            bail!("move {} ('{}') played after the game ended", played + 1, token);
        }
        let (x, y) = parse_coord(token).with_context(|| format!("bad move '{}'", token))?;
        board
            .play(sides[played % 2], x, y)
            .with_context(|| format!("move {} rejected", played + 1))?;
        played += 1;
    }

    let status = match board.winner() {
        Some(winner) => RoundStatus::Won(winner),
        None if board.is_draw() => RoundStatus::Draw,
        None => RoundStatus::InProgress,
    };
    let (to_move, best_move) = match status {
        RoundStatus::InProgress => {
            let to_move = sides[played % 2];
            let best = Minimax::new(to_move, sides[(played + 1) % 2]).choose_best_move(&board);
            (Some(to_move), best)
        }
        _ => (None, None),
    };

    let rows: Vec<String> = board.to_string().lines().map(str::to_string).collect();
    Ok(serde_json::json!({
        "width": board.width(),
        "height": board.height(),
        "win_length": board.win_length(),
        "rows": rows,
        "status": status,
        "winner": board.winner(),
        "draw": status == RoundStatus::Draw,
        "to_move": to_move,
        "best_move": best_move,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dims(width: usize, height: usize, win_length: usize) -> BoardArgs {
        BoardArgs {
            width,
            height,
            win_length,
        }
    }

    #[test]
    fn test_parse_coord_accepts_comma_and_space() {
        assert_eq!(parse_coord("1,2"), Some((1, 2)));
        assert_eq!(parse_coord(" 0 2 \n"), Some((0, 2)));
    }

    #[test]
    fn test_parse_coord_rejects_garbage() {
        assert_eq!(parse_coord("1"), None);
        assert_eq!(parse_coord("a,b"), None);
        assert_eq!(parse_coord("1,2,3"), None);
    }

    #[test]
    fn test_analyze_open_position_suggests_winning_move() {
        // X X .
        // O O .
        // . . .
        let report = analyze("0,0 0,1 1,0 1,1", dims(3, 3, 3)).unwrap();

        assert_eq!(report["to_move"], json!("cross"));
        assert_eq!(report["best_move"], json!({ "x": 2, "y": 0 }));
        assert_eq!(report["winner"], json!(null));
        assert_eq!(report["draw"], json!(false));
        assert_eq!(report["status"], json!("InProgress"));
    }

    #[test]
    fn test_analyze_empty_board_reports_first_move() {
        let report = analyze("", dims(3, 3, 3)).unwrap();

        assert_eq!(report["rows"], json!([". . .", ". . .", ". . ."]));
        assert_eq!(report["to_move"], json!("cross"));
        assert_eq!(report["best_move"], json!({ "x": 0, "y": 0 }));
    }

    #[test]
    fn test_analyze_finished_game_has_no_best_move() {
        let report = analyze("0,0 1,0 0,1 1,1 0,2", dims(3, 3, 3)).unwrap();

        assert_eq!(report["winner"], json!("cross"));
        assert_eq!(report["status"], json!({ "Won": "cross" }));
        assert_eq!(report["best_move"], json!(null));
        assert_eq!(report["to_move"], json!(null));
        assert_eq!(report["rows"], json!(["X O .", "X O .", "X . ."]));
    }

    #[test]
    fn test_analyze_rejects_moves_after_win() {
        let err = analyze("0,0 1,0 0,1 1,1 0,2 2,2 2,1", dims(3, 3, 3)).unwrap_err();

        assert!(err.to_string().contains("after the game ended"), "{err}");
        assert!(err.to_string().contains("move 6"), "{err}");
    }

    #[test]
    fn test_analyze_rejects_occupied_cell() {
        let err = analyze("1,1 1,1", dims(3, 3, 3)).unwrap_err();
        assert!(err.to_string().contains("move 2 rejected"), "{err}");
    }

    #[test]
    fn test_selfplay_on_three_by_three_is_a_draw() {
        let (board, record, winner) = selfplay(dims(3, 3, 3)).unwrap();

        assert_eq!(winner, None);
        assert!(board.is_draw());
        assert_eq!(record.len(), 9);
        assert_eq!(record[0], (Occupant::Cross, Move::new(0, 0)));
        assert_eq!(record[1], (Occupant::Circle, Move::new(1, 1)));
    }
}
