//! Terminal front end for the scacco rules engine.
//!
//! Reads coordinate pairs from stdin ("e2 e4"), applies them through
//! `scacco-core`, and redraws the board. All chess rules live in the core;
//! this binary only parses input and renders state.

use std::io::{self, BufRead};

use anyhow::Result;
use tracing::info;

use scacco_core::{Game, GameState, Square};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("scacco starting");

    let mut game = Game::new();
    render(&game, false);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" {
            break;
        }

        let Some((from, to)) = parse_move(trimmed) else {
            println!("enter moves as two squares, e.g. \"e2 e4\" (or \"quit\")");
            continue;
        };

        match game.apply_move(from, to) {
            Ok(outcome) => {
                game = outcome.game;
                render(&game, outcome.check);
            }
            Err(err) => println!("illegal move: {err}"),
        }

        if matches!(game.state(), GameState::Checkmate { .. }) {
            break;
        }
    }

    info!("scacco shutting down");
    Ok(())
}

/// Parse a move as two whitespace-separated square coordinates.
fn parse_move(text: &str) -> Option<(Square, Square)> {
    let mut parts = text.split_whitespace();
    let from = parse_square(parts.next()?)?;
    let to = parse_square(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((from, to))
}

/// Parse coordinate text like "e2" into a square. Column letters run
/// `a`-`h`; ranks are counted 1-8 from White's side, so rank 1 is row 7.
fn parse_square(text: &str) -> Option<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col = bytes[0].checked_sub(b'a')?;
    let rank = bytes[1].checked_sub(b'1')?;
    if rank > 7 {
        return None;
    }
    Square::new(7 - rank, col)
}

fn render(game: &Game, check: bool) {
    println!("{}", game.position().board());
    match game.state() {
        GameState::Checkmate { winner } => println!("Checkmate! {winner} wins!"),
        GameState::ToMove(side) => {
            if check {
                println!("Check!");
            }
            println!("{side} to move");
        }
    }
}
