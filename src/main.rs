//! Caro Move Engine CLI
//!
//! A command-line driver for exercising the move engine. Walks through
//! the shipped board variants with a handful of scenarios and plays one
//! full self-play game.

use std::time::Duration;

use caro::{Board, Difficulty, GameSession, Mark, MoveEngine, Phase, Pos};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("===========================================");
    println!("        Caro Move Engine v0.1.0");
    println!("===========================================\n");

    let mut engine = MoveEngine::new();

    println!("--- Scenario 1: Opening Move ---");
    opening_move(&mut engine);

    println!("\n--- Scenario 2: Complete Own Win ---");
    complete_own_win(&mut engine);

    println!("\n--- Scenario 3: Block Opponent Win ---");
    block_opponent(&mut engine);

    println!("\n--- Scenario 4: Easy Tier Variance ---");
    easy_tier_variance();

    println!("\n--- Scenario 5: Self-Play Session ---");
    self_play();

    println!("\n===========================================");
    println!("          All Scenarios Completed");
    println!("===========================================");
}

fn opening_move(engine: &mut MoveEngine) {
    for (name, board) in [
        ("15x15 five-in-a-row", Board::gomoku()),
        ("10x10 four-in-a-row", Board::caro_four()),
        ("3x3 tic-tac-toe", Board::tic_tac_toe()),
    ] {
        let pos = engine
            .best_move(&board, Mark::X, Difficulty::Hard)
            .expect("empty board always has a move");
        let center = board.center();
        println!(
            "  {name}: plays ({}, {}) — expected center ({}, {}) [{}]",
            pos.row,
            pos.col,
            center.row,
            center.col,
            if pos == center { "PASS" } else { "FAIL" }
        );
    }
}

fn complete_own_win(engine: &mut MoveEngine) {
    let mut board = Board::gomoku();
    for col in 0..4 {
        board.place(Pos::new(9, col), Mark::X).unwrap();
    }

    let pos = engine.best_move(&board, Mark::X, Difficulty::Hard).unwrap();
    println!("  Position: X has four at row 9, cols 0-3");
    println!(
        "  X plays ({}, {}) — expected (9, 4) [{}]",
        pos.row,
        pos.col,
        if pos == Pos::new(9, 4) { "PASS" } else { "FAIL" }
    );
}

fn block_opponent(engine: &mut MoveEngine) {
    let mut board = Board::gomoku();
    for col in 0..4 {
        board.place(Pos::new(9, col), Mark::X).unwrap();
    }
    board.place(Pos::new(10, 5), Mark::O).unwrap();

    let pos = engine.best_move(&board, Mark::O, Difficulty::Hard).unwrap();
    println!("  Position: X has four at row 9, cols 0-3; O to move");
    println!(
        "  O plays ({}, {}) — expected (9, 4) [{}]",
        pos.row,
        pos.col,
        if pos == Pos::new(9, 4) { "PASS" } else { "FAIL" }
    );
}

fn easy_tier_variance() {
    let mut board = Board::caro_four();
    board.place(Pos::new(5, 5), Mark::X).unwrap();
    board.place(Pos::new(4, 4), Mark::O).unwrap();

    let mut engine = MoveEngine::with_seed(0xCA40);
    let mut picks = std::collections::HashMap::new();
    let rounds = 100;
    for _ in 0..rounds {
        let pos = engine.best_move(&board, Mark::O, Difficulty::Easy).unwrap();
        *picks.entry(pos).or_insert(0u32) += 1;
    }

    println!("  {rounds} easy-tier picks landed on {} distinct cells:", picks.len());
    let mut entries: Vec<_> = picks.into_iter().collect();
    entries.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
    for (pos, n) in entries {
        println!("    ({}, {}) x{}", pos.row, pos.col, n);
    }
}

fn self_play() {
    let board = Board::tic_tac_toe();
    let mut session =
        GameSession::new(board, Mark::X, Difficulty::Hard).with_ai_delay(Duration::ZERO);
    let mut engine = MoveEngine::new();

    loop {
        match session.phase().clone() {
            Phase::AwaitingHuman => {
                let pos = session.hint(&mut engine).expect("hint on open board");
                session.place_human(pos).expect("hinted cell is legal");
            }
            Phase::AwaitingAi => {
                session.poll_ai(&mut engine);
            }
            Phase::Won { winner, line } => {
                println!("  Winner: {winner:?} along {line:?}");
                break;
            }
            Phase::Draw => {
                println!("  Draw — board full with no run");
                break;
            }
        }
    }
    print_board(session.board());
}

fn print_board(board: &Board) {
    for row in 0..board.rows() {
        print!("  ");
        for col in 0..board.cols() {
            let ch = match board.get(Pos::new(row, col)) {
                Mark::X => " X",
                Mark::O => " O",
                Mark::Empty => " .",
            };
            print!("{ch}");
        }
        println!();
    }
}
