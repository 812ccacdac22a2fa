//! "Perft" move-tree test: count the number of leaves at a given depth.
//! Exercises every direction of the capture scan from real positions.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Game, Status};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Game::default(), depth)
}

fn leaves_below(game: Game, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();
    if moves.is_empty() {
        if let Status::Finished(_) = game.status() {
            return 1;
        }

        let mut passed = game;
        return match passed.pass() {
            Ok(()) => leaves_below(passed, depth - 1),
            Err(_) => 1,
        };
    }

    moves
        .map(|mv| {
            let mut child = game;
            let (row, column) = mv.to_coords();
            match child.play(row, column) {
                Ok(_) => leaves_below(child, depth - 1),
                Err(_) => 0,
            }
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}
