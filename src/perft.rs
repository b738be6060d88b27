//! Move path enumeration for validating the move generator

use rayon::prelude::*;

use crate::{board::Board, moves::Move};

/// Counts the move sequences of length `depth` from `board`, with the side to move
/// playing first. Sequences that end before `depth` because a side runs out of
/// moves are not counted.
pub fn perft(board: &mut Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves: Vec<Move> = board.legal_moves_for_turn().collect();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| perft(&mut board.scoped(mv), depth - 1))
        .sum()
}

/// Like [`perft`], but searches the subtree of each root move in parallel
///
/// `on_root_done` is called once for every root move whose subtree has been counted.
pub fn perft_parallel<F>(board: &Board, depth: usize, on_root_done: F) -> u64
where
    F: Fn(Move, u64) + Sync,
{
    if depth <= 1 {
        return perft(&mut board.clone(), depth);
    }
    let moves: Vec<Move> = board.legal_moves_for_turn().collect();
    moves
        .par_iter()
        .map(|&mv| {
            let mut next = board.clone();
            next.apply_move(mv);
            let count = perft(&mut next, depth - 1);
            on_root_done(mv, count);
            count
        })
        .sum()
}
