//! A depth-limited minimax agent for Amazons

use log::debug;

use crate::{board::Board, moves::Move, piece::Piece, square::Square, QUEENS};

/// The magnitude of a won position, positive for White and negative for Black.
/// Larger than any difference in mobility that can occur on the board.
pub const WINNING_VALUE: i32 = 1000;

/// A bound beyond any position value
pub const INFINITY: i32 = i32::MAX;

/// The number of plies played between each increase in search depth
pub const DEPTH_PERIOD: usize = 18;

/// The deepest search the agent will perform
pub const MAX_DEPTH: usize = 5;

/// Returns the search depth for a game in which `num_moves` plies have been played
pub fn max_depth(num_moves: usize) -> usize {
    (num_moves / DEPTH_PERIOD + 1).min(MAX_DEPTH)
}

/// Returns the static value of `board`
///
/// A won position scores [`WINNING_VALUE`] for the winner. Otherwise the value is
/// White's mobility minus Black's, see [`counted_queens`] for which queens count.
pub fn static_score(board: &Board) -> i32 {
    match board.winner() {
        Some(Piece::White) => WINNING_VALUE,
        Some(Piece::Black) => -WINNING_VALUE,
        _ => {
            let (white, black) = counted_queens(board);
            mobility(board, &white) - mobility(board, &black)
        }
    }
}

/// The queens taken into account by [`static_score`]
///
/// A single pass over the squares in index order collects the first [`QUEENS`]
/// white queens, then carries on from the square after the last of them to collect
/// up to [`QUEENS`] black queens. Black queens on earlier squares are not seen.
///
/// NOTE: the counts rely on neither side ever gaining or losing a queen.
pub fn counted_queens(board: &Board) -> (Vec<Square>, Vec<Square>) {
    let mut squares = Square::all();
    let white = squares
        .by_ref()
        .filter(|&square| board.get(square) == Piece::White)
        .take(QUEENS)
        .collect();
    let black = squares
        .filter(|&square| board.get(square) == Piece::Black)
        .take(QUEENS)
        .collect();
    (white, black)
}

/// The total number of squares `queens` can move to
pub fn mobility(board: &Board, queens: &[Square]) -> i32 {
    queens
        .iter()
        .map(|&queen| board.reachable_from(queen, None).count() as i32)
        .sum()
}

/// An agent that searches for the best move in a position
///
/// # Notes
/// The agent works on its own copy of the board, so the position it was created
/// from is never touched. White maximises the position value, Black minimises it,
/// and among equally valued moves the first one generated is chosen.
#[derive(Clone)]
pub struct Searcher {
    board: Board,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` working on a copy of `board`
    pub fn new(board: &Board) -> Self {
        Self {
            board: board.clone(),
            node_count: 0,
        }
    }

    /// Finds a move for `side`, searching to the depth given by [`max_depth`]
    ///
    /// Returns `None` only if `side` has no legal move.
    pub fn find_move(&mut self, side: Piece) -> Option<Move> {
        let depth = max_depth(self.board.num_moves());
        let (value, best_move) = self.search(side, depth);
        debug!(
            "searched {} nodes at depth {} for {}: value {}, move {}",
            self.node_count,
            depth,
            side,
            value,
            best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        );
        best_move
    }

    /// Searches `depth` plies ahead with `side` moving first
    ///
    /// Returns the value of the position and the move that achieves it.
    pub fn search(&mut self, side: Piece, depth: usize) -> (i32, Option<Move>) {
        let mut best_move = None;
        // temporarily move the board out so the recursion can borrow it alongside self
        let mut board = std::mem::take(&mut self.board);
        let value = self.minimax(
            &mut board,
            depth,
            side == Piece::White,
            -INFINITY,
            INFINITY,
            Some(&mut best_move),
        );
        self.board = board;
        (value, best_move)
    }

    /// Performs alpha-beta game tree search
    ///
    /// Returns the value of `board`. If `best_move` is given, it receives the first
    /// move reaching the best value found.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        maximising: bool,
        mut alpha: i32,
        mut beta: i32,
        mut best_move: Option<&mut Option<Move>>,
    ) -> i32 {
        self.node_count += 1;

        if depth == 0 || board.winner().is_some() {
            return static_score(board);
        }

        let side = if maximising { Piece::White } else { Piece::Black };
        // generated up front, since the board is modified while they are searched
        let moves: Vec<Move> = board.legal_moves(side).collect();

        let mut best_value = if maximising { -INFINITY } else { INFINITY };
        for mv in moves {
            let value = {
                let mut child = board.scoped(mv);
                self.minimax(&mut child, depth - 1, !maximising, alpha, beta, None)
            };

            let improved = if maximising {
                value > best_value
            } else {
                value < best_value
            };
            if improved {
                best_value = value;
                if let Some(best_move) = best_move.as_mut() {
                    **best_move = Some(mv);
                }
            }

            if maximising {
                alpha = alpha.max(best_value);
            } else {
                beta = beta.min(best_value);
            }
            // the opponent will never allow this line
            if alpha >= beta {
                break;
            }
        }
        best_value
    }
}

impl std::ops::Deref for Searcher {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}
