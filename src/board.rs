//! Game state, move legality and move generation

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::{
    error::AmazonsError,
    moves::Move,
    piece::Piece,
    square::{Square, DIRECTIONS},
    SIZE,
};

/// Initial queen squares as (col, row)
const WHITE_START: [(i32, i32); 4] = [(3, 0), (6, 0), (0, 3), (9, 3)];
const BLACK_START: [(i32, i32); 4] = [(0, 6), (9, 6), (3, 9), (6, 9)];

/// The state of an Amazons game
///
/// Every board owns its cells and history outright, so `clone` produces a fully
/// independent position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    // cells are stored left-to-right, bottom-to-top
    cells: [Piece; SIZE * SIZE],
    turn: Piece,
    history: Vec<Move>,
}

impl Board {
    /// Creates a board in the starting position with White to move
    pub fn new() -> Self {
        let mut board = Self {
            cells: [Piece::Empty; SIZE * SIZE],
            turn: Piece::White,
            history: Vec::new(),
        };
        for (starts, piece) in [(WHITE_START, Piece::White), (BLACK_START, Piece::Black)].iter() {
            for &(col, row) in starts.iter() {
                if let Some(square) = Square::at(col, row) {
                    board.put(*piece, square);
                }
            }
        }
        board
    }

    /// Returns the contents of `square`
    pub fn get(&self, square: Square) -> Piece {
        self.cells[square.index()]
    }

    /// Sets `square` to `piece` without any legality checks
    pub fn put(&mut self, piece: Piece, square: Square) {
        self.cells[square.index()] = piece;
    }

    /// The side to move, `Piece::White` or `Piece::Black`
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// The number of moves played and not undone
    pub fn num_moves(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of squares currently holding `piece`
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&cell| cell == piece).count()
    }

    /// Returns true iff `from`-`to` is a queen move and every square after `from`
    /// up to and including `to` is empty. `as_empty`, if given, always counts as empty.
    pub fn is_unblocked_move(&self, from: Square, to: Square, as_empty: Option<Square>) -> bool {
        let dir = match from.direction(to) {
            Some(dir) => dir,
            None => return false,
        };
        (1..=from.distance(to)).all(|steps| match from.queen_move(dir, steps) {
            Some(square) => self.is_vacant(square, as_empty),
            None => false,
        })
    }

    fn is_vacant(&self, square: Square, as_empty: Option<Square>) -> bool {
        Some(square) == as_empty || self.get(square).is_empty()
    }

    /// Returns true iff `from` holds a queen of the side to move
    pub fn is_legal_from(&self, from: Square) -> bool {
        self.get(from) == self.turn
    }

    /// Returns true iff `from`-`to` is a legal queen relocation, ignoring the spear
    pub fn is_legal_relocation(&self, from: Square, to: Square) -> bool {
        self.is_legal_from(from) && self.is_unblocked_move(from, to, None)
    }

    /// Returns true iff `from`-`to`(`spear`) is a legal move in the current position
    pub fn is_legal(&self, from: Square, to: Square, spear: Square) -> bool {
        self.is_legal_relocation(from, to) && self.is_unblocked_move(to, spear, Some(from))
    }

    pub fn is_legal_move(&self, mv: &Move) -> bool {
        self.is_legal(mv.from(), mv.to(), mv.spear())
    }

    /// Plays `mv`, assuming it is legal
    ///
    /// Legality is not checked; see [`Board::play_checked`].
    pub fn apply_move(&mut self, mv: Move) {
        let queen = self.get(mv.from());
        self.put(Piece::Empty, mv.from());
        self.put(queen, mv.to());
        self.put(Piece::Spear, mv.spear());
        self.history.push(mv);
        self.flip_turn();
    }

    /// Plays `mv` if it is legal, leaving the board untouched otherwise
    pub fn play_checked(&mut self, mv: Move) -> Result<(), AmazonsError> {
        if !self.is_legal_move(&mv) {
            return Err(AmazonsError::IllegalMove(mv));
        }
        self.apply_move(mv);
        Ok(())
    }

    /// Takes back the most recent move and returns it
    pub fn undo(&mut self) -> Result<Move, AmazonsError> {
        let mv = self.history.pop().ok_or(AmazonsError::UndoUnderflow)?;
        self.retract(mv);
        Ok(mv)
    }

    fn retract(&mut self, mv: Move) {
        // the spear may have landed on the vacated origin, so clear it first
        self.put(Piece::Empty, mv.spear());
        let queen = self.get(mv.to());
        self.put(queen, mv.from());
        self.put(Piece::Empty, mv.to());
        self.flip_turn();
    }

    fn flip_turn(&mut self) {
        if let Some(opponent) = self.turn.opponent() {
            self.turn = opponent;
        }
    }

    /// Plays `mv` (assumed legal) for as long as the returned guard lives;
    /// dropping the guard takes the move back
    pub fn scoped(&mut self, mv: Move) -> AppliedMove<'_> {
        self.apply_move(mv);
        let depth = self.history.len();
        AppliedMove { board: self, depth }
    }

    /// The winner of the game, or `None` while the side to move still has a move
    pub fn winner(&self) -> Option<Piece> {
        if self.legal_moves(self.turn).next().is_none() {
            self.turn.opponent()
        } else {
            None
        }
    }

    /// Iterates over the squares reachable from `from` by an unblocked queen move,
    /// treating `as_empty` (if any) as empty
    ///
    /// Squares come in direction order (north, then clockwise), nearest first
    /// within each direction. The contents of `from` itself are ignored.
    pub fn reachable_from(&self, from: Square, as_empty: Option<Square>) -> ReachableFrom<'_> {
        ReachableFrom {
            board: self,
            from,
            as_empty,
            dir: 0,
            steps: 0,
        }
    }

    /// Iterates over every legal move for `side`, whether or not it is `side`'s turn
    pub fn legal_moves(&self, side: Piece) -> LegalMoves<'_> {
        LegalMoves {
            board: self,
            side,
            next_origin: 0,
            origin: None,
            destinations: None,
            destination: None,
            spears: None,
        }
    }

    pub fn legal_moves_for_turn(&self) -> LegalMoves<'_> {
        self.legal_moves(self.turn)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIZE).rev() {
            write!(f, "  ")?;
            for col in 0..SIZE {
                let piece = Square::at(col as i32, row as i32)
                    .map(|square| self.get(square))
                    .unwrap_or(Piece::Empty);
                write!(f, " {}", piece.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A move applied through [`Board::scoped`], undone when dropped
pub struct AppliedMove<'a> {
    board: &'a mut Board,
    // history length right after the move was applied
    depth: usize,
}

impl Deref for AppliedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        // only retract our own move, and only if nobody already undid it
        if self.board.history.len() == self.depth {
            if let Some(mv) = self.board.history.pop() {
                self.board.retract(mv);
            }
        }
    }
}

/// Lazy iterator over the squares reachable from a starting square
pub struct ReachableFrom<'a> {
    board: &'a Board,
    from: Square,
    as_empty: Option<Square>,
    dir: usize,
    steps: usize,
}

impl Iterator for ReachableFrom<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        while self.dir < DIRECTIONS.len() {
            self.steps += 1;
            match self.from.queen_move(self.dir, self.steps) {
                Some(to) if self.board.is_vacant(to, self.as_empty) => return Some(to),
                // off the board or blocked, try the next direction
                _ => {
                    self.dir += 1;
                    self.steps = 0;
                }
            }
        }
        None
    }
}

/// Lazy iterator over all legal moves of one side
///
/// Origins come in square index order, then destinations in
/// [`Board::reachable_from`] order, then spear squares in `reachable_from`
/// order with the vacated origin counted as empty.
pub struct LegalMoves<'a> {
    board: &'a Board,
    side: Piece,
    next_origin: usize,
    origin: Option<Square>,
    destinations: Option<ReachableFrom<'a>>,
    destination: Option<Square>,
    spears: Option<ReachableFrom<'a>>,
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let (Some(spears), Some(origin), Some(destination)) =
                (self.spears.as_mut(), self.origin, self.destination)
            {
                if let Some(spear) = spears.next() {
                    return Some(Move::new(origin, destination, spear));
                }
                self.spears = None;
            }

            if let (Some(destinations), Some(origin)) = (self.destinations.as_mut(), self.origin) {
                if let Some(destination) = destinations.next() {
                    self.destination = Some(destination);
                    self.spears = Some(self.board.reachable_from(destination, Some(origin)));
                    continue;
                }
                self.destinations = None;
            }

            let origin = Square::from_index(self.next_origin)?;
            self.next_origin += 1;
            if self.board.get(origin) == self.side {
                self.origin = Some(origin);
                self.destinations = Some(self.board.reachable_from(origin, None));
            }
        }
    }
}
