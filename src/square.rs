//! Board coordinates and queen-move geometry

use std::fmt;
use std::str::FromStr;

use crate::{error::AmazonsError, SIZE};

/// Column letters in order, `a` is the leftmost column
pub const COLUMNS: [char; SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];

/// `DIRECTIONS[k] = (dcol, drow)`: one step in compass direction `k`,
/// starting at north (0) and proceeding clockwise to north-west (7)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// A position on the board, numbered from 0 (a1, lower-left) to 99 (j10, upper-right)
///
/// There is exactly one value per coordinate pair and comparing two squares is a
/// single byte comparison.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Square(u8);

mod static_squares {
    use super::Square;
    use crate::SIZE;

    pub const fn all_squares() -> [Square; SIZE * SIZE] {
        let mut squares = [Square(0); SIZE * SIZE];
        let mut index = 0;
        while index < SIZE * SIZE {
            squares[index] = Square(index as u8);
            index += 1;
        }
        squares
    }
}

/// Every square in index order
pub const SQUARES: [Square; SIZE * SIZE] = static_squares::all_squares();

impl Square {
    /// Returns the square at (`col`, `row`), or `None` if it is off the board
    pub fn at(col: i32, row: i32) -> Option<Square> {
        if Self::exists(col, row) {
            Some(SQUARES[row as usize * SIZE + col as usize])
        } else {
            None
        }
    }

    /// Returns true iff (`col`, `row`) lies on the board
    pub fn exists(col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < SIZE && (row as usize) < SIZE
    }

    pub fn from_index(index: usize) -> Option<Square> {
        SQUARES.get(index).copied()
    }

    /// Iterates over all squares from a1 to j10
    pub fn all() -> impl Iterator<Item = Square> {
        SQUARES.iter().copied()
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / SIZE
    }

    pub fn col(self) -> usize {
        self.index() % SIZE
    }

    /// Returns true iff `self`-`to` is a queen move
    pub fn is_queen_move(self, to: Square) -> bool {
        let row_diff = (to.row() as i32 - self.row() as i32).abs();
        let col_diff = (to.col() as i32 - self.col() as i32).abs();
        self != to && (row_diff == col_diff || row_diff == 0 || col_diff == 0)
    }

    /// Returns the compass direction (see [`DIRECTIONS`]) of the queen move
    /// `self`-`to`, or `None` if it is not a queen move
    pub fn direction(self, to: Square) -> Option<usize> {
        if !self.is_queen_move(to) {
            return None;
        }
        let dcol = (to.col() as i32 - self.col() as i32).signum();
        let drow = (to.row() as i32 - self.row() as i32).signum();
        DIRECTIONS.iter().position(|&step| step == (dcol, drow))
    }

    /// Number of single steps separating `self` from `to` along a queen line
    pub fn distance(self, to: Square) -> usize {
        let row_diff = (to.row() as i32 - self.row() as i32).abs();
        let col_diff = (to.col() as i32 - self.col() as i32).abs();
        row_diff.max(col_diff) as usize
    }

    /// Returns the square `steps` squares away in direction `dir`, or `None`
    /// if that leaves the board or `dir` is not in 0..8
    pub fn queen_move(self, dir: usize, steps: usize) -> Option<Square> {
        let (dcol, drow) = *DIRECTIONS.get(dir)?;
        let steps = steps as i32;
        Square::at(
            self.col() as i32 + dcol * steps,
            self.row() as i32 + drow * steps,
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLUMNS[self.col()], self.row() + 1)
    }
}

impl FromStr for Square {
    type Err = AmazonsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AmazonsError::InvalidSquare(s.to_string());

        let mut chars = s.chars();
        let col = chars
            .next()
            .and_then(|letter| COLUMNS.iter().position(|&c| c == letter))
            .ok_or_else(invalid)?;
        let rank = chars.as_str();
        // reject signs, leading zeroes and whitespace that usize parsing would allow
        if rank.is_empty() || rank.starts_with('0') || !rank.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let row = rank.parse::<i32>().map_err(|_| invalid())? - 1;

        Square::at(col as i32, row).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_moves() {
        let sq = |col, row| Square::at(col, row).unwrap();
        assert!(!sq(1, 5).is_queen_move(sq(1, 5)));
        assert!(!sq(1, 5).is_queen_move(sq(2, 7)));
        assert!(!sq(0, 0).is_queen_move(sq(5, 1)));
        assert!(sq(1, 1).is_queen_move(sq(9, 9)));
        assert!(sq(2, 7).is_queen_move(sq(8, 7)));
        assert!(sq(3, 0).is_queen_move(sq(3, 4)));
        assert!(sq(7, 9).is_queen_move(sq(0, 2)));
    }

    #[test]
    fn directions() {
        let sq = |col, row| Square::at(col, row).unwrap();
        let centre = sq(4, 4);
        let expected = [
            sq(4, 9),
            sq(9, 9),
            sq(9, 4),
            sq(8, 0),
            sq(4, 0),
            sq(0, 0),
            sq(0, 4),
            sq(0, 8),
        ];
        for (dir, &to) in expected.iter().enumerate() {
            assert_eq!(centre.direction(to), Some(dir));
            assert_eq!(centre.queen_move(dir, centre.distance(to)), Some(to));
        }
        assert_eq!(centre.direction(sq(5, 6)), None);
        assert_eq!(centre.direction(centre), None);
    }

    #[test]
    fn off_board() {
        assert_eq!(Square::at(-1, 0), None);
        assert_eq!(Square::at(0, 10), None);
        assert_eq!(Square::at(10, 3), None);

        let corner = Square::at(9, 9).unwrap();
        assert_eq!(corner.queen_move(0, 1), None);
        assert_eq!(corner.queen_move(8, 1), None);
        assert_eq!(corner.queen_move(5, 9), Square::at(0, 0));
    }

    #[test]
    fn text_form() {
        for col in 0..SIZE as i32 {
            for row in 0..SIZE as i32 {
                let square = Square::at(col, row).unwrap();
                assert_eq!(square.to_string().parse::<Square>(), Ok(square));
            }
        }
        assert_eq!(Square::at(0, 0).unwrap().to_string(), "a1");
        assert_eq!(Square::at(9, 9).unwrap().to_string(), "j10");

        for bad in &["", "a", "k1", "a0", "a11", "a01", "A1", "a+1", "1a"] {
            assert!(bad.parse::<Square>().is_err(), "accepted {:?}", bad);
        }
    }
}
