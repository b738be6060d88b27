use std::fmt;

/// The contents of a single square
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Piece {
    Empty,
    White,
    Black,
    Spear,
}

impl Piece {
    /// The opposing side, or `None` for spears and empty squares
    pub fn opponent(self) -> Option<Piece> {
        match self {
            Piece::White => Some(Piece::Black),
            Piece::Black => Some(Piece::White),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    pub fn to_char(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::White => 'W',
            Piece::Black => 'B',
            Piece::Spear => 'S',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::White => write!(f, "White"),
            Piece::Black => write!(f, "Black"),
            Piece::Spear => write!(f, "Spear"),
            Piece::Empty => write!(f, "Empty"),
        }
    }
}
