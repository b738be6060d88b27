use std::fmt;
use std::str::FromStr;

use crate::{error::AmazonsError, square::Square};

/// A queen relocation `from`-`to` followed by a spear thrown from `to` onto `spear`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    from: Square,
    to: Square,
    spear: Square,
}

impl Move {
    pub fn new(from: Square, to: Square, spear: Square) -> Self {
        Self { from, to, spear }
    }

    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }

    pub fn spear(&self) -> Square {
        self.spear
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.from, self.to, self.spear)
    }
}

impl FromStr for Move {
    type Err = AmazonsError;

    /// Accepts the canonical `d1-d4(d1)` as well as `d1 d4 d1`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AmazonsError::InvalidMove(s.to_string());

        let trimmed = s.trim();
        let parts: Vec<&str> = if let Some(body) = trimmed.strip_suffix(')') {
            let (relocation, spear) = body.split_once('(').ok_or_else(invalid)?;
            let (from, to) = relocation.split_once('-').ok_or_else(invalid)?;
            vec![from, to, spear]
        } else {
            trimmed.split_whitespace().collect()
        };

        match parts.as_slice() {
            [from, to, spear] => Ok(Move::new(
                from.parse().map_err(|_| invalid())?,
                to.parse().map_err(|_| invalid())?,
                spear.parse().map_err(|_| invalid())?,
            )),
            _ => Err(invalid()),
        }
    }
}
