use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;

/// File axis in board order, index 0 = file a.
pub const FILES: &str = "abcdefgh";
/// Rank axis in board order, index 0 = rank 1.
pub const RANKS: &str = "12345678";

/// Which color the operator plays, fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Default for Side {
    fn default() -> Self {
        Side::White
    }
}

/// One of the 64 board squares, stored as 0-based file/rank offsets
/// (a1 = (0, 0), h8 = (7, 7)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: usize,
    rank: usize,
}

impl Square {
    pub fn from_chars(file: char, rank: char) -> anyhow::Result<Self> {
        let Some(file) = FILES.find(file) else {
            bail!("unknown file '{}', expected a-h", file);
        };
        let Some(rank) = RANKS.find(rank) else {
            bail!("unknown rank '{}', expected 1-8", rank);
        };
        Ok(Square { file, rank })
    }

    /// 0-based (file, rank) offsets as seen from the given side.
    /// Black sits on the other end of the board, so both axes flip.
    pub fn oriented(&self, side: Side) -> (usize, usize) {
        match side {
            Side::White => (self.file, self.rank),
            Side::Black => (7 - self.file, 7 - self.rank),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            FILES.as_bytes()[self.file] as char,
            RANKS.as_bytes()[self.rank] as char
        )
    }
}
