use super::types::Square;
use anyhow::bail;
use std::fmt;
use std::str::FromStr;

/// Promotion piece, in the order the app lays out its selection buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    pub fn from_char(c: char) -> anyhow::Result<Self> {
        Ok(match c {
            'q' => Promotion::Queen,
            'r' => Promotion::Rook,
            'b' => Promotion::Bishop,
            'n' => Promotion::Knight,
            _ => bail!("unknown promotion piece '{}', expected q, r, b or n", c),
        })
    }

    /// Offset into the promotion button row (queen leftmost).
    pub fn button_index(self) -> usize {
        match self {
            Promotion::Queen => 0,
            Promotion::Rook => 1,
            Promotion::Bishop => 2,
            Promotion::Knight => 3,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Promotion::Queen => 'q',
            Promotion::Rook => 'r',
            Promotion::Bishop => 'b',
            Promotion::Knight => 'n',
        }
    }
}

/// A move as the operator types it: `e2e4`, or `e7e8q` when promoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveToken {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Promotion>,
}

impl FromStr for MoveToken {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let lower = s.to_lowercase();
        let chars: Vec<char> = lower.chars().collect();
        if chars.len() != 4 && chars.len() != 5 {
            bail!(
                "'{}' is not a move: expected 4 or 5 characters, like e2e4 or e7e8q",
                s
            );
        }
        let from = Square::from_chars(chars[0], chars[1])?;
        let to = Square::from_chars(chars[2], chars[3])?;
        let promotion = match chars.get(4) {
            Some(&c) => Some(Promotion::from_char(c)?),
            None => None,
        };
        Ok(MoveToken {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(p) = self.promotion {
            write!(f, "{}", p.letter())?;
        }
        Ok(())
    }
}
