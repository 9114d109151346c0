use std::convert::TryFrom;
use std::fmt;

use crate::constants::*;
use crate::error::BoardError;

pub use Player::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /*
     * Slot of this player's mask in the occupancy pair.
     */
    pub fn index(&self) -> usize {
        match self {
            One => 0,
            Two => 1,
        }
    }

    // 1-based, as shown to users
    pub fn number(&self) -> u8 {
        match self {
            One => 1,
            Two => 2,
        }
    }

    pub fn opposite(&self) -> Player {
        match self {
            One => Two,
            Two => One,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            One => PLAYER_ONE_SYMBOL,
            Two => PLAYER_TWO_SYMBOL,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = BoardError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(One),
            2 => Ok(Two),
            other => Err(BoardError::ParseError(format!("Unknown player {}", other))),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[test]
fn test_opposite() {
    assert_eq!(One.opposite(), Two);
    assert_eq!(Two.opposite(), One);
    assert_eq!(One.opposite().opposite(), One);
}

#[test]
fn test_numbering() {
    assert_eq!(One.index(), 0);
    assert_eq!(Two.index(), 1);
    assert_eq!(Player::try_from(1).unwrap(), One);
    assert_eq!(Player::try_from(2).unwrap(), Two);
    assert!(Player::try_from(3).is_err());
    assert_eq!(Two.to_string(), "Player 2");
}
