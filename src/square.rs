use core::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

use crate::constants::*;
use crate::error::BoardError;

type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct Square(usize);

impl Square {
    pub fn new(row: usize, col: usize) -> Square {
        Square::from_index(row * N_COLS + col)
    }

    pub fn from_index(i: usize) -> Square {
        if i >= N_SQUARES {
            panic!("Square index {} is larger than max {}", i, N_SQUARES);
        }
        Square(i)
    }

    /*
     * Bit position of this square in an occupancy mask, row * 8 + col.
     */
    pub fn index(&self) -> usize {
        self.0
    }

    pub fn row(&self) -> usize {
        self.0 / N_COLS
    }

    pub fn col(&self) -> usize {
        self.0 % N_COLS
    }

    pub fn all_squares() -> impl Iterator<Item = Square> {
        (0..N_SQUARES).map(Square)
    }
}

impl TryFrom<i64> for Square {
    type Error = BoardError;

    fn try_from(i: i64) -> Result<Self> {
        if (0..N_SQUARES as i64).contains(&i) {
            Ok(Square(i as usize))
        } else {
            Err(BoardError::OutOfRange(i))
        }
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_try_from_range() {
    assert_eq!(Square::try_from(0).unwrap(), Square::from_index(0));
    assert_eq!(Square::try_from(63).unwrap(), Square::from_index(63));
    assert_eq!(Square::try_from(-1), Err(BoardError::OutOfRange(-1)));
    assert_eq!(Square::try_from(64), Err(BoardError::OutOfRange(64)));
}

#[test]
fn test_row_col() {
    let sq = Square::new(1, 0);
    assert_eq!(sq.index(), 8);
    assert_eq!((sq.row(), sq.col()), (1, 0));

    let sq = Square::from_index(19);
    assert_eq!((sq.row(), sq.col()), (2, 3));
    assert_eq!(sq.to_string(), "19");
}

#[test]
fn test_all_squares() {
    let squares: Vec<Square> = Square::all_squares().collect();
    assert_eq!(squares.len(), N_SQUARES);
    assert_eq!(squares[0], Square::new(0, 0));
    assert_eq!(squares[63], Square::new(7, 7));
}

#[test]
#[should_panic]
fn test_from_index_out_of_range() {
    Square::from_index(64);
}
