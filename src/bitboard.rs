use crate::constants::*;
use crate::square::*;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use lazy_static::lazy_static;

lazy_static! {
    // Single-bit mask for every square, indexed by square index.
    pub static ref SQUARE_BITBOARDS: [Bitboard; N_SQUARES] = square_bitboards();
}

fn square_bitboards() -> [Bitboard; N_SQUARES] {
    let mut masks = [Bitboard::empty(); N_SQUARES];

    for square in Square::all_squares() {
        masks[square.index()] = Bitboard(1 << square.index());
    }

    masks
}

#[macro_export]
macro_rules! bitboard {
    ( $( $square:expr ),* ) => {
        $crate::bitboard::Bitboard::empty()
            $(
                .set($crate::square::Square::from_index($square))
            )*
    };
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    pub const fn empty() -> Self {
        Bitboard(0x0)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    pub fn of(square: Square) -> Self {
        SQUARE_BITBOARDS[square.index()]
    }

    pub fn set(&self, square: Square) -> Self {
        *self | Bitboard::of(square)
    }

    pub fn unset(&self, square: Square) -> Self {
        *self & !Bitboard::of(square)
    }

    pub fn is_set(&self, square: Square) -> bool {
        (*self & Bitboard::of(square)).non_empty()
    }

    pub fn set_all(squares: &[Square]) -> Self {
        squares
            .iter()
            .fold(Bitboard::empty(), |board, square| board.set(*square))
    }

    /*
     * Return all set squares in the bitboard
     */
    pub fn squares(&self) -> SquareIterator {
        SquareIterator::new(self)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn non_empty(&self) -> bool {
        self.0 != 0
    }

    pub fn popcnt(&self) -> u32 {
        self.0.count_ones()
    }
}

pub struct SquareIterator {
    bitboard: Bitboard,
}

impl SquareIterator {
    fn new(bitboard: &Bitboard) -> Self {
        SquareIterator {
            bitboard: *bitboard,
        }
    }
}

impl Iterator for SquareIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bitboard.is_empty() {
            None
        } else {
            let square = Square::from_index(self.bitboard.0.trailing_zeros() as usize);
            self.bitboard ^= Bitboard::of(square);
            Some(square)
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl BitXor for Bitboard {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

// Both delegate to u64, so output has no padding and no prefix unless `#` is given.
impl fmt::Binary for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..N_ROWS).rev() {
            for col in 0..N_COLS {
                let symbol = if self.is_set(Square::new(row, col)) {
                    '1'
                } else {
                    '.'
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }

        fmt::Result::Ok(())
    }
}

#[test]
fn test_square() {
    let b = Bitboard::set_all(&[
        Square::from_index(11),
        Square::from_index(31),
        Square::from_index(40),
    ]);
    assert_eq!(b.squares().collect::<Vec<Square>>(), vec![
        Square::from_index(11),
        Square::from_index(31),
        Square::from_index(40),
    ]);
}

#[test]
fn test_set_unset() {
    let b = bitboard![3];
    assert!(b.is_set(Square::from_index(3)));
    assert_eq!(b.bits(), 0b1000);

    // unsetting a clear bit leaves it clear
    assert_eq!(b.unset(Square::from_index(4)), b);
    assert_eq!(b.unset(Square::from_index(3)), Bitboard::empty());
}

#[test]
fn test_bitboard_squares_no_panic_when_last_square_is_set() {
    let squares = vec![Square::from_index(61), Square::from_index(63)];
    let bitboard = Bitboard::set_all(&squares);
    assert_eq!(squares, bitboard.squares().collect::<Vec<Square>>());
}

#[test]
fn test_popcnt() {
    assert_eq!(bitboard![56, 57, 58, 59, 60, 61, 62, 63].popcnt(), 8);
    assert_eq!(Bitboard::new(0x00AA55AA).popcnt(), 12);
}

#[test]
fn test_binary_and_hex_are_minimal_width() {
    assert_eq!(format!("{:b}", bitboard![0, 2]), "101");
    assert_eq!(format!("{:x}", bitboard![4, 63]), "8000000000000010");
    assert_eq!(format!("{:b}", Bitboard::empty()), "0");
    assert_eq!(format!("{:x}", Bitboard::empty()), "0");
}

#[test]
fn test_print() {
    let board = bitboard![6, 14, 22, 30, 38, 46, 54, 62];
    let printed = board.to_string();
    assert_eq!(printed.lines().count(), 8);
    assert!(printed.lines().all(|line| line == ". . . . . . 1 . "));
}
