use crate::square::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub capture: bool,
}

impl Move {
    pub fn new(start: Square, end: Square) -> Self {
        Move {
            start,
            end,
            capture: false,
        }
    }

    pub fn capturing(start: Square, end: Square) -> Self {
        Move {
            start,
            end,
            capture: true,
        }
    }
}

impl From<(Square, Square)> for Move {
    fn from((start, end): (Square, Square)) -> Self {
        Move::new(start, end)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.capture { 'x' } else { '-' };
        write!(f, "{}{}{}", self.start, sep, self.end)
    }
}

#[test]
fn test_display() {
    let a = Square::from_index(10);
    let b = Square::from_index(19);
    assert_eq!(Move::new(a, b).to_string(), "10-19");
    assert_eq!(Move::capturing(a, b).to_string(), "10x19");
    assert_eq!(Move::from((a, b)), Move::new(a, b));
}
