use std::fmt;

use BoardError::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidMove { start: i64, end: i64 },
    OutOfRange(i64),
    ParseError(String),
    IOError(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove { start, end } => write!(f, "Invalid move from {} to {}", start, end),
            OutOfRange(i) => write!(f, "Square index {} is outside 0..64", i),
            ParseError(msg) => write!(f, "{}", msg),
            IOError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<std::io::Error> for BoardError {
    fn from(e: std::io::Error) -> Self {
        IOError(format!("IO error: {}", e))
    }
}

#[test]
fn test_display() {
    assert_eq!(
        InvalidMove { start: -1, end: 5 }.to_string(),
        "Invalid move from -1 to 5"
    );
    assert_eq!(OutOfRange(64).to_string(), "Square index 64 is outside 0..64");
}
