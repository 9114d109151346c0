#[macro_use]
pub mod bitboard;
pub mod board;
pub mod constants;
pub mod engine;
pub mod error;
pub mod menu;
pub mod mv;
pub mod player;
pub mod square;
