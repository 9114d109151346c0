use std::fmt;
use std::fmt::Write;

use crate::bitboard::*;
use crate::constants::*;
use crate::error::BoardError;
use crate::player::*;
use crate::square::*;

pub type Result<T> = std::result::Result<T, BoardError>;

/*
 * Occupancy for both players plus whose turn it is. Bit `i` of a player's
 * mask is set when that player has a piece on square `i`.
 *
 * Nothing here checks that the two masks are disjoint; the move engine keeps
 * them that way when it resolves captures.
 */
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct BoardState {
    occupancy: [Bitboard; N_PLAYERS],
    current_player: Player,
}

impl BoardState {
    /*
     * The starting layout, player 1 to move.
     */
    pub fn new() -> Self {
        BoardState {
            occupancy: [
                Bitboard::new(PLAYER_ONE_START),
                Bitboard::new(PLAYER_TWO_START),
            ],
            current_player: One,
        }
    }

    pub fn empty() -> Self {
        BoardState {
            occupancy: [Bitboard::empty(); N_PLAYERS],
            current_player: One,
        }
    }

    pub fn with_player_to_move(&self, player: Player) -> Self {
        let mut new = *self;
        new.current_player = player;
        new
    }

    pub fn place_piece(&self, player: Player, on: Square) -> Self {
        let mut new = *self;
        new.set_bit(player, on);
        new
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opposite();
    }

    pub fn occupancy_of(&self, player: Player) -> Bitboard {
        self.occupancy[player.index()]
    }

    pub fn is_occupied(&self, player: Player, square: Square) -> bool {
        self.occupancy_of(player).is_set(square)
    }

    pub fn set_bit(&mut self, player: Player, square: Square) {
        self.occupancy[player.index()] |= Bitboard::of(square);
    }

    pub fn clear_bit(&mut self, player: Player, square: Square) {
        self.occupancy[player.index()] &= !Bitboard::of(square);
    }

    // Player 2 wins ties, though the engine never lets both masks hold a square.
    pub fn symbol_at(&self, square: Square) -> char {
        if self.is_occupied(Two, square) {
            Two.symbol()
        } else if self.is_occupied(One, square) {
            One.symbol()
        } else {
            EMPTY_SYMBOL
        }
    }

    /*
     * Text grid with row 8 (internal row 7) at the top and columns numbered
     * 1..8 left to right. Displayed row r, column c is square (r-1)*8 + (c-1).
     */
    pub fn render_grid(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.write_grid(&mut out);
        out
    }

    fn write_grid(&self, out: &mut impl Write) -> fmt::Result {
        write!(out, " ")?;
        for col in 0..N_COLS {
            write!(out, " {}", col + 1)?;
        }
        writeln!(out)?;

        for row in (0..N_ROWS).rev() {
            write!(out, "{} ", row + 1)?;
            for col in 0..N_COLS {
                write!(out, "{} ", self.symbol_at(Square::new(row, col)))?;
            }
            writeln!(out)?;
        }

        Ok(())
    }

    /*
     * Player 1's mask in binary and player 2's in lowercase hex, both without
     * padding or prefix.
     */
    pub fn render_binary_hex(&self) -> (String, String) {
        (
            format!("{:b}", self.occupancy_of(One)),
            format!("{:x}", self.occupancy_of(Two)),
        )
    }

    // Squares set in both masks; always empty for states built by the engine.
    pub fn overlap(&self) -> Bitboard {
        self.occupancy_of(One) & self.occupancy_of(Two)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f)
    }
}

#[cfg(test)]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_initial_layout() {
    init();

    let board = BoardState::new();
    assert_eq!(board.occupancy_of(One).bits(), 0x00AA55AA);
    assert_eq!(board.occupancy_of(Two).bits(), 0x55AA5500_00000000);
    assert_eq!(board.current_player(), One);
    assert!(board.overlap().is_empty());
    assert_eq!(board.occupancy_of(One).popcnt(), 12);
    assert_eq!(board.occupancy_of(Two).popcnt(), 12);
}

#[test]
fn test_set_and_clear_bit() {
    init();

    let mut board = BoardState::empty();
    let sq = Square::from_index(27);

    board.set_bit(Two, sq);
    assert!(board.is_occupied(Two, sq));
    assert!(!board.is_occupied(One, sq));

    // setting twice is idempotent
    board.set_bit(Two, sq);
    assert_eq!(board.occupancy_of(Two), bitboard![27]);

    board.clear_bit(Two, sq);
    assert!(!board.is_occupied(Two, sq));

    // clearing an empty square is a no-op
    board.clear_bit(One, sq);
    assert_eq!(board, BoardState::empty());
}

#[test]
fn test_switch_player() {
    let mut board = BoardState::new();
    board.switch_player();
    assert_eq!(board.current_player(), Two);
    board.switch_player();
    assert_eq!(board.current_player(), One);
}

#[test]
fn test_render_initial_grid() {
    init();

    let expected = "  1 2 3 4 5 6 7 8\n\
                    8 W . W . W . W . \n\
                    7 . W . W . W . W \n\
                    6 W . W . W . W . \n\
                    5 . . . . . . . . \n\
                    4 . . . . . . . . \n\
                    3 . B . B . B . B \n\
                    2 B . B . B . B . \n\
                    1 . B . B . B . B \n";

    assert_eq!(BoardState::new().render_grid(), expected);
    assert_eq!(BoardState::new().to_string(), expected);
}

#[test]
fn test_render_grid_orientation() {
    // square 8 is row 1 col 0, shown on line "2" in column "1"
    let board = BoardState::empty().place_piece(One, Square::from_index(8));
    let grid = board.render_grid();
    let line = grid.lines().find(|l| l.starts_with("2 ")).unwrap();
    assert_eq!(line, "2 B . . . . . . . ");
}

#[test]
fn test_render_prefers_player_two() {
    let sq = Square::from_index(0);
    let board = BoardState::empty().place_piece(One, sq).place_piece(Two, sq);
    assert_eq!(board.symbol_at(sq), 'W');
    assert_eq!(board.overlap(), bitboard![0]);
}

#[test]
fn test_render_binary_hex() {
    let (binary, hex) = BoardState::new().render_binary_hex();
    assert_eq!(binary, "101010100101010110101010");
    assert_eq!(hex, "55aa550000000000");
    assert_eq!(binary, format!("{:b}", 0x00AA55AAu64));
    assert_eq!(hex, format!("{:x}", 0x55AA55u64 << 40));
}

#[test]
fn test_render_binary_hex_empty() {
    assert_eq!(
        BoardState::empty().render_binary_hex(),
        ("0".to_string(), "0".to_string())
    );
}
