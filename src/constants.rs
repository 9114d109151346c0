pub const N_ROWS: usize = 8;
pub const N_COLS: usize = 8;
pub const N_SQUARES: usize = N_ROWS * N_COLS;

pub const N_PLAYERS: usize = 2;

// Starting occupancy: player 1 on the low three rows, player 2 on the high three.
pub const PLAYER_ONE_START: u64 = 0x00AA55AA;
pub const PLAYER_TWO_START: u64 = 0x55AA55 << 40;

pub const PLAYER_ONE_SYMBOL: char = 'B';
pub const PLAYER_TWO_SYMBOL: char = 'W';
pub const EMPTY_SYMBOL: char = '.';
