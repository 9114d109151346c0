use log::debug;
use std::convert::TryFrom;

use crate::board::{BoardState, Result};
use crate::error::BoardError;
use crate::mv::Move;
use crate::player::*;
use crate::square::*;

/*
 * Legality and move application over a BoardState.
 *
 * A move is legal when both squares are on the board, the mover has a piece on
 * the start square and no piece of their own on the end square. There is no
 * direction, distance or adjacency rule. Landing on an opponent's piece
 * captures it.
 */
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveEngine;

impl MoveEngine {
    pub fn is_legal(state: &BoardState, start: i64, end: i64) -> bool {
        Self::validate(state, start, end).is_some()
    }

    /*
     * Returns the checked squares for a legal move, None otherwise.
     */
    fn validate(state: &BoardState, start: i64, end: i64) -> Option<(Square, Square)> {
        let player = state.current_player();

        let (from, to) = match (Square::try_from(start), Square::try_from(end)) {
            (Ok(from), Ok(to)) => (from, to),
            (Err(e), _) | (_, Err(e)) => {
                debug!("{}: rejecting {} -> {}: {}", player, start, end, e);
                return None;
            }
        };

        if !state.is_occupied(player, from) {
            debug!("{}: rejecting {} -> {}: no piece on {}", player, start, end, from);
            return None;
        }

        if state.is_occupied(player, to) {
            debug!("{}: rejecting {} -> {}: own piece on {}", player, start, end, to);
            return None;
        }

        Some((from, to))
    }

    /*
     * Moves the current player's piece from `start` to `end`, captures any
     * opposing piece on `end`, then hands the turn over. An illegal move
     * leaves the state untouched.
     */
    pub fn apply(state: &mut BoardState, start: i64, end: i64) -> Result<Move> {
        let (from, to) =
            Self::validate(state, start, end).ok_or(BoardError::InvalidMove { start, end })?;

        let player = state.current_player();
        state.clear_bit(player, from);
        state.set_bit(player, to);

        // 0 if player 2 is moving, 1 otherwise
        let opponent = if player == Two { One } else { Two };

        let mv = if state.is_occupied(opponent, to) {
            debug!("{}: captures {} piece on {}", player, opponent, to);
            state.clear_bit(opponent, to);
            Move::capturing(from, to)
        } else {
            Move::new(from, to)
        };

        state.switch_player();
        debug!("{}: played {}", player, mv);

        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn square(i: usize) -> Square {
        Square::from_index(i)
    }

    /*
     * Generates a test applying one move to a position and checking the resulting
     * masks and side to move.
     */
    macro_rules! move_test {
        ( $name:ident, board=$board:expr, mv=($start:expr, $end:expr), one=$one:expr, two=$two:expr, to_move=$to_move:expr ) => {
            paste::item! {
                #[test]
                fn [<test_move_ $name>]() {
                    init();
                    let mut board = $board;
                    assert!(MoveEngine::apply(&mut board, $start, $end).is_ok());
                    assert_eq!(board.occupancy_of(One).bits(), $one);
                    assert_eq!(board.occupancy_of(Two).bits(), $two);
                    assert_eq!(board.current_player(), $to_move);
                    assert!(board.overlap().is_empty());
                }
            }
        };
        ( $name:ident, board=$board:expr, mv=($start:expr, $end:expr), rejected ) => {
            paste::item! {
                #[test]
                fn [<test_rejects_ $name>]() {
                    init();
                    let mut board = $board;
                    let before = board;
                    assert_eq!(
                        MoveEngine::apply(&mut board, $start, $end),
                        Err(BoardError::InvalidMove { start: $start, end: $end })
                    );
                    assert!(!MoveEngine::is_legal(&before, $start, $end));
                    assert_eq!(board, before);
                }
            }
        };
    }

    fn capture_position() -> BoardState {
        BoardState::empty()
            .place_piece(One, square(10))
            .place_piece(Two, square(19))
    }

    move_test!(
        opening_step,
        board = BoardState::new(),
        mv = (17, 24),
        one = 0x00AA55AA & !(1 << 17) | (1 << 24),
        two = 0x55AA55 << 40,
        to_move = Two
    );

    move_test!(
        player_one_captures,
        board = capture_position(),
        mv = (10, 19),
        one = 1 << 19,
        two = 0,
        to_move = Two
    );

    move_test!(
        player_two_captures,
        board = capture_position().with_player_to_move(Two),
        mv = (19, 10),
        one = 0,
        two = 1 << 10,
        to_move = One
    );

    // no distance or direction rule
    move_test!(
        across_the_board,
        board = BoardState::new(),
        mv = (1, 62),
        one = 0x00AA55AA & !(1 << 1) | (1 << 62),
        two = (0x55AA55 << 40) & !(1 << 62),
        to_move = Two
    );

    move_test!(empty_start, board = BoardState::new(), mv = (0, 0), rejected);
    move_test!(negative_start, board = BoardState::new(), mv = (-1, 5), rejected);
    move_test!(end_past_board, board = BoardState::new(), mv = (5, 64), rejected);
    move_test!(
        negative_start_player_two,
        board = BoardState::new().with_player_to_move(Two),
        mv = (-1, 5),
        rejected
    );
    move_test!(
        end_past_board_player_two,
        board = BoardState::new().with_player_to_move(Two),
        mv = (40, 64),
        rejected
    );
    move_test!(onto_own_piece, board = BoardState::new(), mv = (1, 3), rejected);
    // square 8 starts with one of player 1's pieces on it
    move_test!(onto_square_8, board = BoardState::new(), mv = (1, 8), rejected);
    move_test!(same_square, board = BoardState::new(), mv = (1, 1), rejected);
    move_test!(opponents_piece, board = BoardState::new(), mv = (40, 32), rejected);
    move_test!(
        huge_values,
        board = BoardState::new(),
        mv = (i64::MIN, i64::MAX),
        rejected
    );

    #[test]
    fn test_opening_step_detail() {
        init();

        let mut board = BoardState::new();
        assert!(board.is_occupied(One, square(1)));
        assert!(board.is_occupied(One, square(8)));
        assert!(!MoveEngine::is_legal(&board, 1, 8));

        assert!(!board.is_occupied(One, square(24)));
        assert!(!board.is_occupied(Two, square(24)));

        let mv = MoveEngine::apply(&mut board, 17, 24).unwrap();

        assert_eq!(mv, Move::new(square(17), square(24)));
        assert!(!mv.capture);
        assert!(!board.is_occupied(One, square(17)));
        assert!(board.is_occupied(One, square(24)));
        assert_eq!(board.current_player(), Two);
    }

    #[test]
    fn test_capture_detail() {
        init();

        let mut board = capture_position();
        let mv = MoveEngine::apply(&mut board, 10, 19).unwrap();

        assert!(mv.capture);
        assert!(!board.is_occupied(One, square(10)));
        assert!(board.is_occupied(One, square(19)));
        assert!(!board.is_occupied(Two, square(19)));
        assert_eq!(board.current_player(), Two);
    }

    #[test]
    fn test_turns_alternate() {
        init();

        let mut board = BoardState::new();
        let moves = [(1, 25), (40, 33), (25, 33), (42, 33), (10, 33)];

        let mut expected = One;
        for (start, end) in moves.iter() {
            assert_eq!(board.current_player(), expected);
            MoveEngine::apply(&mut board, *start, *end).unwrap();
            expected = expected.opposite();
            assert_eq!(board.current_player(), expected);
            assert!(board.overlap().is_empty());
        }

        // three captures, all on square 33
        assert_eq!(board.occupancy_of(One).popcnt(), 11);
        assert_eq!(board.occupancy_of(Two).popcnt(), 10);
        assert!(board.is_occupied(One, square(33)));
    }

    #[test]
    fn test_rejection_keeps_turn() {
        init();

        let mut board = BoardState::new();
        assert!(MoveEngine::apply(&mut board, 0, 8).is_err());
        assert_eq!(board.current_player(), One);

        // player 1 cannot move player 2's piece even after a failed attempt
        assert!(MoveEngine::apply(&mut board, 40, 32).is_err());
        assert_eq!(board, BoardState::new());
    }

    /*
     * Every (start, end) pair from a few positions, including out of range values.
     */
    #[test]
    fn test_all_pairs_preserve_invariants() {
        use itertools::Itertools;

        init();

        let positions = [
            BoardState::new(),
            BoardState::new().with_player_to_move(Two),
            capture_position(),
            capture_position().with_player_to_move(Two),
        ];

        for position in positions.iter() {
            for (start, end) in (-1..=64i64).cartesian_product(-1..=64i64) {
                let mut board = *position;
                let player = board.current_player();
                let opponent = player.opposite();
                let legal = MoveEngine::is_legal(&board, start, end);

                match MoveEngine::apply(&mut board, start, end) {
                    Ok(mv) => {
                        assert!(legal);
                        assert_ne!(start, end);
                        assert!(board.overlap().is_empty());
                        assert_eq!(board.current_player(), opponent);
                        assert!(!board.is_occupied(player, mv.start));
                        assert!(board.is_occupied(player, mv.end));
                        assert!(!board.is_occupied(opponent, mv.end));
                        assert_eq!(mv.capture, position.is_occupied(opponent, mv.end));
                        assert_eq!(
                            board.occupancy_of(player).popcnt(),
                            position.occupancy_of(player).popcnt()
                        );
                    }
                    Err(e) => {
                        assert!(!legal);
                        assert_eq!(e, BoardError::InvalidMove { start, end });
                        assert_eq!(board, *position);
                    }
                }
            }
        }
    }
}
