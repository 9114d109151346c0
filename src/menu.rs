use crate::board::*;
use crate::engine::MoveEngine;
use crate::error::BoardError;
use log::info;
use std::fmt;
use std::io::{BufRead, Write};

use nom::{
    self,
    character::complete::{digit1, multispace0, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{delimited, pair},
    Finish, IResult,
};

const MENU: &str = " ____ MAIN MENU ----- \n\
                    1. Make a Move\n\
                    2. Display Board\n\
                    3. Print Board in Binary and Hex\n\
                    4. Exit\n";

const CHOICE_PROMPT: &str = "Enter your choice: ";
const START_PROMPT: &str = "Enter start position (0-63): ";
const END_PROMPT: &str = "Enter end position (0-63): ";

/*
 * Console game loop. Prints the board, then serves the four menu choices
 * until the player picks Exit or input runs out.
 */
pub fn run_menu<R: BufRead, W: Write>(
    state: &mut BoardState,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    info!("Menu: starting new session");

    write_board(state, output)?;

    loop {
        write!(output, "{}", MENU)?;
        let choice = match prompt_for_integer(input, output, CHOICE_PROMPT)? {
            Prompted::Value(i) => MenuCommand::from(i),
            Prompted::Invalid => continue,
            Prompted::Closed => break,
        };
        info!("Menu: got command {}", choice);

        match choice {
            MenuCommand::MakeMove => {
                let start = match prompt_for_integer(input, output, START_PROMPT)? {
                    Prompted::Value(i) => i,
                    Prompted::Invalid => continue,
                    Prompted::Closed => break,
                };
                let end = match prompt_for_integer(input, output, END_PROMPT)? {
                    Prompted::Value(i) => i,
                    Prompted::Invalid => continue,
                    Prompted::Closed => break,
                };

                if let Err(e) = MoveEngine::apply(state, start, end) {
                    info!("Menu: {}", e);
                    writeln!(output, "INVALID MOVE.")?;
                }

                write_board(state, output)?;
            }
            MenuCommand::DisplayBoard => write!(output, "{}", state.render_grid())?,
            MenuCommand::PrintBinaryHex => write_binary_hex(state, output)?,
            MenuCommand::Exit => break,
            MenuCommand::Unknown(_) => writeln!(output, "Invalid choice, please try again.")?,
        }
    }

    output.flush()?;
    info!("Menu: session ended");
    Ok(())
}

fn write_board<W: Write>(state: &BoardState, output: &mut W) -> Result<()> {
    write!(output, "{}", state.render_grid())?;
    write_binary_hex(state, output)
}

fn write_binary_hex<W: Write>(state: &BoardState, output: &mut W) -> Result<()> {
    let (binary, hex) = state.render_binary_hex();
    writeln!(output, "Player 1 [0] (Binary): {}", binary)?;
    writeln!(output, "Player 2 [1] (Hex): {}", hex)?;
    Ok(())
}

enum Prompted {
    Value(i64),
    Invalid,
    Closed,
}

/*
 * Prints `prompt`, reads one line and parses it as an integer. A line that is
 * not a number is reported to the player and yields Invalid.
 */
fn prompt_for_integer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Prompted> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        info!("Menu: input closed");
        return Ok(Prompted::Closed);
    }

    match parse_integer(&buffer) {
        Ok(i) => Ok(Prompted::Value(i)),
        Err(e) => {
            info!("Menu: {}", e);
            writeln!(output, "Invalid input, please enter a number.")?;
            Ok(Prompted::Invalid)
        }
    }
}

fn integer(i: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
        s.parse::<i64>()
    })(i)
}

pub fn parse_integer(input: &str) -> Result<i64> {
    all_consuming(delimited(multispace0, integer, multispace0))(input)
        .finish()
        .map(|(_, i)| i)
        .map_err(|e: nom::error::Error<&str>| {
            BoardError::ParseError(format!(
                "Could not parse integer '{}': {:?}",
                input.trim(),
                e.code
            ))
        })
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuCommand {
    MakeMove,
    DisplayBoard,
    PrintBinaryHex,
    Exit,
    Unknown(i64),
}

impl From<i64> for MenuCommand {
    fn from(i: i64) -> Self {
        match i {
            1 => MenuCommand::MakeMove,
            2 => MenuCommand::DisplayBoard,
            3 => MenuCommand::PrintBinaryHex,
            4 => MenuCommand::Exit,
            other => MenuCommand::Unknown(other),
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuCommand::MakeMove => write!(f, "make move"),
            MenuCommand::DisplayBoard => write!(f, "display board"),
            MenuCommand::PrintBinaryHex => write!(f, "print binary and hex"),
            MenuCommand::Exit => write!(f, "exit"),
            MenuCommand::Unknown(i) => write!(f, "unknown choice {}", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn run(state: &mut BoardState, input: &str) -> String {
        let mut output = Vec::new();
        run_menu(state, &mut input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("42\n").unwrap(), 42);
        assert_eq!(parse_integer("  -1 \r\n").unwrap(), -1);
        assert_eq!(parse_integer("+7").unwrap(), 7);
        assert!(parse_integer("abc\n").is_err());
        assert!(parse_integer("1 2\n").is_err());
        assert!(parse_integer("\n").is_err());
        assert!(parse_integer("99999999999999999999\n").is_err());
    }

    #[test]
    fn test_menu_command() {
        assert_eq!(MenuCommand::from(1), MenuCommand::MakeMove);
        assert_eq!(MenuCommand::from(4), MenuCommand::Exit);
        assert_eq!(MenuCommand::from(0), MenuCommand::Unknown(0));
    }

    #[test]
    fn test_exit_immediately() {
        init();

        let mut state = BoardState::new();
        let out = run(&mut state, "4\n");

        let expected = format!(
            "{}Player 1 [0] (Binary): 101010100101010110101010\n\
             Player 2 [1] (Hex): 55aa550000000000\n\
             {}Enter your choice: ",
            BoardState::new().render_grid(),
            MENU
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_make_move() {
        init();

        let mut state = BoardState::new();
        let out = run(&mut state, "1\n17\n24\n4\n");

        assert!(!out.contains("INVALID MOVE."));
        assert!(out.contains("Enter start position (0-63): Enter end position (0-63): "));
        assert!(state.is_occupied(One, crate::square::Square::from_index(24)));
        assert_eq!(state.current_player(), Two);
    }

    #[test]
    fn test_invalid_move_reported() {
        init();

        let mut state = BoardState::new();
        let out = run(&mut state, "1\n0\n0\n4\n");

        assert!(out.contains("INVALID MOVE.\n"));
        assert_eq!(state, BoardState::new());
        // board is shown after the rejected move too
        assert_eq!(out.matches("Player 2 [1] (Hex)").count(), 2);
    }

    #[test]
    fn test_display_choices() {
        init();

        let mut state = BoardState::new();
        let out = run(&mut state, "2\n3\n4\n");

        assert_eq!(out.matches("  1 2 3 4 5 6 7 8\n").count(), 2);
        assert_eq!(out.matches("Player 1 [0] (Binary)").count(), 2);
    }

    #[test]
    fn test_bad_choices_reprompt() {
        init();

        let mut state = BoardState::new();
        let out = run(&mut state, "7\nfoo\n4\n");

        assert!(out.contains("Invalid choice, please try again.\n"));
        assert!(out.contains("Invalid input, please enter a number.\n"));
        assert_eq!(out.matches("Enter your choice: ").count(), 3);
    }

    #[test]
    fn test_end_of_input_stops() {
        init();

        let mut state = BoardState::new();
        let out = run(&mut state, "1\n17\n");

        assert!(out.ends_with("Enter end position (0-63): "));
        assert_eq!(state, BoardState::new());
    }
}
