use bit_checkers::board::BoardState;
use bit_checkers::menu::run_menu;
use log::error;
use std::io;
use std::process;

fn main() {
    env_logger::init();
    log_panics::init();

    let mut state = BoardState::new();

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = run_menu(&mut state, &mut stdin.lock(), &mut stdout.lock()) {
        error!("{}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}
