//! Text input binding.

use game_core::{Command, Direction};

/// One line of player input, interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Help,
    Quit,
    Unknown,
}

/// Maps a typed token to an input.
///
/// Movement accepts `w/a/s/d`, arrow names and `k/j/h/l`; attacking accepts
/// `f`, `attack`, `space` or a bare space.
pub fn parse_input(line: &str) -> Input {
    if line.trim_end_matches(['\r', '\n']) == " " {
        return Input::Command(Command::Attack);
    }

    let token = line.trim().to_ascii_lowercase();
    let direction = match token.as_str() {
        "w" | "up" | "k" => Some(Direction::Up),
        "s" | "down" | "j" => Some(Direction::Down),
        "a" | "left" | "h" => Some(Direction::Left),
        "d" | "right" | "l" => Some(Direction::Right),
        _ => None,
    };
    if let Some(direction) = direction {
        return Input::Command(Command::Move(direction));
    }

    match token.as_str() {
        "f" | "attack" | "space" => Input::Command(Command::Attack),
        "?" | "help" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        _ => Input::Unknown,
    }
}

pub const HELP: &str =
    "move: w/a/s/d, up/down/left/right, k/j/h/l | attack: f, attack, space | quit: q";
