//! Player command vocabulary and parsing.

use crate::direction::Direction;

/// Everything the player can type at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move one room in a cardinal direction.
    Move(Direction),
    /// Reprint the current room.
    Look,
    /// Print the connection listing.
    Map,
    /// Print the ASCII diagram.
    VisualMap,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Parse one line of player input, case-insensitively. `None` means
    /// the input is not a command; the caller re-prompts without any
    /// state change.
    pub fn parse(input: &str) -> Option<Self> {
        let cmd = input.trim().to_ascii_uppercase();
        match cmd.as_str() {
            "LOOK" => Some(Command::Look),
            "MAP" => Some(Command::Map),
            "VMAP" => Some(Command::VisualMap),
            "HELP" => Some(Command::Help),
            "EXIT" | "Q" | "QUIT" => Some(Command::Quit),
            _ => Direction::parse(&cmd).map(Command::Move),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("look"), Some(Command::Look));
        assert_eq!(Command::parse("VMAP"), Some(Command::VisualMap));
        assert_eq!(Command::parse("Help"), Some(Command::Help));
    }

    #[test]
    fn test_parse_quit_aliases() {
        for alias in ["EXIT", "q", "Quit"] {
            assert_eq!(Command::parse(alias), Some(Command::Quit));
        }
    }

    #[test]
    fn test_parse_movement() {
        assert_eq!(
            Command::parse("north"),
            Some(Command::Move(Direction::North))
        );
        assert_eq!(Command::parse(" e "), Some(Command::Move(Direction::East)));
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        assert_eq!(Command::parse("dance"), None);
        assert_eq!(Command::parse(""), None);
    }
}
