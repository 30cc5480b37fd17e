use crate::game::Game;
use thiserror::Error;

pub const HELP: &str = "Available functions:
exit
get_moves <square>
help
history
move <from> <to>
moves";

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Move { from: String, to: String },
    GetMoves(String),
    AllMoves,
    History,
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid input. Type \"exit\" if you'd like to quit. Type \"help\" if you'd like instructions.")]
pub struct CommandError;

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let keyword = words.first().ok_or(CommandError)?.to_lowercase();

        match (keyword.as_str(), &words[1..]) {
            ("move", [from, to]) => Ok(Command::Move {
                from: from.to_string(),
                to: to.to_string(),
            }),
            ("get_moves", [square]) => Ok(Command::GetMoves(square.to_string())),
            ("moves", []) => Ok(Command::AllMoves),
            ("history", []) => Ok(Command::History),
            ("help", []) => Ok(Command::Help),
            ("exit", []) => Ok(Command::Exit),
            _ => Err(CommandError),
        }
    }
}

/// What the loop should do after a command has run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// Runs a command against the game and returns the text to show.
pub fn dispatch(game: &mut Game, cmd: Command) -> Outcome {
    match cmd {
        Command::Move { from, to } => match game.move_piece(&from, &to) {
            Ok(msg) => Outcome::Continue(msg),
            Err(e) => Outcome::Continue(e.to_string()),
        },
        Command::GetMoves(square) => match game.get_moves(&square) {
            Ok(moves) if moves.is_empty() => Outcome::Continue("No moves available.".to_string()),
            Ok(moves) => Outcome::Continue(moves.join(" ")),
            Err(e) => Outcome::Continue(e.to_string()),
        },
        Command::AllMoves => {
            let moves: Vec<String> = game
                .all_moves()
                .iter()
                .map(|(from, to)| format!("{}-{}", from, to))
                .collect();
            Outcome::Continue(moves.join(" "))
        }
        Command::History => Outcome::Continue(game.history().join("\n")),
        Command::Help => Outcome::Continue(HELP.to_string()),
        Command::Exit => Outcome::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            Command::parse("move e2 e4"),
            Ok(Command::Move {
                from: "e2".to_string(),
                to: "e4".to_string()
            })
        );
        assert_eq!(
            Command::parse("  GET_MOVES  b1 "),
            Ok(Command::GetMoves("b1".to_string()))
        );
        assert_eq!(Command::parse("Exit"), Ok(Command::Exit));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("history"), Ok(Command::History));
        assert_eq!(Command::parse("MOVES"), Ok(Command::AllMoves));
    }

    #[test]
    fn test_parse_errors() {
        for line in &["", "   ", "move e2", "move e2 e4 e5", "get_moves", "dance"] {
            assert_eq!(Command::parse(line), Err(CommandError), "{:?}", line);
        }
    }

    #[test]
    fn test_dispatch() {
        let mut g = Game::default();
        assert_eq!(
            dispatch(&mut g, Command::GetMoves("g1".to_string())),
            Outcome::Continue("F3 H3".to_string())
        );
        assert_eq!(
            dispatch(&mut g, Command::GetMoves("e4".to_string())),
            Outcome::Continue("No moves available.".to_string())
        );
        assert_eq!(
            dispatch(
                &mut g,
                Command::Move {
                    from: "b1".to_string(),
                    to: "b2".to_string()
                }
            ),
            Outcome::Continue("Moving from B1 to B2 is not a valid move".to_string())
        );
        assert_eq!(
            dispatch(
                &mut g,
                Command::Move {
                    from: "g1".to_string(),
                    to: "f3".to_string()
                }
            ),
            Outcome::Continue("Moved white knight from G1 to F3.".to_string())
        );
        assert_eq!(
            dispatch(&mut g, Command::History),
            Outcome::Continue("Moved white knight from G1 to F3.".to_string())
        );
        match dispatch(&mut g, Command::AllMoves) {
            Outcome::Continue(text) => {
                assert_eq!(text.split(' ').count(), 20);
                assert!(text.contains("B8-C6"));
            }
            Outcome::Quit => panic!("listing moves must not quit"),
        }
        assert_eq!(dispatch(&mut g, Command::Exit), Outcome::Quit);
    }
}
