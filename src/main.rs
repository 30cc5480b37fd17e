use chess_rules::cli::{dispatch, Command, Outcome};
use chess_rules::{Game, GameConfig};
use std::io::{stdout, Write};
use text_io::try_read;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------
// Main
// ---------------------------------------------

/// Reads one line from stdin. `None` on end of input.
fn read_line() -> Option<String> {
    let line: Result<String, _> = try_read!("{}\n");
    line.ok()
}

fn ask_name(color: &str, default: &str) -> String {
    print!("Who will play as {} [{}]? ", color, default);
    let _ = stdout().flush();
    match read_line() {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => default.to_string(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("Let's play a game of chess!");
    let defaults = GameConfig::default();
    let config = GameConfig {
        white_name: ask_name("white", &defaults.white_name),
        black_name: ask_name("black", &defaults.black_name),
    };
    let mut game = Game::new(config);

    loop {
        println!(
            "It's {}'s turn. What would you like to do?",
            game.current_player()
        );
        println!("{}", game.display());

        let line = match read_line() {
            Some(l) => l,
            None => break,
        };
        match Command::parse(&line) {
            Ok(cmd) => match dispatch(&mut game, cmd) {
                Outcome::Continue(msg) => println!("{}", msg),
                Outcome::Quit => {
                    println!("Goodbye.");
                    break;
                }
            },
            Err(e) => println!("{}\n", e),
        }
    }
}
