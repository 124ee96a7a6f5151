//! Line-oriented driver: reads column numbers from a reader, prints the board
//! to a writer. Used by `--plain` and handy for scripted games.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::info;

use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameState, GameStatus, Piece, COLS};

/// Play one game. Returns the final status, or `InProgress` if the input ended
/// or the player quit.
pub fn play<R: BufRead, W: Write>(
    config: &AppConfig,
    first: Piece,
    input: R,
    mut output: W,
) -> io::Result<GameStatus> {
    let mut searcher = config.search.searcher();
    let mut state = GameState::new(first);
    let delay = Duration::from_millis(config.game.computer_delay_ms);
    let mut lines = input.lines();

    info!(first = first.name(), "new game");
    writeln!(output, "{}", state.board())?;

    while !state.is_terminal() {
        match state.to_move() {
            Piece::Computer => {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                let outcome = state
                    .play_computer_turn(&mut searcher)
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                writeln!(output, "Computer plays column {}", outcome.column + 1)?;
                writeln!(output, "{}", state.board())?;
            }
            Piece::Player => {
                write!(output, "Your move (1-{COLS}, q to quit): ")?;
                output.flush()?;

                let Some(line) = lines.next().transpose()? else {
                    return Ok(state.status());
                };
                let line = line.trim();
                if line.eq_ignore_ascii_case("q") {
                    return Ok(state.status());
                }

                let column = match line.parse::<usize>() {
                    Ok(n) if n >= 1 => n - 1,
                    _ => {
                        writeln!(output, "Enter a column number between 1 and {COLS}")?;
                        continue;
                    }
                };

                match state.attempt_player_move(column) {
                    Ok(_) => writeln!(output, "{}", state.board())?,
                    Err(MoveError::Illegal(err)) => writeln!(output, "Can't drop there: {err}")?,
                    Err(err) => return Err(io::Error::new(io::ErrorKind::Other, err)),
                }
            }
        }
    }

    let verdict = match state.status() {
        GameStatus::PlayerWins => "You win!",
        GameStatus::ComputerWins => "Computer wins!",
        GameStatus::Draw => "It's a draw!",
        GameStatus::InProgress => "",
    };
    writeln!(output, "{verdict}")?;
    info!(status = ?state.status(), "game over");

    Ok(state.status())
}
