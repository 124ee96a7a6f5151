use crate::ai::Searcher;
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameState, GameStatus, MoveOutcome, Piece, CENTER_COL, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub struct App {
    config: AppConfig,
    searcher: Searcher,
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    computer_due: Option<Instant>,
    last_move: Option<MoveOutcome>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let searcher = config.search.searcher();
        let mut app = App {
            config,
            searcher,
            game_state: GameState::default(),
            selected_column: CENTER_COL,
            should_quit: false,
            message: None,
            computer_due: None,
            last_move: None,
        };
        app.restart();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Start a fresh game, scheduling the computer if it moves first.
    fn restart(&mut self) {
        let first = self.config.game.first_mover.resolve(&mut rand::rng());
        self.game_state = GameState::new(first);
        self.selected_column = CENTER_COL;
        self.last_move = None;
        self.computer_due = None;
        self.message = None;
        info!(first = first.name(), "new game");
        self.schedule_computer(Instant::now());
    }

    fn schedule_computer(&mut self, now: Instant) {
        if !self.game_state.is_terminal() && self.game_state.to_move() == Piece::Computer {
            let delay = Duration::from_millis(self.config.game.computer_delay_ms);
            self.computer_due = Some(now + delay);
        }
    }

    /// Play the computer's move once its cosmetic delay has passed.
    fn tick(&mut self, now: Instant) {
        match self.computer_due {
            Some(due) if now >= due => {
                self.computer_due = None;
                match self.game_state.play_computer_turn(&mut self.searcher) {
                    Ok(outcome) => self.record(outcome),
                    Err(err) => warn!(%err, "computer move rejected"),
                }
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.attempt_player_move(self.selected_column) {
            Ok(outcome) => {
                self.message = None;
                self.record(outcome);
                self.schedule_computer(Instant::now());
            }
            Err(MoveError::NotYourTurn(_)) => {
                self.message = Some("Computer is thinking...".to_string());
            }
            Err(err) => {
                self.message = Some(format!("Can't drop there: {err}"));
            }
        }
    }

    fn record(&mut self, outcome: MoveOutcome) {
        self.last_move = Some(outcome);
        let message = match outcome.status {
            GameStatus::InProgress => return,
            GameStatus::PlayerWins => "You win!",
            GameStatus::ComputerWins => "Computer wins!",
            GameStatus::Draw => "It's a draw!",
        };
        info!(status = ?outcome.status, "game over");
        self.message = Some(message.to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            self.last_move.as_ref(),
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
