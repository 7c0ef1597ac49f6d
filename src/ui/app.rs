use crate::console::Scoreboard;
use crate::game::{GameOutcome, GameState, MoveError, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    scoreboard: Scoreboard,
    first_player: Option<Player>,
    rng: StdRng,
}

impl App {
    pub fn new(rng: StdRng, first_player: Option<Player>) -> Self {
        let mut app = App {
            game_state: GameState::starting_with(Player::Red),
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
            scoreboard: Scoreboard::default(),
            first_player,
            rng,
        };
        app.new_game();
        app
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
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
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let column = c as usize - '0' as usize;
                if column < COLS {
                    self.selected_column = column;
                    self.drop_piece();
                } else {
                    self.message = Some(format!("Choose a column from 0 to {}", COLS - 1));
                }
            }
            KeyCode::Char('r') => {
                self.new_game();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn new_game(&mut self) {
        self.game_state = match self.first_player {
            Some(player) => GameState::starting_with(player),
            None => GameState::new(&mut self.rng),
        };
        self.selected_column = COLS / 2;
        tracing::info!(first = self.game_state.current_player().name(), "game started");
    }

    /// Drop disc in selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move(self.selected_column) {
            Ok(Some(outcome)) => {
                self.scoreboard.record(outcome);
                self.message = Some(match outcome {
                    GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                    GameOutcome::Draw => "It's a draw!".to_string(),
                });
            }
            Ok(None) => {}
            Err(MoveError::ColumnFull) => {
                self.message = Some("This column is full. Please choose another one.".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.scoreboard,
        );
    }
}
