use rand::Rng;

use super::io::{InputSource, View};
use crate::config::DisplayConfig;
use crate::error::SessionError;
use crate::game::{GameOutcome, GameState, Player, COLS};

/// Results tallied across the games of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub red_wins: u32,
    pub yellow_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(Player::Red) => self.red_wins += 1,
            GameOutcome::Winner(Player::Yellow) => self.yellow_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.red_wins + self.yellow_wins + self.draws
    }

    pub fn summary(&self) -> String {
        format!(
            "Games played: {}  |  Red: {}  Yellow: {}  Draws: {}",
            self.games_played(),
            self.red_wins,
            self.yellow_wins,
            self.draws
        )
    }
}

/// The console game loop: prompts, validates column input, drives the
/// engine, and offers a rematch after every finished game.
pub struct Session<I, V, R> {
    input: I,
    view: V,
    rng: R,
    display: DisplayConfig,
    first_player: Option<Player>,
    scoreboard: Scoreboard,
}

enum Replay {
    Again,
    Exit,
}

impl<I, V, R> Session<I, V, R>
where
    I: InputSource,
    V: View,
    R: Rng,
{
    pub fn new(input: I, view: V, rng: R, display: DisplayConfig) -> Self {
        Session {
            input,
            view,
            rng,
            display,
            first_player: None,
            scoreboard: Scoreboard::default(),
        }
    }

    /// Give every game's first move to `player` instead of drawing one.
    pub fn with_first_player(mut self, player: Option<Player>) -> Self {
        self.first_player = player;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Play games until the players decline a rematch or input runs out.
    pub fn run(&mut self) -> Result<Scoreboard, SessionError> {
        loop {
            let Some(outcome) = self.play_game()? else {
                tracing::info!("input closed during a game");
                break;
            };
            self.scoreboard.record(outcome);

            match self.ask_replay()? {
                Some(Replay::Again) => continue,
                Some(Replay::Exit) | None => break,
            }
        }

        tracing::info!(
            red_wins = self.scoreboard.red_wins,
            yellow_wins = self.scoreboard.yellow_wins,
            draws = self.scoreboard.draws,
            "session finished"
        );
        if self.scoreboard.games_played() > 0 {
            self.view.show_message(&self.scoreboard.summary())?;
        }
        self.view.show_message("Goodbye!")?;
        Ok(self.scoreboard)
    }

    /// Play one game to completion. `None` if input ran out first.
    pub fn play_game(&mut self) -> Result<Option<GameOutcome>, SessionError> {
        let mut state = match self.first_player {
            Some(player) => GameState::starting_with(player),
            None => GameState::new(&mut self.rng),
        };
        tracing::info!(first = state.current_player().name(), "game started");

        loop {
            self.view.clear()?;
            self.view.show_board(state.board())?;
            let prompt = format!(
                "{}'s turn. Choose a column (0-{}): ",
                self.label(state.current_player()),
                COLS - 1
            );
            self.view.show_message(&prompt)?;

            let Some(column) = self.read_column(&state)? else {
                return Ok(None);
            };

            if let Some(outcome) = state.apply_move(column)? {
                self.view.clear()?;
                self.view.show_board(state.board())?;
                let message = match outcome {
                    GameOutcome::Winner(winner) => format!("{} wins!", self.label(winner)),
                    GameOutcome::Draw => "It's a draw!".to_string(),
                };
                self.view.show_message(&message)?;
                tracing::info!(?outcome, moves = state.board().move_count(), "game over");
                return Ok(Some(outcome));
            }
        }
    }

    /// Read until the player names a column that is on the board and not
    /// full.
    fn read_column(&mut self, state: &GameState) -> Result<Option<usize>, SessionError> {
        loop {
            let Some(line) = self.input.read_line()? else {
                return Ok(None);
            };

            match line.trim().parse::<usize>() {
                Ok(column) if column < COLS => {
                    if !state.board().is_column_full(column) {
                        return Ok(Some(column));
                    }
                    tracing::debug!(column, "rejected full column");
                    self.view
                        .show_message("This column is full. Please choose another one.")?;
                }
                _ => {
                    tracing::debug!(input = %line, "rejected column input");
                    self.view.show_message(&format!(
                        "Invalid input. Please choose a column from 0 to {}",
                        COLS - 1
                    ))?;
                }
            }
        }
    }

    fn ask_replay(&mut self) -> Result<Option<Replay>, SessionError> {
        self.view.show_message("Press 1 to play again or 2 to exit.")?;
        loop {
            let Some(line) = self.input.read_line()? else {
                return Ok(None);
            };
            match line.as_str() {
                "1" => return Ok(Some(Replay::Again)),
                "2" => return Ok(Some(Replay::Exit)),
                _ => self
                    .view
                    .show_message("Invalid input. Please enter 1 to play again or 2 to exit.")?,
            }
        }
    }

    fn label(&self, player: Player) -> String {
        format!("{} ({})", player.name(), self.display.player_glyph(player))
    }
}
