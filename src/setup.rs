//! Pre-game configuration flow.
//!
//! The original sequence of modal menus, flattened into an explicit step
//! machine: mode -> symbol -> first mover -> names -> difficulty. The outer
//! event loop renders the current step and feeds one input at a time.

use crate::board::Mark;
use crate::constants::NAME_MAX_LEN;
use crate::session::{Difficulty, GameMode, GameSession};

/// Current configuration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    Mode,
    Symbol,
    FirstMover,
    PlayerOneName,
    PlayerTwoName,
    DifficultyChoice,
    Done,
}

/// Input actions for the setup flow (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupInput {
    Up,
    Down,
    Confirm,
    Char(char),
    Backspace,
}

/// State of the configuration flow. Collects choices step by step and
/// builds the session once every step has been answered.
#[derive(Debug, Clone)]
pub struct SetupFlow {
    pub step: SetupStep,
    /// Cursor within the current menu step
    pub selected: usize,
    /// Buffer for the current name-entry step
    pub input: String,
    mode: GameMode,
    player1_mark: Mark,
    player1_first: bool,
    player1_name: String,
    player2_name: String,
    difficulty: Difficulty,
}

impl SetupFlow {
    pub fn new() -> Self {
        Self {
            step: SetupStep::Mode,
            selected: 0,
            input: String::new(),
            mode: GameMode::HumanVsAi,
            player1_mark: Mark::X,
            player1_first: true,
            player1_name: String::new(),
            player2_name: String::new(),
            difficulty: Difficulty::Medium,
        }
    }

    /// Whether the current step takes text rather than a menu selection
    pub fn is_text_step(&self) -> bool {
        matches!(
            self.step,
            SetupStep::PlayerOneName | SetupStep::PlayerTwoName
        )
    }

    /// Title shown above the current step
    pub fn prompt(&self) -> &'static str {
        match self.step {
            SetupStep::Mode => "Choose game mode",
            SetupStep::Symbol => "Player 1: choose your mark",
            SetupStep::FirstMover => "Who moves first?",
            SetupStep::PlayerOneName => "Enter Player 1 name",
            SetupStep::PlayerTwoName => "Enter Player 2 name",
            SetupStep::DifficultyChoice => "Choose AI difficulty",
            SetupStep::Done => "",
        }
    }

    /// Menu option labels for the current step (empty on text steps)
    pub fn options(&self) -> Vec<String> {
        match self.step {
            SetupStep::Mode => vec!["Human vs Human".to_string(), "Human vs AI".to_string()],
            SetupStep::Symbol => vec!["Play as X".to_string(), "Play as O".to_string()],
            SetupStep::FirstMover => {
                let second = match self.mode {
                    GameMode::HumanVsAi => "AI first".to_string(),
                    GameMode::HumanVsHuman => "Player 2 first".to_string(),
                };
                vec!["Player 1 first".to_string(), second]
            }
            SetupStep::DifficultyChoice => Difficulty::ALL
                .iter()
                .map(|d| d.name().to_string())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Apply one input. Returns true once the flow has finished.
    pub fn handle_input(&mut self, input: SetupInput) -> bool {
        if self.is_text_step() {
            self.handle_text_input(input);
        } else {
            self.handle_menu_input(input);
        }
        self.step == SetupStep::Done
    }

    fn handle_menu_input(&mut self, input: SetupInput) {
        let option_count = self.options().len();
        match input {
            SetupInput::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            SetupInput::Down => {
                if option_count > 0 && self.selected + 1 < option_count {
                    self.selected += 1;
                }
            }
            SetupInput::Confirm => self.confirm_menu(),
            _ => {}
        }
    }

    fn handle_text_input(&mut self, input: SetupInput) {
        match input {
            SetupInput::Char(c) => {
                if (' '..='~').contains(&c) && self.input.chars().count() < NAME_MAX_LEN {
                    self.input.push(c);
                }
            }
            SetupInput::Backspace => {
                self.input.pop();
            }
            SetupInput::Confirm => {
                if !self.input.is_empty() {
                    self.confirm_name();
                }
            }
            _ => {}
        }
    }

    fn confirm_menu(&mut self) {
        match self.step {
            SetupStep::Mode => {
                self.mode = if self.selected == 0 {
                    GameMode::HumanVsHuman
                } else {
                    GameMode::HumanVsAi
                };
                self.advance(SetupStep::Symbol);
            }
            SetupStep::Symbol => {
                self.player1_mark = if self.selected == 0 { Mark::X } else { Mark::O };
                self.advance(SetupStep::FirstMover);
            }
            SetupStep::FirstMover => {
                self.player1_first = self.selected == 0;
                self.advance(SetupStep::PlayerOneName);
            }
            SetupStep::DifficultyChoice => {
                self.difficulty = Difficulty::from_index(self.selected);
                self.step = SetupStep::Done;
            }
            _ => {}
        }
    }

    fn confirm_name(&mut self) {
        match self.step {
            SetupStep::PlayerOneName => {
                self.player1_name = self.input.trim().to_string();
                match self.mode {
                    GameMode::HumanVsHuman => self.advance(SetupStep::PlayerTwoName),
                    GameMode::HumanVsAi => {
                        self.player2_name = "AI".to_string();
                        self.advance(SetupStep::DifficultyChoice);
                    }
                }
            }
            SetupStep::PlayerTwoName => {
                self.player2_name = self.input.trim().to_string();
                // No AI in this mode, so no difficulty to ask for
                self.step = SetupStep::Done;
            }
            _ => {}
        }
    }

    fn advance(&mut self, step: SetupStep) {
        self.step = step;
        self.selected = 0;
        self.input.clear();
    }

    /// Build a fresh session from the collected choices. Only meaningful
    /// once `handle_input` has returned true.
    pub fn build_session(&self) -> GameSession {
        let mut session = GameSession::new();
        session.mode = self.mode;
        session.set_player1_mark(self.player1_mark);
        session.player1_first = self.player1_first;
        session.player1_name = if self.player1_name.is_empty() {
            "Player 1".to_string()
        } else {
            self.player1_name.clone()
        };
        session.player2_name = if self.player2_name.is_empty() {
            "Player 2".to_string()
        } else {
            self.player2_name.clone()
        };
        session.difficulty = self.difficulty;
        session.reset();
        session
    }
}

impl Default for SetupFlow {
    fn default() -> Self {
        Self::new()
    }
}
