//! Game session state: participants, turn order, finish status.

use crate::board::{outcome, Board, Mark, Outcome, CELL_COUNT};

/// AI strength levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Medium)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Leaderboard key for an AI opponent at this tier, so results are
    /// tracked per difficulty rather than under a single "AI" entry.
    pub fn ai_display_name(&self) -> &'static str {
        match self {
            Self::Easy => "AI (Easy)",
            Self::Medium => "AI (Medium)",
            Self::Hard => "AI (Hard)",
        }
    }
}

/// Game mode chosen during setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsAi,
}

/// The mutable state of one game instance, replaced wholesale on restart.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub board: Board,
    pub player1_name: String,
    pub player2_name: String,
    pub player1_mark: Mark,
    pub player2_mark: Mark,
    /// Mark of the currently active turn
    pub turn_mark: Mark,
    /// Whether the active turn belongs to the AI
    pub ai_turn: bool,
    pub finished: bool,
    /// Winning mark; None while ongoing and on a draw
    pub winner: Option<Mark>,
    pub win_line: Option<[usize; 3]>,
    pub difficulty: Difficulty,
    pub mode: GameMode,
    pub player1_first: bool,
    /// One-shot flag so the leaderboard is updated once per finished game
    pub leaderboard_updated: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: [None; CELL_COUNT],
            player1_name: "Player 1".to_string(),
            player2_name: "Player 2".to_string(),
            player1_mark: Mark::X,
            player2_mark: Mark::O,
            turn_mark: Mark::X,
            ai_turn: false,
            finished: false,
            winner: None,
            win_line: None,
            difficulty: Difficulty::Medium,
            mode: GameMode::HumanVsAi,
            player1_first: true,
            leaderboard_updated: false,
        }
    }

    /// Assign player 1's mark; player 2 always takes the opposite.
    pub fn set_player1_mark(&mut self, mark: Mark) {
        self.player1_mark = mark;
        self.player2_mark = mark.opponent();
    }

    /// Clear the board and re-derive the opening turn from the
    /// first-mover choice and symbol assignment.
    pub fn reset(&mut self) {
        self.board = [None; CELL_COUNT];
        self.finished = false;
        self.winner = None;
        self.win_line = None;
        self.leaderboard_updated = false;
        if self.player1_first {
            self.turn_mark = self.player1_mark;
            self.ai_turn = false;
        } else {
            self.turn_mark = self.player2_mark;
            self.ai_turn = self.is_vs_ai();
        }
    }

    pub fn is_vs_ai(&self) -> bool {
        self.mode == GameMode::HumanVsAi
    }

    /// Mark of the AI-controlled participant. The setup flow always seats
    /// the AI as player 2.
    pub fn ai_mark(&self) -> Mark {
        self.player2_mark
    }

    /// Display name for a mark's owner
    pub fn name_of(&self, mark: Mark) -> &str {
        if mark == self.player1_mark {
            &self.player1_name
        } else {
            &self.player2_name
        }
    }

    /// Name of the participant whose turn it is
    pub fn active_name(&self) -> &str {
        self.name_of(self.turn_mark)
    }

    /// Whether `index` is a legal move for the active turn
    pub fn is_legal_move(&self, index: usize) -> bool {
        !self.finished && index < CELL_COUNT && self.board[index].is_none()
    }

    /// Apply a move by the human whose turn it is. Attempts on a filled
    /// cell, after the game is finished, or during the AI's turn are
    /// silently ignored.
    pub fn play_human(&mut self, index: usize) -> bool {
        if self.ai_turn {
            return false;
        }
        self.place(index)
    }

    /// Apply a move chosen by the AI move selector.
    pub fn play_ai(&mut self, index: usize) -> bool {
        if !self.ai_turn {
            return false;
        }
        self.place(index)
    }

    fn place(&mut self, index: usize) -> bool {
        if !self.is_legal_move(index) {
            return false;
        }
        self.board[index] = Some(self.turn_mark);
        self.check_finish();
        if !self.finished {
            self.advance_turn();
        }
        true
    }

    /// Run win detection and latch the result into the session.
    fn check_finish(&mut self) {
        match outcome(&self.board) {
            Some(Outcome::Win { mark, line }) => {
                self.finished = true;
                self.winner = Some(mark);
                self.win_line = Some(line);
            }
            Some(Outcome::Draw) => {
                self.finished = true;
                self.winner = None;
                self.win_line = None;
            }
            None => {
                self.finished = false;
                self.winner = None;
                self.win_line = None;
            }
        }
    }

    /// Hand the turn to the other participant.
    fn advance_turn(&mut self) {
        self.turn_mark = self.turn_mark.opponent();
        self.ai_turn = self.is_vs_ai() && self.turn_mark == self.player2_mark;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
