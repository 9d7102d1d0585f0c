// Event loop timing constants
pub const POLL_INTERVAL_MS: u64 = 50;

// Delay before a computed AI move is applied, so the opponent
// doesn't appear to move instantaneously
pub const AI_MOVE_DELAY_MS: u64 = 180;

// Name entry constants
pub const NAME_MAX_LEN: usize = 32;

// Leaderboard file, relative to the working directory
pub const LEADERBOARD_FILE: &str = "leaderboard.txt";
