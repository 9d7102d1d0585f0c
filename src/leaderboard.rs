//! Persisted win/loss leaderboard.
//!
//! One line per entry: `"Name": Wins=3, Games=5, Win%=60.0%`. The loader is
//! deliberately tolerant; this is a human-diffable text file, not a schema.
//! Win% is always recomputed, never trusted from the file.

use crate::constants::LEADERBOARD_FILE;
use crate::session::GameSession;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// name -> (wins, games), ordered by name so saves are stable
pub type LeaderboardMap = BTreeMap<String, (u32, u32)>;

/// Leaderboard store bound to one file path.
pub struct Leaderboard {
    path: PathBuf,
}

impl Leaderboard {
    /// Store at the default working-directory-relative file.
    pub fn new() -> Self {
        Self::at_path(LEADERBOARD_FILE)
    }

    /// Store at an explicit path (tests point this at a scratch file).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the store. A missing or unreadable file is an empty store;
    /// malformed lines are skipped individually.
    pub fn load(&self) -> LeaderboardMap {
        let mut map = LeaderboardMap::new();
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return map,
        };
        for line in contents.lines() {
            if let Some((name, wins, games)) = parse_line(line) {
                map.insert(name, (wins, games));
            }
        }
        map
    }

    /// Rewrite the whole store.
    pub fn save(&self, map: &LeaderboardMap) -> io::Result<()> {
        let mut out = fs::File::create(&self.path)?;
        for (name, &(wins, games)) in map {
            writeln!(
                out,
                "\"{}\": Wins={}, Games={}, Win%={:.1}%",
                name,
                wins,
                games,
                win_percent(wins, games)
            )?;
        }
        Ok(())
    }

    /// Fold a concluded game into the store: both participants gain a
    /// played game, the winner (if any) gains a win. Idempotent per game
    /// via the session's one-shot flag; AI participants are keyed by their
    /// difficulty-derived name.
    pub fn record_result(&self, session: &mut GameSession) -> io::Result<()> {
        if session.leaderboard_updated || !session.finished {
            return Ok(());
        }
        // Latched before the write; a failed save is not retried.
        session.leaderboard_updated = true;

        let mut map = self.load();
        let name1 = session.player1_name.clone();
        let name2 = entry_key(session, &session.player2_name);

        map.entry(name1.clone()).or_insert((0, 0));
        map.entry(name2.clone()).or_insert((0, 0));

        if let Some(entry) = map.get_mut(&name1) {
            entry.1 += 1;
        }
        if let Some(entry) = map.get_mut(&name2) {
            entry.1 += 1;
        }

        if let Some(winner) = session.winner {
            let winner_name = if winner == session.player1_mark {
                &name1
            } else {
                &name2
            };
            if let Some(entry) = map.get_mut(winner_name) {
                entry.0 += 1;
            }
        }

        self.save(&map)
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Leaderboard key for a participant: an AI opponent named "AI" is keyed
/// per difficulty so tiers don't share an entry.
pub fn entry_key(session: &GameSession, name: &str) -> String {
    if session.is_vs_ai() && name == "AI" {
        session.difficulty.ai_display_name().to_string()
    } else {
        name.to_string()
    }
}

/// Derived win percentage; games=0 is 0.0, never a division error.
pub fn win_percent(wins: u32, games: u32) -> f64 {
    if games == 0 {
        return 0.0;
    }
    100.0 * f64::from(wins) / f64::from(games)
}

/// Footer summary for a name: `wins/games (pct%)`.
pub fn summary_for(map: &LeaderboardMap, name: &str) -> String {
    match map.get(name) {
        Some(&(wins, games)) => {
            format!("{}/{} ({:.1}%)", wins, games, win_percent(wins, games))
        }
        None => "0/0 (0.0%)".to_string(),
    }
}

/// Parse one stored line. Strategies, first success wins:
/// quoted or comma-terminated name, then a labeled `Wins=`/`Games=` pair
/// anywhere after the name, then positional integer tokens.
/// Returns None for lines with no recoverable name.
fn parse_line(line: &str) -> Option<(String, u32, u32)> {
    if line.trim().is_empty() {
        return None;
    }

    let rest = line.trim_start();
    let (name, tail) = if let Some(quoted) = rest.strip_prefix('"') {
        let end = quoted.find('"')?;
        (quoted[..end].to_string(), &quoted[end + 1..])
    } else {
        let comma = rest.find(',')?;
        (rest[..comma].to_string(), &rest[comma + 1..])
    };
    let name = name.trim().to_string();

    let (wins, games) = parse_labeled(tail).unwrap_or_else(|| parse_positional(tail));
    Some((name, wins, games))
}

/// Labeled strategy: both `Wins=` and `Games=` present after the name.
fn parse_labeled(tail: &str) -> Option<(u32, u32)> {
    let wins_at = tail.find("Wins=")?;
    let games_at = tail.find("Games=")?;
    let wins = parse_int_after(&tail[wins_at + 5..]);
    let games = parse_int_after(&tail[games_at + 6..]);
    Some((wins, games))
}

/// Positional fallback: the first two integer tokens are wins then games;
/// a single token is wins with games=0; none is 0/0.
fn parse_positional(tail: &str) -> (u32, u32) {
    let mut numbers = Vec::new();
    let mut rest = tail;
    while !rest.is_empty() && numbers.len() < 2 {
        match rest.find(|c: char| c.is_ascii_digit() || c == '-') {
            Some(start) => {
                let token = &rest[start..];
                numbers.push(parse_int_after(token));
                let consumed = token
                    .char_indices()
                    .take_while(|&(i, c)| c.is_ascii_digit() || (i == 0 && c == '-'))
                    .count();
                rest = &token[consumed..];
            }
            None => break,
        }
    }
    match numbers.as_slice() {
        [wins, games, ..] => (*wins, *games),
        [wins] => (*wins, 0),
        [] => (0, 0),
    }
}

/// First integer at or after the start of `s`; parse failures are 0 and
/// negatives clamp to 0 (counters are non-negative by invariant).
fn parse_int_after(s: &str) -> u32 {
    let start = match s.find(|c: char| c.is_ascii_digit() || c == '-') {
        Some(i) => i,
        None => return 0,
    };
    let token = &s[start..];
    let len = token
        .char_indices()
        .take_while(|&(i, c)| c.is_ascii_digit() || (i == 0 && c == '-'))
        .count();
    token[..len].parse::<i64>().unwrap_or(0).max(0) as u32
}
