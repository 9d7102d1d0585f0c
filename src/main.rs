use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use noughts::ai;
use noughts::board::{cell_index, BOARD_SIZE};
use noughts::constants::{AI_MOVE_DELAY_MS, POLL_INTERVAL_MS};
use noughts::leaderboard::{entry_key, summary_for, Leaderboard};
use noughts::session::GameSession;
use noughts::setup::{SetupFlow, SetupInput};
use noughts::ui::game_scene::{render_game_scene, FooterSummaries};
use noughts::ui::leaderboard_scene::render_leaderboard_scene;
use noughts::ui::setup_scene::render_setup_scene;

enum Screen {
    Setup,
    Game,
    LeaderboardView,
}

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore the terminal even when the loop returned an error
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let store = Leaderboard::new();

    let mut screen = Screen::Setup;
    let mut flow = SetupFlow::new();
    let mut session: Option<GameSession> = None;
    // Board cursor, starting on the center cell
    let mut cursor: usize = 4;
    // When a pending AI move becomes due
    let mut ai_move_due: Option<Instant> = None;

    loop {
        match screen {
            Screen::Setup => {
                terminal.draw(|frame| render_setup_scene(frame, frame.size(), &flow))?;

                if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        let input = match key.code {
                            KeyCode::Esc => break,
                            KeyCode::Up => Some(SetupInput::Up),
                            KeyCode::Down => Some(SetupInput::Down),
                            KeyCode::Enter => Some(SetupInput::Confirm),
                            KeyCode::Backspace => Some(SetupInput::Backspace),
                            KeyCode::Char(c) => Some(SetupInput::Char(c)),
                            _ => None,
                        };
                        if let Some(input) = input {
                            if flow.handle_input(input) {
                                session = Some(flow.build_session());
                                cursor = 4;
                                ai_move_due = None;
                                screen = Screen::Game;
                            }
                        }
                    }
                }
            }

            Screen::Game => {
                let sess = match session.as_mut() {
                    Some(sess) => sess,
                    None => {
                        screen = Screen::Setup;
                        continue;
                    }
                };

                // Footer summaries are re-read from disk every frame
                let map = store.load();
                let key2 = entry_key(sess, &sess.player2_name);
                let summaries = FooterSummaries {
                    player1: summary_for(&map, &sess.player1_name),
                    player2: summary_for(&map, &key2),
                };
                terminal.draw(|frame| {
                    render_game_scene(frame, frame.size(), &*sess, cursor, &summaries)
                })?;

                let mut restart = false;
                if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind == KeyEventKind::Press {
                            match key.code {
                                KeyCode::Char('q') => break,
                                KeyCode::Char('l') => screen = Screen::LeaderboardView,
                                KeyCode::Char('r') => restart = true,
                                // Any other key on a finished game restarts
                                _ if sess.finished => restart = true,
                                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                                    cursor = move_cursor(cursor, key.code);
                                }
                                KeyCode::Enter => {
                                    sess.play_human(cursor);
                                }
                                KeyCode::Char(c @ '1'..='9') => {
                                    sess.play_human(c as usize - '1' as usize);
                                }
                                _ => {}
                            }
                        }
                    }
                }

                // Deferred AI move: computed when due, not on the turn change
                if !sess.finished && sess.ai_turn {
                    match ai_move_due {
                        None => {
                            ai_move_due =
                                Some(Instant::now() + Duration::from_millis(AI_MOVE_DELAY_MS));
                        }
                        Some(due) => {
                            if Instant::now() >= due {
                                if let Some(index) = ai::choose_move(sess, &mut rng) {
                                    sess.play_ai(index);
                                }
                                ai_move_due = None;
                            }
                        }
                    }
                } else {
                    ai_move_due = None;
                }

                // One-shot leaderboard update; a write failure degrades to
                // an unrecorded game
                if sess.finished && !sess.leaderboard_updated {
                    let _ = store.record_result(sess);
                }

                if restart {
                    session = None;
                    flow = SetupFlow::new();
                    ai_move_due = None;
                    screen = Screen::Setup;
                }
            }

            Screen::LeaderboardView => {
                let map = store.load();
                terminal.draw(|frame| render_leaderboard_scene(frame, frame.size(), &map))?;

                if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind == KeyEventKind::Press {
                            screen = if session.is_some() {
                                Screen::Game
                            } else {
                                Screen::Setup
                            };
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Move the board cursor one cell, clamped at the grid edges.
fn move_cursor(cursor: usize, code: KeyCode) -> usize {
    let row = cursor / BOARD_SIZE;
    let col = cursor % BOARD_SIZE;
    match code {
        KeyCode::Up if row > 0 => cell_index(row - 1, col),
        KeyCode::Down if row + 1 < BOARD_SIZE => cell_index(row + 1, col),
        KeyCode::Left if col > 0 => cell_index(row, col - 1),
        KeyCode::Right if col + 1 < BOARD_SIZE => cell_index(row, col + 1),
        _ => cursor,
    }
}
