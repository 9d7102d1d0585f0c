//! Full-leaderboard view.

use super::{render_app_frame, render_status_bar};
use crate::leaderboard::{win_percent, LeaderboardMap};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render every stored entry, ordered by name.
pub fn render_leaderboard_scene(frame: &mut Frame, area: Rect, map: &LeaderboardMap) {
    let inner = render_app_frame(frame, area, " Leaderboard ", Color::Yellow);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    let mut lines: Vec<Line> = Vec::new();
    if map.is_empty() {
        lines.push(Line::from(Span::styled(
            "No games recorded yet.",
            Style::default().fg(Color::Gray),
        )));
    } else {
        for (name, &(wins, games)) in map {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<24}", name),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "Wins={:<4} Games={:<4} Win%={:.1}%",
                        wins,
                        games,
                        win_percent(wins, games)
                    ),
                    Style::default().fg(Color::Gray),
                ),
            ]));
        }
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    render_status_bar(frame, chunks[1], "", Color::White, &[("[Any key]", "Back")]);
}
