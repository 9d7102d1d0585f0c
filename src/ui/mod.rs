//! Terminal UI scenes and shared widgets.

pub mod game_scene;
pub mod leaderboard_scene;
pub mod setup_scene;

use crate::board::Mark;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Display color for a mark: X warm red, O light blue.
pub fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::LightRed,
        Mark::O => Color::LightBlue,
    }
}

/// Render a 2-line status bar: status message, then key hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render a vertical menu with a `> ` prefix on the selected row.
pub fn render_menu(frame: &mut Frame, area: Rect, options: &[String], selected: usize) {
    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let (prefix, style) = if i == selected {
                (
                    "> ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::Gray))
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", prefix, option),
                style,
            )))
        })
        .collect();
    frame.render_widget(List::new(items), area);
}

/// Render the titled outer frame and return its inner area.
pub fn render_app_frame(frame: &mut Frame, area: Rect, title: &str, border_color: Color) -> Rect {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
