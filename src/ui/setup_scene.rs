//! Configuration flow rendering: menus and name entry.

use super::{render_app_frame, render_menu, render_status_bar};
use crate::setup::SetupFlow;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the current setup step.
pub fn render_setup_scene(frame: &mut Frame, area: Rect, flow: &SetupFlow) {
    let inner = render_app_frame(frame, area, " Tic-Tac-Toe ", Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Prompt
            Constraint::Min(5),    // Menu or input
            Constraint::Length(2), // Controls
        ])
        .split(inner);

    let prompt = Paragraph::new(flow.prompt())
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(prompt, chunks[0]);

    if flow.is_text_step() {
        render_name_input(frame, chunks[1], flow);
        render_status_bar(
            frame,
            chunks[2],
            "",
            Color::White,
            &[("[Enter]", "Confirm"), ("[Backspace]", "Edit"), ("[Esc]", "Quit")],
        );
    } else {
        let options = flow.options();
        let menu_height = (options.len() as u16).min(chunks[1].height);
        let menu_width = 20u16.min(chunks[1].width);
        let x = chunks[1].x + (chunks[1].width.saturating_sub(menu_width)) / 2;
        let y = chunks[1].y + (chunks[1].height.saturating_sub(menu_height)) / 2;
        let menu_area = Rect::new(x, y, menu_width, menu_height);
        render_menu(frame, menu_area, &options, flow.selected);
        render_status_bar(
            frame,
            chunks[2],
            "",
            Color::White,
            &[("[Up/Down]", "Select"), ("[Enter]", "Confirm"), ("[Esc]", "Quit")],
        );
    }
}

fn render_name_input(frame: &mut Frame, area: Rect, flow: &SetupFlow) {
    let input_width = 38u16.min(area.width);
    let input_height = 3u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(input_width)) / 2;
    let y = area.y + (area.height.saturating_sub(input_height)) / 2;
    let input_area = Rect::new(x, y, input_width, input_height);

    let input_widget = Paragraph::new(format!("{}_", flow.input))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White));
    frame.render_widget(input_widget, input_area);
}
