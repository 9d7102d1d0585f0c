//! Game board rendering: grid, turn header, winning-line highlight,
//! leaderboard footer.

use super::{mark_color, render_app_frame, render_status_bar};
use crate::board::{cell_index, BOARD_SIZE};
use crate::session::GameSession;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Per-frame leaderboard summaries for the two active participants.
pub struct FooterSummaries {
    pub player1: String,
    pub player2: String,
}

/// Render the game scene.
pub fn render_game_scene(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    cursor: usize,
    summaries: &FooterSummaries,
) {
    let inner = render_app_frame(frame, area, " Tic-Tac-Toe ", Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Players header
            Constraint::Length(1), // Turn / result line
            Constraint::Min(11),   // Board
            Constraint::Length(2), // Leaderboard footer
            Constraint::Length(2), // Status bar
        ])
        .split(inner);

    render_players_header(frame, chunks[0], session);
    render_turn_line(frame, chunks[1], session);
    render_board(frame, chunks[2], session, cursor);
    render_footer(frame, chunks[3], session, summaries);
    render_controls(frame, chunks[4], session);
}

fn render_players_header(frame: &mut Frame, area: Rect, session: &GameSession) {
    let line1 = Line::from(Span::styled(
        format!(
            " {} ({})",
            session.player1_name,
            session.player1_mark.symbol()
        ),
        Style::default().fg(mark_color(session.player1_mark)),
    ));
    let line2 = Line::from(Span::styled(
        format!(
            " {} ({})",
            session.player2_name,
            session.player2_mark.symbol()
        ),
        Style::default().fg(mark_color(session.player2_mark)),
    ));
    frame.render_widget(Paragraph::new(vec![line1, line2]), area);
}

fn render_turn_line(frame: &mut Frame, area: Rect, session: &GameSession) {
    let (text, color) = if session.finished {
        match session.winner {
            Some(mark) => (
                format!("{} WINS!", session.name_of(mark)),
                mark_color(mark),
            ),
            None => ("DRAW!".to_string(), Color::White),
        }
    } else {
        (
            format!(
                "{} ({})",
                session.active_name(),
                session.turn_mark.symbol()
            ),
            mark_color(session.turn_mark),
        )
    };
    let turn = Paragraph::new(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(turn, area);
}

/// Each cell renders 3 rows tall and 7 columns wide, separated by grid lines.
fn render_board(frame: &mut Frame, area: Rect, session: &GameSession, cursor: usize) {
    const CELL_W: u16 = 7;
    const CELL_H: u16 = 3;
    let board_width = CELL_W * 3 + 2;
    let board_height = CELL_H * 3 + 2;
    if area.width < board_width || area.height < board_height {
        return;
    }
    let x0 = area.x + (area.width - board_width) / 2;
    let y0 = area.y + (area.height - board_height) / 2;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let index = cell_index(row, col);
            let x = x0 + col as u16 * (CELL_W + 1);
            let y = y0 + row as u16 * (CELL_H + 1);
            render_cell(frame, Rect::new(x, y, CELL_W, CELL_H), session, index, cursor);
        }
    }

    // Grid separators, horizontal first so intersections keep the bars
    let sep_style = Style::default().fg(Color::DarkGray);
    for i in 1..BOARD_SIZE as u16 {
        let sep_y = y0 + i * (CELL_H + 1) - 1;
        frame.render_widget(
            Paragraph::new(Span::styled(
                "-".repeat(board_width as usize),
                sep_style,
            )),
            Rect::new(x0, sep_y, board_width, 1),
        );
    }
    for i in 1..BOARD_SIZE as u16 {
        let sep_x = x0 + i * (CELL_W + 1) - 1;
        for dy in 0..board_height {
            frame.render_widget(
                Paragraph::new(Span::styled("|", sep_style)),
                Rect::new(sep_x, y0 + dy, 1, 1),
            );
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, session: &GameSession, index: usize, cursor: usize) {
    let on_win_line = session
        .win_line
        .map_or(false, |line| line.contains(&index));
    let is_cursor = !session.finished && !session.ai_turn && index == cursor;

    let (symbol, mut style) = match session.board[index] {
        Some(mark) => (
            mark.symbol(),
            Style::default()
                .fg(mark_color(mark))
                .add_modifier(Modifier::BOLD),
        ),
        None => (".", Style::default().fg(Color::DarkGray)),
    };
    if on_win_line {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }
    if is_cursor {
        style = style.bg(Color::Blue);
    }

    // Center the mark in the middle row of the cell
    let mid_y = area.y + area.height / 2;
    let text = format!("{:^width$}", symbol, width = area.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(text, style)),
        Rect::new(area.x, mid_y, area.width, 1),
    );
}

fn render_footer(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    summaries: &FooterSummaries,
) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}: {}", session.player1_name, summaries.player1),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!(" {}: {}", session.player2_name, summaries.player2),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, session: &GameSession) {
    if session.finished {
        render_status_bar(
            frame,
            area,
            "Game over - press any key to play again",
            Color::Yellow,
            &[("[r]", "Restart"), ("[l]", "Leaderboard"), ("[q]", "Quit")],
        );
    } else if session.ai_turn {
        render_status_bar(frame, area, "Opponent is thinking...", Color::Yellow, &[]);
    } else {
        render_status_bar(
            frame,
            area,
            "Your move",
            Color::White,
            &[
                ("[Arrows]", "Move"),
                ("[Enter]", "Place"),
                ("[1-9]", "Cell"),
                ("[r]", "Restart"),
                ("[l]", "Leaderboard"),
                ("[q]", "Quit"),
            ],
        );
    }
}
