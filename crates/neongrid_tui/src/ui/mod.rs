//! Stateless UI rendering: everything derives from the app each frame.

mod board;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use neongrid::{GameStatus, Player};

use crate::app::App;

/// Renders the whole screen: title, player header, board, status,
/// history scrubber and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Length(3),  // Player header
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(2),  // Scrubber + help
        ])
        .split(frame.area());

    let title = Paragraph::new("N E O N G R I D")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_header(frame, chunks[1], app);
    board::draw_board(frame, chunks[2], app);
    draw_status(frame, chunks[3], app);
    draw_controls(frame, chunks[4], app);
}

/// X and O boxes flanking the verdict, active player highlighted.
fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    let status = app.game().status();
    let verdict = match status {
        GameStatus::InProgress => "VS",
        GameStatus::Won(_) => "VICTORY",
        GameStatus::Drawn => "STALEMATE",
    };

    draw_player_box(frame, cols[0], app, Player::X);
    let center = Paragraph::new(verdict)
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(center, cols[1]);
    draw_player_box(frame, cols[2], app, Player::O);
}

fn draw_player_box(frame: &mut Frame, area: Rect, app: &App, player: Player) {
    let active = app.game().status() == GameStatus::InProgress && app.game().to_move() == player;
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    let text = if active {
        format!("{} ACTIVE", player)
    } else {
        player.to_string()
    };
    let style = if active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let widget = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status_text = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, area);
}

/// History scrubber readout plus the key legend.
fn draw_controls(frame: &mut Frame, area: Rect, app: &App) {
    let history = app.game().history();
    let scrubber = Line::from(vec![
        Span::styled(
            "TIME TRAVEL: ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "MOVE {} / {}",
            history.cursor(),
            history.len() - 1
        )),
    ]);
    let help = Line::from(Span::styled(
        "arrows move - enter/1-9 place - [ ] scrub - r reset - q quit",
        Style::default().fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(vec![scrubber, help]).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
