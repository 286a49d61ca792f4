//! UI rendering for the board, status line and move list.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use timeline_tictactoe::{Player, Position, Square, Status, rules::is_full};

use super::app::{App, Focus};
use super::layout::{AppLayout, CELL_HEIGHT, CELL_WIDTH, GRID_HEIGHT};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.set_area(area);
    let layout = AppLayout::compute(area);

    let title = Paragraph::new("Timeline - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, app);
    draw_status(frame, layout.status, app);
    draw_history(frame, layout.history, app);
    draw_footer(frame, layout.footer, app);
}

fn draw_board(frame: &mut Frame, layout: &AppLayout, app: &App) {
    let cell = " ".repeat(CELL_WIDTH as usize);
    let bar = "─".repeat(CELL_WIDTH as usize);
    let lines: Vec<Line> = (0..GRID_HEIGHT)
        .map(|y| {
            if (y + 1) % (CELL_HEIGHT + 1) == 0 {
                Line::from(format!("{bar}┼{bar}┼{bar}"))
            } else {
                Line::from(format!("{cell}│{cell}│{cell}"))
            }
        })
        .collect();
    let grid = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(grid, layout.grid);

    let game = app.game();
    let board = game.current_board();
    let winning_line = game.winning_line();

    for pos in Position::ALL {
        let square = board.get(pos);
        let mut style = match square {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Player::X) => {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            }
            Square::Occupied(Player::O) => {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            }
        };
        if winning_line.is_some_and(|line| line.contains(&pos)) {
            style = style.bg(Color::Green).fg(Color::Black);
        }
        if app.focus() == Focus::Board && pos == app.cursor() {
            style = style.bg(Color::White).fg(Color::Black);
        }

        let text = vec![
            Line::default(),
            Line::from(Span::raw(square.symbol())),
            Line::default(),
        ];
        let paragraph = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, layout.cells[pos.to_index()]);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.game().status();
    let color = match status {
        Status::Winner(_) => Color::Green,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let paragraph = Paragraph::new(status.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .game()
        .move_list()
        .into_iter()
        .map(|entry| {
            let marker = if entry.is_current { "● " } else { "  " };
            ListItem::new(format!("{}{}", marker, entry.label))
        })
        .collect();

    let highlight = if app.focus() == Focus::History {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("History"))
        .highlight_style(highlight)
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, app.history_state_mut());
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let text = if game.winner().is_none() && is_full(game.current_board()) {
        "Board full: jump back to keep playing | r: Restart | q: Quit"
    } else {
        match app.focus() {
            Focus::Board => {
                "←↑↓→: Move | Enter: Play | 1-9: Play cell | Tab: History | [ ]: Step | r: Restart | q: Quit"
            }
            Focus::History => "↑↓: Select | Enter: Jump | Tab: Board | [ ]: Step | r: Restart | q: Quit",
        }
    };
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
