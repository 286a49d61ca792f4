//! Screen regions, shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Position as Point, Rect};
use timeline_tictactoe::Position;

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the whole grid, separators included.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the whole grid, separators included.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Where each part of the screen is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    pub grid: Rect,
    pub cells: [Rect; 9],
    pub status: Rect,
    pub history: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Splits `area` into the game screen regions.
    pub fn compute(area: Rect) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(GRID_HEIGHT + 6), Constraint::Length(3)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(GRID_WIDTH + 2), Constraint::Length(28)])
            .split(outer[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(GRID_HEIGHT), // Board
                Constraint::Length(3), // Status
            ])
            .split(columns[0]);

        let grid = center_rect(left[1], GRID_WIDTH, GRID_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            Rect {
                x: grid.x + pos.col() as u16 * (CELL_WIDTH + 1),
                y: grid.y + pos.row() as u16 * (CELL_HEIGHT + 1),
                width: CELL_WIDTH,
                height: CELL_HEIGHT,
            }
            .intersection(grid)
        });

        Self {
            title: left[0],
            grid,
            cells,
            status: left[2],
            history: columns[1],
            footer: outer[1],
        }
    }

    /// Board cell under the given terminal coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = Point::new(column, row);
        self.cells
            .iter()
            .position(|cell| cell.contains(point))
            .and_then(Position::from_index)
    }

    /// Row within the visible move list under the given coordinate.
    pub fn history_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.history_inner();
        inner
            .contains(Point::new(column, row))
            .then(|| usize::from(row - inner.y))
    }

    /// Move list area inside its border.
    pub fn history_inner(&self) -> Rect {
        self.history.inner(Margin {
            horizontal: 1,
            vertical: 1,
        })
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
