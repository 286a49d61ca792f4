//! Application state and input handling.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{layout::Rect, widgets::ListState};
use timeline_tictactoe::{Game, MoveOutcome, Position};
use tracing::{debug, instrument, warn};

use super::input::move_cursor;
use super::layout::AppLayout;

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 grid.
    Board,
    /// The move list.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading events.
    Continue,
    /// Leave the event loop and restore the terminal.
    Quit,
}

/// Main application state.
///
/// The [`Game`] is the only source of truth for boards and history; the
/// rest is view state (cursor, focus, move list selection).
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    history_state: ListState,
    area: Rect,
}

impl App {
    /// Creates a new application with an empty board.
    pub fn new() -> Self {
        let mut history_state = ListState::default();
        history_state.select(Some(0));
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history_state,
            area: Rect::default(),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell highlighted on the board.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane that receives arrow keys and Enter.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move list selection, borrowed mutably for stateful rendering.
    pub fn history_state_mut(&mut self) -> &mut ListState {
        &mut self.history_state
    }

    /// Records the terminal area of the last frame for mouse hit-testing.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Handles one terminal event.
    #[instrument(skip(self), fields(current_move = self.game.current_move()))]
    pub fn handle_event(&mut self, event: &Event) -> Flow {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => {
                self.handle_mouse(*mouse);
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Char('[') => {
                if let Err(e) = self.game.step_back() {
                    warn!(error = %e, "Step back rejected");
                }
                self.sync_selection();
            }
            KeyCode::Char(']') => {
                if let Err(e) = self.game.step_forward() {
                    warn!(error = %e, "Step forward rejected");
                }
                self.sync_selection();
            }
            KeyCode::Char('r') => {
                if let Err(e) = self.game.restart() {
                    warn!(error = %e, "Restart rejected");
                }
                self.cursor = Position::Center;
                self.sync_selection();
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_index(d as usize - 1))
                {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        Flow::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(index) = self.history_state.selected() {
                    self.jump(index);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = AppLayout::compute(self.area);
        if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.play(pos);
        } else if let Some(row) = layout.history_row_at(mouse.column, mouse.row) {
            let index = self.history_state.offset() + row;
            // Clicks below the last entry land on empty list space.
            if index < self.game.history().len() {
                self.focus = Focus::History;
                self.jump(index);
            }
        }
    }

    fn play(&mut self, pos: Position) {
        if self.game.attempt_move(pos) == MoveOutcome::Applied {
            self.sync_selection();
        }
    }

    fn jump(&mut self, index: usize) {
        if let Err(e) = self.game.go_to_move(index) {
            warn!(error = %e, "Jump rejected");
        }
        self.sync_selection();
    }

    /// Keeps the list selection on the displayed move.
    fn sync_selection(&mut self) {
        self.history_state.select(Some(self.game.current_move()));
    }

    fn select_previous(&mut self) {
        let count = self.game.history().len();
        let i = match self.history_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.history_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = self.game.history().len();
        let i = match self.history_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.history_state.select(Some(i));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
