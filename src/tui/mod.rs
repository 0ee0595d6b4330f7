//! Terminal User Interface
//!
//! Front-ends for the game: a full-screen ratatui app and a plain
//! line console. Both implement [`crate::game::io::PlayerIo`].

pub mod app;
pub mod console;
pub mod widgets;

pub use app::{App, TuiIo};
pub use console::ConsoleIo;

use crate::data::Severity;
use crate::{GameError, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Terminal,
};
use std::io::{stdout, Stdout};

/// Color scheme for the game
pub struct Theme {
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Get color for severity level
pub fn severity_color(severity: &Severity) -> Color {
    match severity {
        Severity::Info => Color::Gray,
        Severity::Discovery => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Verdict => Color::Magenta,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// Header text
pub const SMALL_LOGO: &str = " DETECTIVE QUEST ";

/// Help text
pub const HELP_TEXT: &str = "e/l left · d/r right · s/q/Esc leave the mansion · Ctrl-C abort";

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(3),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (room + notebook side panel, log)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),  // Side panel
            Constraint::Percentage(65),  // Message log
        ])
        .split(area)
        .to_vec()
}

/// Split the side panel into room card and notebook
pub fn create_side_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),   // Room and exits
            Constraint::Min(4),      // Notebook
        ])
        .split(area)
        .to_vec()
}

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen
pub fn init_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode().map_err(|e| GameError::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| GameError::Terminal(e.to_string()))?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Undo [`init_terminal`]
pub fn restore_terminal(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode().map_err(|e| GameError::Terminal(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| GameError::Terminal(e.to_string()))?;
    terminal.show_cursor()?;
    Ok(())
}
