//! Main application state and rendering

use crate::game::io::{Choice, Notification, PlayerIo, Prompt};
use crate::game::{narrative, InvestigationReport};
use crate::data::Severity;
use crate::tui::widgets::{ClueMeter, RoomCard};
use crate::tui::{
    create_content_layout, create_main_layout, create_side_layout, severity_color, styled_block,
    Theme, HELP_TEXT, SMALL_LOGO,
};
use crate::{GameError, Result, VERSION};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Exploring,
    Report,
}

/// What a key press means to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Choice(Choice),
    Abort,
}

/// Application state
pub struct App {
    pub theme: Theme,
    pub current_screen: Screen,
    pub room: String,
    pub left: Option<String>,
    pub right: Option<String>,
    pub notebook: Vec<String>,
    pub clues_total: usize,
    pub messages: Vec<(Severity, String)>,
    pub report: Vec<String>,
}

impl App {
    pub fn new(clues_total: usize) -> Self {
        Self {
            theme: Theme::default(),
            current_screen: Screen::Exploring,
            room: String::new(),
            left: None,
            right: None,
            notebook: Vec::new(),
            clues_total,
            messages: vec![
                (Severity::Info, narrative::TITLE.to_string()),
                (Severity::Info, narrative::INTRO.to_string()),
            ],
            report: Vec::new(),
        }
    }

    /// Remember what the player is being asked
    pub fn set_prompt(&mut self, prompt: &Prompt<'_>) {
        self.room = prompt.room.to_string();
        self.left = prompt.left.map(String::from);
        self.right = prompt.right.map(String::from);
    }

    pub fn apply(&mut self, notification: &Notification) {
        match notification {
            Notification::EnteredRoom { room } => {
                self.room = room.clone();
                self.left = None;
                self.right = None;
            }
            Notification::ClueFound { clue, .. } => {
                if let Err(pos) = self.notebook.binary_search(clue) {
                    self.notebook.insert(pos, clue.clone());
                }
            }
            _ => {}
        }
        let severity = narrative::severity(notification);
        for line in narrative::describe(notification) {
            self.messages.push((severity, line));
        }
    }

    pub fn show_report(&mut self, report: &InvestigationReport) {
        self.report = narrative::report_lines(report);
        self.current_screen = Screen::Report;
    }

    /// Handle keyboard input
    pub fn handle_key(&self, key: KeyEvent) -> Option<KeyOutcome> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(KeyOutcome::Abort)
            }
            KeyCode::Esc => Some(KeyOutcome::Choice(Choice::Quit)),
            KeyCode::Left => Some(KeyOutcome::Choice(Choice::Left)),
            KeyCode::Right => Some(KeyOutcome::Choice(Choice::Right)),
            KeyCode::Char(c) => Some(KeyOutcome::Choice(Choice::from_key(c))),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        match self.current_screen {
            Screen::Exploring => self.render_game(frame),
            Screen::Report => self.render_report(frame),
        }
    }

    fn render_game(&self, frame: &mut Frame) {
        let chunks = create_main_layout(frame.area());
        self.render_header(frame, chunks[0]);

        let content = create_content_layout(chunks[1]);
        self.render_side_panel(frame, content[0]);
        self.render_messages(frame, content[1]);

        self.render_status_bar(frame, chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![Span::styled(
            format!("{}v{} ", SMALL_LOGO, VERSION),
            Style::default().fg(self.theme.header).add_modifier(Modifier::BOLD),
        )]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(header, area);
    }

    fn render_side_panel(&self, frame: &mut Frame, area: Rect) {
        let side = create_side_layout(area);

        let room_block = styled_block("Room", &self.theme);
        let inner = room_block.inner(side[0]);
        frame.render_widget(room_block, side[0]);
        frame.render_widget(
            RoomCard::new(&self.room, self.left.as_deref(), self.right.as_deref()),
            inner,
        );

        let notebook_block = styled_block("Notebook", &self.theme);
        let inner = notebook_block.inner(side[1]);
        frame.render_widget(notebook_block, side[1]);
        if inner.height == 0 {
            return;
        }
        let meter_area = Rect { height: inner.height.min(2), ..inner };
        frame.render_widget(ClueMeter::new(self.notebook.len(), self.clues_total), meter_area);

        let list_area = Rect {
            y: inner.y + meter_area.height,
            height: inner.height - meter_area.height,
            ..inner
        };
        let items: Vec<ListItem> = self
            .notebook
            .iter()
            .map(|c| ListItem::new(format!("- {}", c)).style(Style::default().fg(self.theme.success)))
            .collect();
        frame.render_widget(List::new(items), list_area);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        let visible_lines = area.height.saturating_sub(2) as usize;
        let start = self.messages.len().saturating_sub(visible_lines);
        let lines: Vec<Line> = self.messages[start..]
            .iter()
            .map(|(severity, text)| {
                Line::from(Span::styled(text.clone(), Style::default().fg(severity_color(severity))))
            })
            .collect();
        let log = Paragraph::new(lines)
            .block(styled_block("Investigation", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(log, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status = Paragraph::new(Span::styled(HELP_TEXT, Style::default().fg(self.theme.fg)))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(status, area);
    }

    fn render_report(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);

        let mut lines: Vec<Line> = self
            .report
            .iter()
            .map(|l| {
                let style = if l.starts_with(">>") {
                    Style::default().fg(self.theme.alert).add_modifier(Modifier::BOLD)
                } else if l.starts_with("---") {
                    Style::default().fg(self.theme.accent)
                } else {
                    Style::default().fg(self.theme.fg)
                };
                Line::from(Span::styled(l.clone(), style))
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press any key to leave",
            Style::default().fg(self.theme.warning),
        )));

        let report = Paragraph::new(lines)
            .block(styled_block("Case Closed", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(report, area);
    }
}

/// Full-screen front-end: draws the app and blocks on key presses.
pub struct TuiIo<B: Backend> {
    pub terminal: Terminal<B>,
    pub app: App,
}

impl<B: Backend> TuiIo<B> {
    pub fn new(terminal: Terminal<B>, clues_total: usize) -> Self {
        Self {
            terminal,
            app: App::new(clues_total),
        }
    }

    pub fn draw(&mut self) -> Result<()> {
        let app = &self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }

    fn next_key(&mut self) -> Result<KeyOutcome> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(outcome) = self.app.handle_key(key) {
                    return Ok(outcome);
                }
            }
        }
    }

    /// Show the final report and wait for a key
    pub fn finish(&mut self, report: &InvestigationReport) -> Result<()> {
        self.app.show_report(report);
        self.draw()?;
        self.next_key()?;
        Ok(())
    }
}

impl<B: Backend> PlayerIo for TuiIo<B> {
    fn prompt_direction_choice(&mut self, prompt: &Prompt<'_>) -> Result<Choice> {
        self.app.set_prompt(prompt);
        self.draw()?;
        match self.next_key()? {
            KeyOutcome::Choice(choice) => Ok(choice),
            KeyOutcome::Abort => Err(GameError::InputClosed.into()),
        }
    }

    fn notify(&mut self, notification: &Notification) -> Result<()> {
        self.app.apply(notification);
        self.draw()
    }
}
