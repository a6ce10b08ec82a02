//! Modal dialogs: help and logs.

use crate::constants::DIALOG_TITLE_LOGS;
use crate::ui::components::common::create_panel_block;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

pub const HELP_TEXT: &str = r"
POKEDECK
========

SCREENS
-------
Tab / Shift+Tab   Next / previous screen
1-4               Jump to screen (lookup screen only)

LOOKUP
------
↑↓ or j/k         Move in the pokemon list
Enter             Show details for the highlighted pokemon
d                 Remove the highlighted pokemon from the list
x                 Dismiss the error banner

ROSTER
------
Type + Enter      Add a pokemon at the top
↑↓ + Del          Delete the highlighted pokemon
Ctrl+T            Switch between name and id rosters

FORM
----
Type              Validate against the allow-list
Enter             Submit when the name is accepted

COLOR
-----
Type              Show the color box for a color name

GENERAL
-------
F1 or ?           Toggle this help
Ctrl+L or G       Show logs (? and G only outside text input)
Esc               Close dialog / quit
Ctrl+C            Quit
";

/// Modal dialog overlay. Only one dialog is visible at a time.
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    logs: Vec<String>,
    scroll_offset: usize,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            logs: Vec::new(),
            scroll_offset: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn set_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    fn content(&self) -> (String, String, Color) {
        match &self.dialog_type {
            Some(DialogType::Help) => (" Help ".to_string(), HELP_TEXT.trim_start().to_string(), Color::Cyan),
            Some(DialogType::Logs) => {
                let body = if self.logs.is_empty() {
                    "No log entries yet".to_string()
                } else {
                    self.logs.join("\n")
                };
                (format!(" {} ", DIALOG_TITLE_LOGS), body, Color::Yellow)
            }
            None => (String::new(), String::new(), Color::Reset),
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter => Action::HideDialog,
            KeyCode::Char('q') | KeyCode::Char('G') | KeyCode::Char('?') => Action::HideDialog,
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_offset = 0;
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll_offset = 0;
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_visible() {
            return;
        }

        let (width, height) = LayoutManager::help_panel_dimensions(rect.width, rect.height);
        let area = LayoutManager::centered_rect(width, height, rect);
        f.render_widget(Clear, area);

        let (title, body, color) = self.content();
        let total_lines = body.lines().count();
        let visible = area.height.saturating_sub(2) as usize;
        let max_scroll = total_lines.saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(body)
            .block(create_panel_block(&title, color))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));

        f.render_widget(paragraph, area);
    }
}
