//! Status bar component

use ratatui::{layout::Rect, style::Color, Frame};

use super::common::{create_instructions_paragraph, shortcuts, InstructionShortcut};
use crate::ui::core::Screen;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the shortcuts relevant to the active screen
    pub fn render(f: &mut Frame, area: Rect, active: Screen, pending_fetches: usize) {
        let mut instructions: Vec<InstructionShortcut> = match active {
            Screen::Lookup => vec![
                ("↑↓", Color::Cyan, " Move"),
                shortcuts::SEPARATOR,
                shortcuts::ENTER_SELECT,
                shortcuts::SEPARATOR,
                ("d", Color::Red, " Remove"),
            ],
            Screen::Roster => vec![
                shortcuts::ENTER_SUBMIT,
                shortcuts::SEPARATOR,
                shortcuts::DEL_DELETE,
                shortcuts::SEPARATOR,
                ("Ctrl+T", Color::Magenta, " Variant"),
            ],
            Screen::Form => vec![shortcuts::ENTER_SUBMIT],
            Screen::Color => vec![("Type", Color::Cyan, " a color name")],
        };

        instructions.extend([
            shortcuts::SEPARATOR,
            shortcuts::TAB_SCREEN,
            shortcuts::SEPARATOR,
            shortcuts::F1_HELP,
            shortcuts::SEPARATOR,
            shortcuts::ESC_QUIT,
        ]);

        if pending_fetches > 0 {
            instructions.push(shortcuts::SEPARATOR);
            instructions.push(("⟳", Color::Yellow, " fetching"));
        }

        f.render_widget(create_instructions_paragraph(&instructions), area);
    }
}
