use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A renderable piece of the UI that owns its local state.
///
/// Key handling returns an [`Action`] instead of mutating parents directly;
/// the parent feeds actions back down through [`Component::update`].
pub trait Component {
    /// Called once when the component first becomes part of the tree.
    /// The returned action lets a component request its initial data.
    fn mount(&mut self) -> Action {
        Action::None
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    /// Whether printable keys are consumed as text input
    fn captures_text(&self) -> bool {
        false
    }
}
