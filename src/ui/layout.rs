//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the root frame, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub banner: Rect,
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the frame into error banner, header with tabs, screen body and status line.
    /// The banner collapses to zero height when there is nothing to show.
    #[must_use]
    pub fn main_layout(area: Rect, show_banner: bool) -> MainAreas {
        let banner_height = if show_banner { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(banner_height),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        MainAreas {
            banner: chunks[0],
            header: chunks[1],
            body: chunks[2],
            status: chunks[3],
        }
    }

    /// Aside on the left, detail section on the right
    #[must_use]
    pub fn aside_layout(area: Rect, aside_width: u16) -> (Rect, Rect) {
        let aside_width = std::cmp::min(aside_width, area.width / 2);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(aside_width), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// Stack a fixed-height input above the remaining content
    #[must_use]
    pub fn form_layout(area: Rect, input_height: u16, message_height: u16) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(input_height),
                Constraint::Length(message_height),
                Constraint::Min(0),
            ])
            .split(area);
        (chunks[0], chunks[1], chunks[2])
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate help panel dimensions based on screen size
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let help_width = if screen_width < 80 { 80 } else { 60 };
        let help_height = if screen_height < 40 { 80 } else { 60 };
        (help_width, help_height)
    }

    /// Truncate a label to fit `max_width` columns, marking the cut with an ellipsis
    #[must_use]
    pub fn truncate(text: &str, max_width: usize) -> String {
        if text.chars().count() <= max_width {
            return text.to_string();
        }
        let kept: String = text.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
