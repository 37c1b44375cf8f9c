use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top title bar area
    pub title_area: Rect,
    /// Row list area
    pub list_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, vim_mode: bool) -> LayoutInfo {
    let legend_height = super::legend::calculate_legend_height(terminal_size.width, vim_mode);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title bar (top border, text, bottom border)
            Constraint::Min(3),                // Row list
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        title_area: chunks[0],
        list_area: chunks[1],
        legend_area: chunks[2],
        status_area: chunks[3],
    }
}

/// Rows visible inside a bordered list area
pub fn visible_rows(list_area: Rect) -> usize {
    list_area.height.saturating_sub(2) as usize
}
