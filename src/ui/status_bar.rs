use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build the status line text
///
/// `cursor` is (display index, item id) of the row under the cursor.
pub fn build_status_line(
    row_count: usize,
    selected_count: usize,
    cursor: Option<(usize, u32)>,
    pending_intents: usize,
    animating: bool,
) -> String {
    let cursor_display = match cursor {
        Some((idx, id)) => format!("Row {}/{} (id {})", idx + 1, row_count, id),
        None => "No rows".to_string(),
    };

    let activity = if animating {
        format!("Animating, {} queued", pending_intents)
    } else if pending_intents > 0 {
        format!("{} queued", pending_intents)
    } else {
        "Idle".to_string()
    };

    format!(
        "{:<25} │ {:>14} │ {:>20}",
        cursor_display,
        format!("Selected: {}", selected_count),
        activity
    )
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    row_count: usize,
    selected_count: usize,
    cursor: Option<(usize, u32)>,
    pending_intents: usize,
    animating: bool,
) {
    let status_line = build_status_line(
        row_count,
        selected_count,
        cursor,
        pending_intents,
        animating,
    );

    let status_bar = Paragraph::new(status_line)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
