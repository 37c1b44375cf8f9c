use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar with the shuffle action on the right
pub fn render_title_bar(f: &mut Frame, area: Rect, title: &str, row_count: usize, selected_count: usize) {
    let shuffle_action = Line::from(vec![
        Span::styled("s", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw(":Shuffle "),
    ])
    .alignment(Alignment::Right);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .title(shuffle_action);

    let summary = Paragraph::new(Line::from(format!(
        "{} rows, {} selected",
        row_count, selected_count
    )))
    .block(block)
    .style(Style::default().fg(Color::Gray));

    f.render_widget(summary, area);
}
