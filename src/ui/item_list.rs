use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use mixtable::model::{AnimationModel, Item};

/// Checkmark shown on selected rows
pub const CHECKMARK: &str = "✓";

/// Build one row: title on the left, checkmark column on the right
///
/// `moved_from` is the row's previous index while its move is animating;
/// it is shown as a 1-based "was N" hint next to the checkmark.
pub fn build_row_line(item: &Item, width: usize, moved_from: Option<usize>) -> Line<'static> {
    let mark = if item.selected { CHECKMARK } else { " " };
    let hint = moved_from
        .map(|from| format!("(was {})", from + 1))
        .unwrap_or_default();
    // Cursor symbol (2) + space before the checkmark (1) + checkmark (1)
    let title_width = width.saturating_sub(4 + hint.len()).max(item.title.len());
    Line::from(vec![
        Span::raw(format!("{:<w$}", item.title, w = title_width)),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::styled(
            mark,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Style for a row given the animation in flight
fn row_style(row: usize, animation: &AnimationModel) -> Style {
    if animation.is_focus(row) {
        Style::default().bg(Color::Rgb(40, 60, 90))
    } else if animation.highlights(row) {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Render the row list
pub fn render_item_list(
    f: &mut Frame,
    area: Rect,
    items: &[Item],
    state: &mut ListState,
    animation: &AnimationModel,
) {
    let inner_width = area.width.saturating_sub(2) as usize;

    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let line = build_row_line(item, inner_width, animation.moved_from(idx));
            ListItem::new(line).style(row_style(idx, animation))
        })
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, state);
}
