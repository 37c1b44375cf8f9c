use crate::App;
use ratatui::Frame;

use super::{item_list, layout, legend, status_bar, title_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let model = &mut app.model;

    let layout_info = layout::calculate_layout(size, model.ui.vim_mode);

    // Page moves use whatever height the list got this frame
    model.navigation.page_size = layout::visible_rows(layout_info.list_area).max(1);

    let selected_count = model.list.selected_count();

    title_bar::render_title_bar(
        f,
        layout_info.title_area,
        &model.ui.title,
        model.list.len(),
        selected_count,
    );

    // Create temporary ListState for rendering
    let mut temp_state = ratatui::widgets::ListState::default();
    temp_state.select(model.navigation.cursor);
    item_list::render_item_list(
        f,
        layout_info.list_area,
        model.list.items(),
        &mut temp_state,
        &model.animation,
    );

    legend::render_legend(f, layout_info.legend_area, model.ui.vim_mode);

    let cursor = model
        .navigation
        .cursor
        .and_then(|idx| model.list.get(idx).map(|item| (idx, item.id)));

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        model.list.len(),
        selected_count,
        cursor,
        app.queue.len(),
        model.animation.is_animating(),
    );

    // Render toast notification if active
    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
