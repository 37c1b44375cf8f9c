// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Splits the screen into title bar, list, legend and status bar
// - render: Main orchestration function that coordinates all rendering
// - title_bar: Renders the screen title and the shuffle action
// - item_list: Renders the rows with checkmarks and animation highlights
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar (counts, cursor, pending intents)
// - toast: Renders toast notifications (brief pop-up messages)

pub mod item_list;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
