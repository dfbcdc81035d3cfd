pub mod browser_view;
pub mod help_overlay;
pub mod layout;
pub mod theme;
pub mod util;

use ratatui::Frame;

use crate::app::App;

/// Main draw dispatcher.
pub fn draw(f: &mut Frame, app: &App) {
    layout::draw_layout(f, app);
}
