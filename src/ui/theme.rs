use ratatui::style::{Color, Modifier, Style};

// Title bar
pub const TITLE_BAR: Style = Style::new().fg(Color::Black).bg(Color::Cyan);
pub const BREADCRUMB: Style = Style::new().fg(Color::White);
pub const BREADCRUMB_ROOT: Style = Style::new().fg(Color::DarkGray);

// Status bar
pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
pub const STATUS_ERROR: Style = Style::new().fg(Color::Red).bg(Color::DarkGray);
pub const STATUS_OK: Style = Style::new().fg(Color::Green).bg(Color::DarkGray);
pub const LAUNCH_PENDING: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

// List items
pub const LIST_SELECTED: Style = Style::new()
    .fg(Color::White)
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);
pub const LIST_NORMAL: Style = Style::new().fg(Color::White);

// Entry icons
pub const ICON_DEV_SERVER: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
pub const ICON_LOCKED: Style = Style::new().fg(Color::Yellow);
pub const ICON_PACKAGE: Style = Style::new().fg(Color::Magenta);
pub const ICON_FOLDER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

// Decorations
pub const PORT_BADGE: Style = Style::new().fg(Color::Green);
pub const TAG_HOT: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
pub const TAG_PLAIN: Style = Style::new().fg(Color::DarkGray);
pub const RECENT_MARKER: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

// Filter
pub const FILTER_INPUT: Style = Style::new().fg(Color::Yellow);
pub const FILTER_ACTIVE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

// Borders
pub const BORDER_ACTIVE: Style = Style::new().fg(Color::Cyan);

// Help overlay
pub const HELP_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const HELP_KEY: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
pub const HELP_DESC: Style = Style::new().fg(Color::White);

// Footer hints
pub const HINT_KEY: Style = Style::new().fg(Color::Yellow).bg(Color::DarkGray);
pub const HINT_DESC: Style = Style::new().fg(Color::Gray).bg(Color::DarkGray);

// Empty state
pub const EMPTY_STATE: Style = Style::new().fg(Color::DarkGray);
pub const ROOT_MISSING: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
