use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{browser_view, help_overlay, theme, util};
use crate::app::App;

pub fn draw_layout(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(3),    // Browser list
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_title_bar(f, chunks[0], app);
    browser_view::draw_browser(f, chunks[1], app);
    draw_status_bar(f, chunks[2], app);

    if app.show_help {
        help_overlay::draw_help(f, f.area());
    }
}

fn draw_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(" devdock ", theme::TITLE_BAR),
        Span::raw(" "),
        Span::styled(app.root.display().to_string(), theme::BREADCRUMB_ROOT),
    ];
    for segment in &app.rel_segments {
        spans.push(Span::styled("/", theme::BREADCRUMB_ROOT));
        spans.push(Span::styled(segment.as_str(), theme::BREADCRUMB));
    }
    if app.filter_mode {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("/{}", app.filter_input),
            theme::FILTER_INPUT,
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hint_text(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints: Vec<(&str, &str)> = if app.filter_mode {
        vec![("Esc", "clear"), ("Enter", "keep filter")]
    } else {
        vec![
            ("j/k", "nav"),
            ("Enter", "open"),
            ("Bksp", "up"),
            ("/", "filter"),
            ("r", "refresh"),
        ]
    };
    hints.push(("?", "help"));
    hints
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut left_spans: Vec<Span> = Vec::new();

    if let Some(ref message) = app.status_message {
        let style = if message.starts_with("workflow failed") {
            theme::STATUS_ERROR
        } else {
            theme::STATUS_OK
        };
        left_spans.push(Span::styled(format!(" {} ", message), style));
    }

    if app.launch_pending {
        left_spans.push(Span::styled(" LAUNCHING ", theme::LAUNCH_PENDING));
    }

    if app.filter_mode {
        left_spans.push(Span::styled(" FILTER ", theme::FILTER_ACTIVE));
    }

    // Right-aligned hints
    let hints = hint_text(app);
    let mut hint_spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            hint_spans.push(Span::styled("  ", theme::STATUS_BAR));
        }
        hint_spans.push(Span::styled(*key, theme::HINT_KEY));
        hint_spans.push(Span::styled(":", theme::HINT_DESC));
        hint_spans.push(Span::styled(*desc, theme::HINT_DESC));
    }
    hint_spans.push(Span::styled(" ", theme::STATUS_BAR));

    let left_width: usize = left_spans
        .iter()
        .map(|s| util::display_width(&s.content))
        .sum();
    let hint_width: usize = hint_spans
        .iter()
        .map(|s| util::display_width(&s.content))
        .sum();
    let total = area.width as usize;
    let gap = total.saturating_sub(left_width + hint_width);

    let mut spans = left_spans;
    spans.push(Span::styled(" ".repeat(gap), theme::STATUS_BAR));
    spans.extend(hint_spans);

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
