use chrono::Utc;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::theme;
use super::util::truncate_chars;
use crate::app::App;
use crate::model::entry::{IconKind, RankedEntry};

pub fn draw_browser(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.rel_segments.is_empty() {
        " Folders ".to_string()
    } else {
        format!(" {} ", app.rel_path().display())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme::BORDER_ACTIVE);

    if app.root_missing {
        let p = Paragraph::new(format!("Root folder not found: {}", app.root.display()))
            .style(theme::ROOT_MISSING)
            .block(block);
        f.render_widget(p, area);
        return;
    }

    if app.visible.is_empty() {
        let message = if app.filter_input.is_empty() {
            "Empty folder"
        } else {
            "No matches"
        };
        let p = Paragraph::new(message).style(theme::EMPTY_STATE).block(block);
        f.render_widget(p, area);
        return;
    }

    let now = Utc::now().timestamp_millis();
    let name_width = (area.width as usize).saturating_sub(20);

    let items: Vec<ListItem> = app
        .visible
        .iter()
        .filter_map(|&i| app.entries.get(i))
        .map(|ranked| ListItem::new(entry_line(ranked, name_width, now)))
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.selected));

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::LIST_SELECTED);

    f.render_stateful_widget(list, area, &mut state);
}

fn entry_line(ranked: &RankedEntry, name_width: usize, now: i64) -> Line<'_> {
    let icon_style = match ranked.icon {
        IconKind::DevServer => theme::ICON_DEV_SERVER,
        IconKind::Locked => theme::ICON_LOCKED,
        IconKind::Package => theme::ICON_PACKAGE,
        IconKind::Folder => theme::ICON_FOLDER,
    };

    // Dead-end folders render dimmed.
    let name_style = if ranked.entry.is_leaf() {
        theme::EMPTY_STATE
    } else {
        theme::LIST_NORMAL
    };
    let mut spans = vec![
        Span::styled(format!("{} ", ranked.icon.glyph()), icon_style),
        Span::styled(truncate_chars(&ranked.entry.name, name_width), name_style),
    ];

    if let Some(ref port) = ranked.entry.port {
        spans.push(Span::styled(format!(" :{}", port), theme::PORT_BADGE));
    }

    if ranked.recently_opened {
        spans.push(Span::styled(" ●", theme::RECENT_MARKER));
    }

    for tag in ranked.tags {
        let style = if *tag == "hot" {
            theme::TAG_HOT
        } else {
            theme::TAG_PLAIN
        };
        spans.push(Span::styled(format!(" #{}", tag), style));
    }

    if let Some(ts) = ranked.last_opened {
        spans.push(Span::styled(
            format!("  {}", age_label(ts, now)),
            theme::EMPTY_STATE,
        ));
    }

    Line::from(spans)
}

/// Compact "opened Xm/Xh/Xd ago" label.
fn age_label(last_open: i64, now: i64) -> String {
    let mins = (now - last_open).max(0) / 60_000;
    if mins < 60 {
        format!("{}m ago", mins)
    } else if mins < 24 * 60 {
        format!("{}h ago", mins / 60)
    } else {
        format!("{}d ago", mins / (24 * 60))
    }
}
