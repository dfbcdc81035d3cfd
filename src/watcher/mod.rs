use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, DebouncedEventKind};

use crate::config::DEBOUNCE_MS;
use crate::event::AppEvent;

/// Watch the directory currently listed, sending TreeChanged on any change
/// so the shell reloads. The core itself never caches across requests; the
/// watcher only keeps the display fresh.
pub fn start_watcher(
    dir: &Path,
    tx: mpsc::Sender<AppEvent>,
) -> Result<notify_debouncer_mini::Debouncer<notify::RecommendedWatcher>> {
    let mut debouncer = new_debouncer(
        Duration::from_millis(DEBOUNCE_MS),
        move |res: Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>| {
            let events = match res {
                Ok(events) => events,
                Err(_) => return,
            };
            if events.iter().any(|e| e.kind == DebouncedEventKind::Any) {
                let _ = tx.send(AppEvent::TreeChanged);
            }
        },
    )?;

    if dir.exists() {
        let _ = debouncer
            .watcher()
            .watch(dir, notify::RecursiveMode::NonRecursive);
    }

    Ok(debouncer)
}
