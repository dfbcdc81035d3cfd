use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use chrono::Utc;

use crate::config::Preferences;
use crate::data::{
    classify,
    launcher::{self, LaunchPlan},
    rank,
    recency::RecencyTracker,
    store::StateStore,
};
use crate::event::AppEvent;
use crate::model::entry::{EntryAction, RankedEntry};

/// How long a launch status message stays in the status bar (secs).
const STATUS_TTL_SECS: u64 = 5;

pub struct App {
    pub should_quit: bool,
    pub show_help: bool,
    pub dirty: bool,

    // Config
    pub prefs: Preferences,
    pub root: PathBuf,
    /// Root path misconfiguration, checked before every listing so the UI
    /// can tell "bad root" apart from "empty folder".
    pub root_missing: bool,

    // Browse state
    pub rel_segments: Vec<String>,
    pub entries: Vec<RankedEntry>,
    /// Indices into `entries` that pass the current filter.
    pub visible: Vec<usize>,
    pub selected: usize,

    // Filter
    pub filter_mode: bool,
    pub filter_input: String,

    // Launch status
    pub launch_pending: bool,
    pub status_message: Option<String>,
    status_set_at: Option<Instant>,

    tracker: RecencyTracker,
    pub event_tx: Option<mpsc::Sender<AppEvent>>,
}

impl App {
    pub fn new(prefs: Preferences, store: Box<dyn StateStore>) -> Self {
        let root = prefs.root();
        Self {
            should_quit: false,
            show_help: false,
            dirty: true,
            prefs,
            root,
            root_missing: false,
            rel_segments: Vec::new(),
            entries: Vec::new(),
            visible: Vec::new(),
            selected: 0,
            filter_mode: false,
            filter_input: String::new(),
            launch_pending: false,
            status_message: None,
            status_set_at: None,
            tracker: RecencyTracker::new(store),
            event_tx: None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Relative path below the root as one PathBuf.
    pub fn rel_path(&self) -> PathBuf {
        self.rel_segments.iter().collect()
    }

    /// Absolute directory currently listed.
    pub fn current_dir(&self) -> PathBuf {
        self.root.join(self.rel_path())
    }

    /// Reload and re-rank the listing from the live filesystem.
    /// Recomputed from scratch on every call; nothing is cached.
    pub fn list_entries(&mut self) {
        self.root_missing = !self.root.is_dir();
        if self.root_missing {
            self.entries.clear();
            self.visible.clear();
            self.selected = 0;
            return;
        }

        let raw = classify::classify(&self.root, &self.rel_path());
        let recency = self.tracker.get_all();
        self.entries = rank::project(raw, &recency, Utc::now().timestamp_millis());
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        let filter = self.filter_input.clone();
        let visible: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| filter.is_empty() || e.matches_filter(&filter))
            .map(|(i, _)| i)
            .collect();
        self.visible = visible;
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }

    pub fn selected_entry(&self) -> Option<&RankedEntry> {
        self.visible
            .get(self.selected)
            .and_then(|&i| self.entries.get(i))
    }

    // -- Navigation -------------------------------------------------------

    pub fn navigate_down(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    pub fn navigate_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn jump_top(&mut self) {
        self.selected = 0;
    }

    pub fn jump_bottom(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }

    /// Step into a child directory and reload.
    pub fn descend(&mut self, child: &str) {
        self.rel_segments.push(child.to_string());
        self.selected = 0;
        self.clear_filter();
        self.list_entries();
    }

    /// Step back up one level. No-op at the root.
    pub fn ascend(&mut self) {
        if self.rel_segments.pop().is_some() {
            self.selected = 0;
            self.clear_filter();
            self.list_entries();
        }
    }

    // -- Activation -------------------------------------------------------

    /// Dispatch the selected entry: descend, or record recency and hand the
    /// launch plan to the shell. Fire-and-forget; completion comes back as
    /// an AppEvent.
    pub fn activate(&mut self) {
        let Some(ranked) = self.selected_entry() else {
            return;
        };
        match ranked.action {
            EntryAction::Navigable => {
                let child = ranked.entry.name.clone();
                self.descend(&child);
            }
            EntryAction::Project | EntryAction::Leaf => {
                let plan = self.launch_plan(ranked);
                let path = ranked.entry.path.to_string_lossy().to_string();
                self.tracker.record_open(&path);
                self.spawn_launch(plan);
                // The just-recorded open changes the ranking.
                self.list_entries();
            }
        }
    }

    /// Pure payload synthesis for an activation.
    fn launch_plan(&self, ranked: &RankedEntry) -> LaunchPlan {
        LaunchPlan {
            path: ranked.entry.path.clone(),
            port: ranked
                .entry
                .port
                .clone()
                .unwrap_or_else(|| self.prefs.default_port().to_string()),
            open_browser: ranked.entry.port.is_some(),
            reduced: ranked.action == EntryAction::Leaf,
        }
    }

    fn spawn_launch(&mut self, plan: LaunchPlan) {
        let Some(tx) = self.event_tx.clone() else {
            return;
        };
        let script = launcher::build_script(&plan, self.prefs.editor(), self.prefs.browser());
        self.launch_pending = true;
        launcher::run(script, &plan.path, tx);
    }

    pub fn handle_launch_complete(&mut self, error: Option<String>) {
        self.launch_pending = false;
        self.status_message = match error {
            Some(reason) => Some(format!("workflow failed: {}", reason)),
            None => Some("launched".to_string()),
        };
        self.status_set_at = Some(Instant::now());
    }

    pub fn clear_stale_status(&mut self) {
        if let Some(set_at) = self.status_set_at {
            if set_at.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                self.status_set_at = None;
            }
        }
    }

    // -- Filter -----------------------------------------------------------

    pub fn start_filter(&mut self) {
        self.filter_mode = true;
        self.filter_input.clear();
        self.apply_filter();
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter_input.push(c);
        self.apply_filter();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter_input.pop();
        self.apply_filter();
    }

    pub fn cancel_filter(&mut self) {
        self.clear_filter();
        self.apply_filter();
    }

    fn clear_filter(&mut self) {
        self.filter_mode = false;
        self.filter_input.clear();
    }
}
