use std::path::PathBuf;

/// One directory under consideration for the browse list.
/// Rebuilt from the live filesystem on every listing; never cached.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    /// Nearest manifest found by bounded upward search, if any.
    pub manifest_path: Option<PathBuf>,
    /// A recognized lockfile sits directly inside this directory.
    pub has_lockfile: bool,
    /// Port parsed out of the manifest's scripts, if any.
    pub port: Option<String>,
    /// At least one non-hidden subdirectory exists directly inside.
    pub has_navigable_children: bool,
}

impl Entry {
    pub fn has_manifest(&self) -> bool {
        self.manifest_path.is_some()
    }

    /// Dead end: neither a project nor anything to descend into.
    pub fn is_leaf(&self) -> bool {
        !self.has_manifest() && !self.has_navigable_children
    }

    /// Total partition over (has_manifest, has_navigable_children).
    pub fn action(&self) -> EntryAction {
        if self.has_manifest() {
            EntryAction::Project
        } else if self.has_navigable_children {
            EntryAction::Navigable
        } else {
            EntryAction::Leaf
        }
    }
}

/// What selecting an entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    /// Descend into the directory.
    Navigable,
    /// Record recency, then launch the full workflow (editor, dev server, browser).
    Project,
    /// Record recency, then launch the reduced workflow (editor only).
    Leaf,
}

/// Display icon, picked by priority: port > lockfile > manifest > plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    DevServer,
    Locked,
    Package,
    Folder,
}

impl IconKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::DevServer => "▶",
            IconKind::Locked => "◆",
            IconKind::Package => "□",
            IconKind::Folder => ">",
        }
    }
}

/// An Entry decorated for display. Recomputed on every listing request.
#[derive(Debug, Clone)]
pub struct RankedEntry {
    pub entry: Entry,
    pub action: EntryAction,
    pub icon: IconKind,
    /// Search/boost keywords derived from recency age. Never the sort key.
    pub tags: &'static [&'static str],
    /// Opened within the last hour.
    pub recently_opened: bool,
    /// Millis-since-epoch of the last recorded open, if any.
    pub last_opened: Option<i64>,
}

impl RankedEntry {
    /// Text matched by the `/` filter: name plus boost keywords.
    pub fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        if self.entry.name.to_lowercase().contains(&needle) {
            return true;
        }
        self.tags.iter().any(|t| t.contains(&needle))
    }
}
