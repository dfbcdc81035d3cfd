use std::collections::HashMap;

use crate::model::entry::{Entry, IconKind, RankedEntry};
use crate::model::recency;

/// Merge classifier output with the recency table into the display order.
///
/// Stable sort by descending last-open timestamp (no record = 0), ties by
/// case-insensitive name — with no recency data this degrades to the plain
/// alphabetical base order. Decorations are pure functions of the entry
/// variant plus its recency age.
pub fn project(entries: Vec<Entry>, recency_map: &HashMap<String, i64>, now: i64) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = entries
        .into_iter()
        .map(|entry| {
            let last_opened = recency_map.get(entry.path.to_string_lossy().as_ref()).copied();
            let tags = last_opened
                .map(|ts| recency::age_tags(ts, now))
                .unwrap_or(&[]);
            let recently_opened = last_opened
                .map(|ts| recency::is_recent(ts, now))
                .unwrap_or(false);
            RankedEntry {
                action: entry.action(),
                icon: icon_for(&entry),
                tags,
                recently_opened,
                last_opened,
                entry,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        let ta = a.last_opened.unwrap_or(0);
        let tb = b.last_opened.unwrap_or(0);
        tb.cmp(&ta)
            .then_with(|| a.entry.name.to_lowercase().cmp(&b.entry.name.to_lowercase()))
    });
    ranked
}

/// Icon priority: port-bearing > lockfile > manifest-only > plain folder.
fn icon_for(entry: &Entry) -> IconKind {
    if entry.port.is_some() {
        IconKind::DevServer
    } else if entry.has_lockfile {
        IconKind::Locked
    } else if entry.has_manifest() {
        IconKind::Package
    } else {
        IconKind::Folder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::EntryAction;
    use std::path::PathBuf;

    fn entry(name: &str) -> Entry {
        Entry {
            name: name.to_string(),
            path: PathBuf::from(format!("/dev/{}", name)),
            manifest_path: None,
            has_lockfile: false,
            port: None,
            has_navigable_children: false,
        }
    }

    #[test]
    fn recency_desc_then_name_asc() {
        let entries = vec![entry("a-no-record"), entry("b-mid"), entry("c-new")];
        let mut recency = HashMap::new();
        recency.insert("/dev/b-mid".to_string(), 100);
        recency.insert("/dev/c-new".to_string(), 200);

        let ranked = project(entries, &recency, 1000);
        let names: Vec<&str> = ranked.iter().map(|r| r.entry.name.as_str()).collect();
        assert_eq!(names, ["c-new", "b-mid", "a-no-record"]);
    }

    #[test]
    fn no_records_degrades_to_alphabetical() {
        let entries = vec![entry("Gamma"), entry("alpha"), entry("Beta")];
        let ranked = project(entries, &HashMap::new(), 1000);
        let names: Vec<&str> = ranked.iter().map(|r| r.entry.name.as_str()).collect();
        assert_eq!(names, ["alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn icon_priority_port_over_lockfile_over_manifest() {
        let mut e = entry("p");
        e.manifest_path = Some(PathBuf::from("/dev/p/package.json"));
        e.has_lockfile = true;
        e.port = Some("4100".to_string());
        assert_eq!(icon_for(&e), IconKind::DevServer);

        e.port = None;
        assert_eq!(icon_for(&e), IconKind::Locked);

        e.has_lockfile = false;
        assert_eq!(icon_for(&e), IconKind::Package);

        e.manifest_path = None;
        assert_eq!(icon_for(&e), IconKind::Folder);
    }

    #[test]
    fn action_partition_is_exhaustive() {
        let mut navigable = entry("n");
        navigable.has_navigable_children = true;
        assert_eq!(navigable.action(), EntryAction::Navigable);

        let mut proj = entry("p");
        proj.manifest_path = Some(PathBuf::from("/dev/p/package.json"));
        // A project with subfolders is still a project, never navigable.
        proj.has_navigable_children = true;
        assert_eq!(proj.action(), EntryAction::Project);

        assert_eq!(entry("l").action(), EntryAction::Leaf);
    }

    #[test]
    fn decorations_follow_age() {
        let hour = 60 * 60 * 1000i64;
        let now = 100 * hour;
        let entries = vec![entry("fresh"), entry("stale")];
        let mut recency = HashMap::new();
        recency.insert("/dev/fresh".to_string(), now - 1);
        recency.insert("/dev/stale".to_string(), now - 48 * hour);

        let ranked = project(entries, &recency, now);
        let fresh = ranked.iter().find(|r| r.entry.name == "fresh").unwrap();
        let stale = ranked.iter().find(|r| r.entry.name == "stale").unwrap();
        assert!(fresh.recently_opened);
        assert_eq!(fresh.tags, &["hot", "recent", "opened"]);
        assert!(!stale.recently_opened);
        assert_eq!(stale.tags, &["opened"]);
    }
}
