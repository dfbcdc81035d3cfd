use std::path::Path;

use crate::data::manifest;
use crate::model::entry::Entry;

/// Lockfiles whose presence marks a package-manager toolchain.
const LOCKFILES: [&str; 4] = [
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "bun.lockb",
];

/// List and classify the immediate children of `root/rel`.
///
/// Hidden entries (leading `.`) and non-directories are skipped. The result
/// is sorted case-insensitively by name; recency re-ranking happens later in
/// the projector. Any I/O failure degrades to an empty list — the caller
/// distinguishes "empty folder" from "bad root" with its own existence check.
pub fn classify(root: &Path, rel: &Path) -> Vec<Entry> {
    let dir = root.join(rel);
    let read_dir = match std::fs::read_dir(&dir) {
        Ok(rd) => rd,
        Err(_) => return Vec::new(),
    };

    let mut entries = Vec::new();
    for child in read_dir.flatten() {
        let name = child.file_name().to_string_lossy().to_string();
        if is_hidden(&name) {
            continue;
        }
        let path = child.path();
        if !child.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }

        let manifest_path = manifest::locate_manifest(&path);
        let port = manifest_path.as_deref().and_then(manifest::extract_port);

        entries.push(Entry {
            name,
            has_lockfile: has_lockfile(&path),
            port,
            has_navigable_children: has_navigable_children(&path),
            manifest_path,
            path,
        });
    }

    entries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    entries
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn has_lockfile(dir: &Path) -> bool {
    LOCKFILES.iter().any(|name| dir.join(name).is_file())
}

/// True iff any non-hidden direct child is itself a directory.
/// I/O errors count as "no" so a broken subtree degrades to a leaf.
pub fn has_navigable_children(dir: &Path) -> bool {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(_) => return false,
    };
    for child in read_dir.flatten() {
        let name = child.file_name().to_string_lossy().to_string();
        if is_hidden(&name) {
            continue;
        }
        if child.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn mkdirs(root: &Path, names: &[&str]) {
        for name in names {
            fs::create_dir_all(root.join(name)).unwrap();
        }
    }

    #[test]
    fn hidden_entries_and_files_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        mkdirs(tmp.path(), &["alpha", ".git", "beta"]);
        fs::write(tmp.path().join("README.md"), "hi").unwrap();

        let entries = classify(tmp.path(), &PathBuf::new());
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["alpha", "beta"]);
        assert!(entries.iter().all(|e| !e.name.starts_with('.')));
    }

    #[test]
    fn sorted_case_insensitively() {
        let tmp = tempfile::tempdir().unwrap();
        mkdirs(tmp.path(), &["Zeta", "apps", "Beta"]);

        let entries = classify(tmp.path(), &PathBuf::new());
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["apps", "Beta", "Zeta"]);
    }

    #[test]
    fn leaf_derivation_holds_for_every_entry() {
        let tmp = tempfile::tempdir().unwrap();
        mkdirs(tmp.path(), &["proj", "parent/child", "empty"]);
        fs::write(
            tmp.path().join("proj").join("package.json"),
            r#"{"scripts":{"dev":"vite --port 4100"}}"#,
        )
        .unwrap();

        let entries = classify(tmp.path(), &PathBuf::new());
        for e in &entries {
            assert_eq!(e.is_leaf(), !e.has_manifest() && !e.has_navigable_children);
        }

        let proj = entries.iter().find(|e| e.name == "proj").unwrap();
        assert!(proj.has_manifest());
        assert_eq!(proj.port.as_deref(), Some("4100"));

        let parent = entries.iter().find(|e| e.name == "parent").unwrap();
        assert!(!parent.has_manifest());
        assert!(parent.has_navigable_children);

        let empty = entries.iter().find(|e| e.name == "empty").unwrap();
        assert!(empty.is_leaf());
    }

    #[test]
    fn lockfile_detected_only_as_direct_child() {
        let tmp = tempfile::tempdir().unwrap();
        mkdirs(tmp.path(), &["with-lock", "without/inner"]);
        fs::write(tmp.path().join("with-lock").join("yarn.lock"), "").unwrap();
        fs::write(tmp.path().join("without").join("inner").join("yarn.lock"), "").unwrap();

        let entries = classify(tmp.path(), &PathBuf::new());
        let with = entries.iter().find(|e| e.name == "with-lock").unwrap();
        let without = entries.iter().find(|e| e.name == "without").unwrap();
        assert!(with.has_lockfile);
        assert!(!without.has_lockfile);
    }

    #[test]
    fn navigable_children_ignores_hidden_and_files() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("d");
        mkdirs(tmp.path(), &["d/.hidden"]);
        fs::write(dir.join("file.txt"), "").unwrap();
        assert!(!has_navigable_children(&dir));

        mkdirs(tmp.path(), &["d/visible"]);
        assert!(has_navigable_children(&dir));
    }

    #[test]
    fn unreadable_root_yields_empty() {
        let entries = classify(Path::new("/definitely/not/here"), &PathBuf::new());
        assert!(entries.is_empty());
    }
}
