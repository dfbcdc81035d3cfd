use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

/// How many ancestor levels above the start directory the manifest search
/// may climb. A decrementing counter, not a computed stop path, so the walk
/// terminates even on symlink cycles or odd path spellings.
const MANIFEST_SEARCH_DEPTH: usize = 3;

pub const MANIFEST_NAME: &str = "package.json";

lazy_static! {
    /// Ordered port pattern rules. First capture wins, so order matters:
    /// flag style, env style, assignment style, URL style.
    static ref PORT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"--port[ =](\d+)").unwrap(),
        Regex::new(r"-p (\d+)").unwrap(),
        Regex::new(r"PORT=(\d+)").unwrap(),
        Regex::new(r"port\s*=\s*(\d+)").unwrap(),
        Regex::new(r"(?:localhost|127\.0\.0\.1|0\.0\.0\.0):(\d+)").unwrap(),
    ];
}

/// Find the nearest `package.json` at or above `start`, checking `start`
/// itself first and then at most `MANIFEST_SEARCH_DEPTH` parents.
pub fn locate_manifest(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    let mut remaining = MANIFEST_SEARCH_DEPTH;

    loop {
        let candidate = dir.join(MANIFEST_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if remaining == 0 {
            return None;
        }
        remaining -= 1;
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Pull a dev-server port out of the manifest's `scripts` values.
///
/// Scripts are visited in the order they appear in the JSON object, and for
/// each script the pattern rules are tried in order; the first numeric
/// capture anywhere wins. Read or parse failures yield None.
pub fn extract_port(manifest_path: &Path) -> Option<String> {
    let data = std::fs::read_to_string(manifest_path).ok()?;
    let doc: serde_json::Value = serde_json::from_str(&data).ok()?;
    let scripts = doc.get("scripts")?.as_object()?;

    for value in scripts.values() {
        let Some(command) = value.as_str() else {
            continue;
        };
        for pattern in PORT_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(command) {
                return Some(caps[1].to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_manifest(dir: &Path, scripts_json: &str) -> PathBuf {
        let path = dir.join(MANIFEST_NAME);
        fs::write(&path, format!(r#"{{"name":"x","scripts":{}}}"#, scripts_json)).unwrap();
        path
    }

    #[test]
    fn locate_prefers_own_directory_over_ancestors() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        write_manifest(tmp.path(), "{}");
        write_manifest(&nested, "{}");

        let found = locate_manifest(&nested).unwrap();
        assert_eq!(found, nested.join(MANIFEST_NAME));
    }

    #[test]
    fn locate_climbs_at_most_three_levels() {
        let tmp = tempfile::tempdir().unwrap();
        write_manifest(tmp.path(), "{}");

        let three_down = tmp.path().join("a").join("b").join("c");
        fs::create_dir_all(&three_down).unwrap();
        assert!(locate_manifest(&three_down).is_some());

        let four_down = three_down.join("d");
        fs::create_dir_all(&four_down).unwrap();
        assert!(locate_manifest(&four_down).is_none());
    }

    #[test]
    fn extract_port_flag_style() {
        let tmp = tempfile::tempdir().unwrap();
        let m = write_manifest(tmp.path(), r#"{"dev":"vite --port 4100"}"#);
        assert_eq!(extract_port(&m).as_deref(), Some("4100"));
    }

    #[test]
    fn extract_port_short_flag_and_env() {
        let tmp = tempfile::tempdir().unwrap();
        let m = write_manifest(tmp.path(), r#"{"serve":"http-server -p 8081"}"#);
        assert_eq!(extract_port(&m).as_deref(), Some("8081"));

        let m = write_manifest(tmp.path(), r#"{"start":"PORT=3005 node server.js"}"#);
        assert_eq!(extract_port(&m).as_deref(), Some("3005"));
    }

    #[test]
    fn extract_port_url_style() {
        let tmp = tempfile::tempdir().unwrap();
        let m = write_manifest(tmp.path(), r#"{"open":"open http://localhost:5173"}"#);
        assert_eq!(extract_port(&m).as_deref(), Some("5173"));
    }

    #[test]
    fn first_script_wins_over_later_pattern_priority() {
        // PORT= in an earlier script beats --port in a later one: iteration
        // is script-order outer, pattern-order inner.
        let tmp = tempfile::tempdir().unwrap();
        let m = write_manifest(
            tmp.path(),
            r#"{"start":"PORT=4000 node .","dev":"vite --port 5000"}"#,
        );
        assert_eq!(extract_port(&m).as_deref(), Some("4000"));
    }

    #[test]
    fn malformed_manifest_yields_none() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(MANIFEST_NAME);
        fs::write(&path, "not json {{{").unwrap();
        assert_eq!(extract_port(&path), None);
        assert_eq!(extract_port(&tmp.path().join("missing.json")), None);
    }

    #[test]
    fn scripts_without_ports_yield_none() {
        let tmp = tempfile::tempdir().unwrap();
        let m = write_manifest(tmp.path(), r#"{"build":"tsc","test":"jest"}"#);
        assert_eq!(extract_port(&m), None);
    }
}
