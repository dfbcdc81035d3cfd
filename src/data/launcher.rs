use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;

use crate::event::AppEvent;

/// What to hand to the shell when an entry is activated.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub path: PathBuf,
    /// Entry port or the configured default.
    pub port: String,
    /// Only set when the entry itself declared a port.
    pub open_browser: bool,
    /// Leaf activation: editor only, no server/browser steps.
    pub reduced: bool,
}

/// Render the launch plan as shell script text. The script is the whole
/// interface to the automation side; the core never supervises what it does.
pub fn build_script(plan: &LaunchPlan, editor_cmd: &str, browser_cmd: &str) -> String {
    let dir = plan.path.to_string_lossy();
    let mut lines = vec![format!("cd \"{}\"", dir), format!("{} \"{}\"", editor_cmd, dir)];
    if !plan.reduced && plan.open_browser {
        lines.push(format!("{} \"http://localhost:{}\"", browser_cmd, plan.port));
    }
    lines.join("\n")
}

/// Run the script on a background thread, fire-and-forget. Completion is
/// reported over the app channel: None on success, Some(reason) on failure.
/// Failures are terminal; nothing here retries.
pub fn run(script: String, cwd: &Path, tx: mpsc::Sender<AppEvent>) {
    let cwd = cwd.to_path_buf();
    thread::spawn(move || {
        let result = Command::new("sh")
            .arg("-c")
            .arg(&script)
            .current_dir(&cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        let outcome = match result {
            Ok(status) if status.success() => None,
            Ok(status) => Some(format!("launch script exited with {}", status)),
            Err(e) => Some(format!("failed to run launch script: {}", e)),
        };
        let _ = tx.send(AppEvent::LaunchComplete(outcome));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_script_includes_browser_when_port_declared() {
        let plan = LaunchPlan {
            path: PathBuf::from("/dev/proj-a"),
            port: "4100".to_string(),
            open_browser: true,
            reduced: false,
        };
        let script = build_script(&plan, "code", "xdg-open");
        assert!(script.contains("cd \"/dev/proj-a\""));
        assert!(script.contains("code \"/dev/proj-a\""));
        assert!(script.contains("xdg-open \"http://localhost:4100\""));
    }

    #[test]
    fn defaulted_port_does_not_open_browser() {
        let plan = LaunchPlan {
            path: PathBuf::from("/dev/proj-b"),
            port: "3000".to_string(),
            open_browser: false,
            reduced: false,
        };
        let script = build_script(&plan, "code", "xdg-open");
        assert!(!script.contains("http://localhost"));
    }

    #[test]
    fn leaf_script_is_editor_only() {
        let plan = LaunchPlan {
            path: PathBuf::from("/dev/notes"),
            port: "3000".to_string(),
            open_browser: true,
            reduced: true,
        };
        let script = build_script(&plan, "code", "xdg-open");
        assert_eq!(script.lines().count(), 2);
        assert!(!script.contains("http://localhost"));
    }
}
