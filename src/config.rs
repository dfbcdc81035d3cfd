use std::path::PathBuf;

use serde::Deserialize;

/// Where devdock keeps its persisted state (recency log).
pub fn app_home() -> PathBuf {
    dirs_base().join(".devdock")
}

fn dirs_base() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// How often the tick event fires (ms).
pub const TICK_RATE_MS: u64 = 250;

/// File watcher debounce interval (ms).
pub const DEBOUNCE_MS: u64 = 200;

// ---------------------------------------------------------------------------
// Preferences (~/.devdock.toml)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct Preferences {
    /// Development folder tree to browse.
    pub root: Option<String>,
    /// Port assumed for projects whose manifest declares none.
    pub default_port: Option<String>,
    /// Editor command invoked with the project path.
    pub editor: Option<String>,
    /// Browser command invoked with the dev-server URL.
    pub browser: Option<String>,
}

impl Preferences {
    pub fn root(&self) -> PathBuf {
        self.root
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| dirs_base().join("dev"))
    }

    pub fn default_port(&self) -> &str {
        self.default_port.as_deref().unwrap_or("3000")
    }

    pub fn editor(&self) -> &str {
        self.editor.as_deref().unwrap_or("code")
    }

    pub fn browser(&self) -> &str {
        self.browser.as_deref().unwrap_or(if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        })
    }
}

/// Load preferences from `~/.devdock.toml`, read once per session.
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_preferences() -> Preferences {
    let path = dirs_base().join(".devdock.toml");
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        toml::from_str(&content).unwrap_or_default()
    } else {
        Preferences::default()
    }
}
