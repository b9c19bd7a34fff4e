use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// UI hints that survive restarts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiFlags {
    #[serde(default)]
    pub hint_seen: bool,
}

pub fn get_state_path() -> Option<PathBuf> {
    crate::config::get_config_dir().map(|mut path| {
        path.push("state.toml");
        path
    })
}

/// Missing or unreadable state counts as a first run.
pub fn load_flags(path: &Path) -> UiFlags {
    if let Ok(content) = std::fs::read_to_string(path) {
        match toml::from_str::<UiFlags>(&content) {
            Ok(flags) => return flags,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable state file");
            }
        }
    }
    UiFlags::default()
}

pub fn save_flags(path: &Path, flags: &UiFlags) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string(flags)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_means_not_seen() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_flags(&dir.path().join("state.toml")), UiFlags::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.toml");
        save_flags(&path, &UiFlags { hint_seen: true }).unwrap();
        assert!(load_flags(&path).hint_seen);
    }

    #[test]
    fn test_garbage_file_means_not_seen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        std::fs::write(&path, "hint_seen = \"maybe\"").unwrap();
        assert!(!load_flags(&path).hint_seen);
    }
}
