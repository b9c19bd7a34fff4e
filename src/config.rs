use crate::app::command_palette::default_commands;
use crate::domain::models::{CommandAction, CommandItem, SectionId};
use crate::theme::PaletteType;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_EMAIL: &str = "hello@example.com";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("command \"{0}\" navigates but has no target")]
    MissingTarget(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Navigate,
    CopyEmail,
}

/// A `[[commands]]` table as written in the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub action: ActionKind,
    pub target: Option<String>,
}

impl TryFrom<CommandEntry> for CommandItem {
    type Error = ConfigError;

    fn try_from(entry: CommandEntry) -> Result<Self, Self::Error> {
        let action = match entry.action {
            ActionKind::CopyEmail => CommandAction::CopyEmail,
            ActionKind::Navigate => match entry.target.as_deref().map(str::trim) {
                Some(target) if !target.is_empty() => {
                    CommandAction::Navigate(SectionId::parse(target))
                }
                _ => return Err(ConfigError::MissingTarget(entry.name)),
            },
        };
        Ok(CommandItem {
            name: entry.name,
            description: entry.description,
            action,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub owner: String,
    pub tagline: String,
    pub email: String,
    pub theme: PaletteType,
    pub commands: Option<Vec<CommandEntry>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: "Your Name".to_string(),
            tagline: "Software engineer. Builds quiet, reliable systems.".to_string(),
            email: DEFAULT_EMAIL.to_string(),
            theme: PaletteType::default(),
            commands: None,
        }
    }
}

/// `~/.config/folio`
pub fn get_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("folio");
        path
    })
}

impl Config {
    /// Loads `~/.config/folio/config.toml`, falling back to defaults when
    /// the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match get_config_dir().map(|dir| dir.join(CONFIG_FILE)) {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Palette entries: the configured list when present, the built-in one otherwise.
    pub fn command_items(&self) -> Result<Vec<CommandItem>, ConfigError> {
        match &self.commands {
            Some(entries) => entries.iter().cloned().map(CommandItem::try_from).collect(),
            None => Ok(default_commands()),
        }
    }
}
