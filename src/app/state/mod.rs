use super::analytics::Milestones;
use super::keymap::KeyMap;
use crate::config::Config;
use crate::domain::content::{portfolio_sections, Profile};
use crate::domain::models::CommandItem;
use crate::theme::{PaletteType, Theme};
use std::sync::Arc;
use std::time::Instant;

pub mod command_palette;
pub mod hint;
pub mod input;
pub mod page;

// Re-exports
pub use command_palette::{CommandPaletteState, PaletteEffect, PendingRestore};
pub use hint::HintPhase;
pub use input::AppTextArea;
pub use page::{PageState, ScrollAnimation};

#[derive(Debug, Clone)]
pub struct AppState<'a> {
    // --- Lifecycle ---
    pub should_quit: bool,
    pub started_at: Instant,
    pub frame_count: u64,

    // --- Profile ---
    pub owner: String,
    pub email: String,

    // --- UI State ---
    pub page: PageState,
    pub palette: CommandPaletteState<'a>,
    pub hint: HintPhase,
    pub milestones: Milestones,

    // --- Theme & Keys ---
    pub palette_type: PaletteType,
    pub theme: Theme,
    pub keymap: Arc<KeyMap>,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config, items: Vec<CommandItem>, hint_seen: bool) -> Self {
        let sections = portfolio_sections(&Profile {
            owner: &config.owner,
            tagline: &config.tagline,
            email: &config.email,
        });
        let keymap = Arc::new(KeyMap::new(&sections));

        Self {
            should_quit: false,
            started_at: Instant::now(),
            frame_count: 0,
            owner: config.owner.clone(),
            email: config.email.clone(),
            page: PageState::new(sections),
            palette: CommandPaletteState::new(items),
            hint: HintPhase::initial(hint_seen),
            milestones: Milestones::default(),
            palette_type: config.theme,
            theme: Theme::from_palette_type(config.theme),
            keymap,
        }
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self::new(
            &Config::default(),
            crate::app::command_palette::default_commands(),
            true,
        )
    }
}
