use crate::app::command::Command;
use crate::domain::models::{Category, SectionId};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Page ---
    ScrollDown(u16),
    ScrollUp(u16),
    ScrollToTop,
    JumpToSection(SectionId),
    ToggleTimelineEntry(usize),
    FilterSkills(Option<Category>), // `None` shows every category

    // --- Command Palette ---
    TogglePalette,
    OpenPalette,
    ClosePalette,
    PaletteInput(crossterm::event::KeyEvent), // Keystroke for the query field
    PaletteNext,
    PalettePrev,
    PaletteHover(usize),      // Row among the visible items
    PaletteExecute(usize),    // Index into the item list
    PaletteExecuteSelected,

    // --- Async Results ---
    EmailCopied(usize),
    ClipboardFailed(String),
    RestoreDescription { index: usize, generation: u64 },

    // --- Keyboard Hint ---
    ShowHint,
    HideHint,
}
