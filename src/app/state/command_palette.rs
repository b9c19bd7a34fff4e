use super::input::AppTextArea;
use crate::app::command_palette::search_commands;
use crate::domain::models::{CommandAction, CommandItem, SectionId};
use std::collections::HashMap;
use std::time::Duration;

pub const COPIED_MESSAGE: &str = "✓ Copied to clipboard!";
pub const CONFIRMATION_DURATION: Duration = Duration::from_millis(2000);

/// What the caller has to do after an item was executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEffect {
    /// The palette is already closed; scroll the page to the section.
    ScrollTo(SectionId),
    /// Write the email to the clipboard on behalf of the item at `index`.
    CopyEmail { index: usize },
}

/// A description swapped out for a transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRestore {
    pub original: String,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandPaletteState<'a> {
    pub items: Vec<CommandItem>,
    pub is_open: bool,
    /// Lowercased contents of the query field.
    pub query: String,
    pub input: AppTextArea<'a>,
    /// Indices into `items`, in declaration order.
    pub visible: Vec<usize>,
    /// Position within `visible`, never within `items`.
    pub selected_index: usize,
    /// First visible row drawn; moves only to keep the selection in view.
    pub list_offset: usize,
    pub pending_restores: HashMap<usize, PendingRestore>,
    next_generation: u64,
}

impl CommandPaletteState<'_> {
    #[must_use]
    pub fn new(items: Vec<CommandItem>) -> Self {
        let visible = (0..items.len()).collect();
        Self {
            items,
            is_open: false,
            query: String::new(),
            input: AppTextArea::query_field(),
            visible,
            selected_index: 0,
            list_offset: 0,
            pending_restores: HashMap::new(),
            next_generation: 0,
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.selected_index = 0;
        self.list_offset = 0;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.input = AppTextArea::query_field();
        self.set_query("");
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_lowercase();
        self.visible = search_commands(&self.items, &self.query);
        self.selected_index = 0;
        self.list_offset = 0;
    }

    /// Adjusts `list_offset` so the selection is inside a window of `rows`.
    pub fn scroll_into_view(&mut self, rows: usize) {
        if rows == 0 {
            self.list_offset = 0;
            return;
        }
        if self.selected_index < self.list_offset {
            self.list_offset = self.selected_index;
        } else if self.selected_index >= self.list_offset + rows {
            self.list_offset = self.selected_index + 1 - rows;
        }
        self.list_offset = self
            .list_offset
            .min(self.visible.len().saturating_sub(rows));
    }

    /// Feeds a keystroke to the query field and refilters when its text changed.
    pub fn input_key(&mut self, key: crossterm::event::KeyEvent) {
        if self.input.input(key) {
            let text = self.input.text();
            self.set_query(&text);
        }
    }

    /// Cycles over the visible items only.
    pub fn move_selection(&mut self, direction: isize) {
        if !self.is_open || self.visible.is_empty() {
            return;
        }
        let count = self.visible.len() as isize;
        self.selected_index = (self.selected_index as isize + direction).rem_euclid(count) as usize;
    }

    pub fn hover(&mut self, visible_row: usize) {
        if self.is_open && visible_row < self.visible.len() {
            self.selected_index = visible_row;
        }
    }

    /// Item index under the highlight, `None` when nothing is visible.
    #[must_use]
    pub fn selected_item(&self) -> Option<usize> {
        if !self.is_open {
            return None;
        }
        self.visible.get(self.selected_index).copied()
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    /// Runs the item at `index`. Hidden items and a closed palette are ignored.
    pub fn execute(&mut self, index: usize) -> Option<PaletteEffect> {
        if !self.is_open || !self.is_visible(index) {
            return None;
        }
        match &self.items.get(index)?.action {
            CommandAction::Navigate(target) => {
                let target = target.clone();
                self.close();
                Some(PaletteEffect::ScrollTo(target))
            }
            CommandAction::CopyEmail => Some(PaletteEffect::CopyEmail { index }),
        }
    }

    pub fn execute_selected(&mut self) -> Option<PaletteEffect> {
        let index = self.selected_item()?;
        self.execute(index)
    }

    /// Swaps the item's description for `message` and returns the token the
    /// matching restore has to present. Re-triggering keeps the first snapshot
    /// and supersedes the earlier token.
    pub fn show_transient_description(&mut self, index: usize, message: &str) -> Option<u64> {
        let item = self.items.get_mut(index)?;
        self.next_generation += 1;
        let generation = self.next_generation;

        let original = match self.pending_restores.remove(&index) {
            Some(pending) => pending.original,
            None => item.description.clone(),
        };
        item.description = message.to_string();
        self.pending_restores
            .insert(index, PendingRestore { original, generation });
        Some(generation)
    }

    /// Puts the snapshot back unless a newer swap superseded `generation`.
    pub fn restore_description(&mut self, index: usize, generation: u64) -> bool {
        let current = self
            .pending_restores
            .get(&index)
            .is_some_and(|p| p.generation == generation);
        if !current {
            return false;
        }
        if let (Some(pending), Some(item)) =
            (self.pending_restores.remove(&index), self.items.get_mut(index))
        {
            item.description = pending.original;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn scenario_items() -> Vec<CommandItem> {
        vec![
            CommandItem::navigate("Home", "Go home", "#hero"),
            CommandItem::copy_email("Email", "Copy email"),
        ]
    }

    fn palette() -> CommandPaletteState<'static> {
        CommandPaletteState::new(crate::app::command_palette::default_commands())
    }

    #[test]
    fn test_open_then_close_restores_initial_state() {
        let initial = palette();
        let mut state = initial.clone();
        state.open();
        state.set_query("ex");
        state.move_selection(1);
        state.close();
        assert_eq!(state, initial);

        let mut state = initial.clone();
        state.open();
        state.close();
        assert_eq!(state, initial);
    }

    #[test]
    fn test_open_is_idempotent_and_resets_selection() {
        let mut state = palette();
        state.open();
        state.move_selection(1);
        state.move_selection(1);
        assert_eq!(state.selected_index, 2);
        state.open();
        assert!(state.is_open);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let mut state = palette();
        state.toggle();
        assert!(state.is_open);
        state.toggle();
        assert!(!state.is_open);
        assert_eq!(state, palette());
    }

    #[test]
    fn test_move_selection_cycles_over_visible_items() {
        let mut state = palette();
        state.open();
        state.set_query("e");
        let count = state.visible.len();
        assert!(count > 1 && count <= state.items.len());

        state.move_selection(1);
        let start = state.selected_index;
        for _ in 0..count {
            state.move_selection(1);
        }
        assert_eq!(state.selected_index, start);

        state.selected_index = 0;
        state.move_selection(-1);
        assert_eq!(state.selected_index, count - 1);
        assert!(state.selected_item().is_some_and(|i| state.is_visible(i)));
    }

    #[test]
    fn test_move_selection_ignored_while_closed() {
        let mut state = palette();
        state.move_selection(1);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_item(), None);
    }

    #[test]
    fn test_empty_filter_suppresses_selection() {
        let mut state = palette();
        state.open();
        state.set_query("no such command");
        assert!(state.visible.is_empty());
        state.move_selection(1);
        assert_eq!(state.selected_item(), None);
        assert_eq!(state.execute_selected(), None);
        assert!(state.is_open);
    }

    #[test]
    fn test_hidden_items_cannot_be_executed() {
        let mut state = CommandPaletteState::new(scenario_items());
        state.open();
        state.set_query("copy");
        assert_eq!(state.execute(0), None);
        assert!(state.is_open);
    }

    #[test]
    fn test_hover_sets_selection_directly() {
        let mut state = palette();
        state.open();
        state.hover(3);
        assert_eq!(state.selected_index, 3);
        state.hover(99);
        assert_eq!(state.selected_index, 3);
    }

    #[test]
    fn test_navigate_always_closes() {
        let mut state = CommandPaletteState::new(scenario_items());
        state.open();
        state.set_query("home");
        let effect = state.execute_selected();
        assert_eq!(
            effect,
            Some(PaletteEffect::ScrollTo(SectionId::parse("#hero")))
        );
        assert!(!state.is_open);
        assert_eq!(state.query, "");
        assert_eq!(state.visible, vec![0, 1]);
    }

    #[test]
    fn test_scenario_filter_then_copy() {
        let mut state = CommandPaletteState::new(scenario_items());
        state.open();
        state.set_query("copy");
        assert_eq!(state.visible, vec![1]);
        assert_eq!(state.selected_index, 0);

        let effect = state.execute_selected();
        assert_eq!(effect, Some(PaletteEffect::CopyEmail { index: 1 }));
        assert!(state.is_open);

        let generation = state.show_transient_description(1, COPIED_MESSAGE).unwrap();
        assert_eq!(state.items[1].description, COPIED_MESSAGE);
        assert!(state.restore_description(1, generation));
        assert_eq!(state.items[1].description, "Copy email");
    }

    #[test]
    fn test_retrigger_supersedes_pending_restore() {
        let mut state = CommandPaletteState::new(scenario_items());
        let first = state.show_transient_description(1, COPIED_MESSAGE).unwrap();
        let second = state.show_transient_description(1, COPIED_MESSAGE).unwrap();
        assert_ne!(first, second);

        assert!(!state.restore_description(1, first));
        assert_eq!(state.items[1].description, COPIED_MESSAGE);

        assert!(state.restore_description(1, second));
        assert_eq!(state.items[1].description, "Copy email");
        assert!(state.pending_restores.is_empty());
    }

    #[test]
    fn test_typing_filters_and_lowercases() {
        let mut state = CommandPaletteState::new(scenario_items());
        state.open();
        for c in "COPY".chars() {
            state.input_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT));
        }
        assert_eq!(state.query, "copy");
        assert_eq!(state.input.text(), "COPY");
        assert_eq!(state.visible, vec![1]);

        for _ in 0..4 {
            state.input_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        }
        assert_eq!(state.query, "");
        assert_eq!(state.visible, vec![0, 1]);
    }
}
