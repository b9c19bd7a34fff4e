use super::action::Action;
use crate::domain::models::Section;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Rows moved by a page jump.
pub const PAGE_STEP: u16 = 10;

/// Key bindings while the palette is closed. The palette has its own fixed
/// protocol in `input`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn new(sections: &[Section]) -> Self {
        let mut global = HashMap::new();

        global.insert(key(KeyCode::Char('q')), Action::Quit);
        global.insert(ctrl('c'), Action::Quit);
        global.insert(key(KeyCode::Char('j')), Action::ScrollDown(1));
        global.insert(key(KeyCode::Down), Action::ScrollDown(1));
        global.insert(key(KeyCode::Char('k')), Action::ScrollUp(1));
        global.insert(key(KeyCode::Up), Action::ScrollUp(1));
        global.insert(key(KeyCode::PageDown), Action::ScrollDown(PAGE_STEP));
        global.insert(key(KeyCode::Char(' ')), Action::ScrollDown(PAGE_STEP));
        global.insert(key(KeyCode::PageUp), Action::ScrollUp(PAGE_STEP));
        global.insert(key(KeyCode::Char('g')), Action::ScrollToTop);
        global.insert(key(KeyCode::Home), Action::ScrollToTop);
        global.insert(key(KeyCode::Char('/')), Action::OpenPalette);

        // 1-9 jump to the matching nav entry
        for (i, section) in sections.iter().take(9).enumerate() {
            let digit = char::from(b'1' + i as u8);
            global.insert(key(KeyCode::Char(digit)), Action::JumpToSection(section.id.clone()));
        }

        Self { global }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.global
            .get(&KeyEvent::new(event.code, event.modifiers))
            .cloned()
    }
}

/// Cmd+K or Ctrl+K.
#[must_use]
pub fn is_palette_toggle(event: &KeyEvent) -> bool {
    matches!(event.code, KeyCode::Char('k') | KeyCode::Char('K'))
        && event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
}

/// Ctrl+C quits even while the palette owns the keyboard.
#[must_use]
pub fn is_force_quit(event: &KeyEvent) -> bool {
    event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL)
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SectionId;

    fn sections() -> Vec<Section> {
        ["hero", "about"]
            .iter()
            .map(|id| Section::text(id, id, vec![]))
            .collect()
    }

    #[test]
    fn test_digits_jump_to_sections() {
        let map = KeyMap::new(&sections());
        assert_eq!(
            map.get_action(key(KeyCode::Char('2'))),
            Some(Action::JumpToSection(SectionId::parse("about")))
        );
        assert_eq!(map.get_action(key(KeyCode::Char('3'))), None);
    }

    #[test]
    fn test_palette_toggle_modifiers() {
        assert!(is_palette_toggle(&ctrl('k')));
        assert!(is_palette_toggle(&KeyEvent::new(
            KeyCode::Char('k'),
            KeyModifiers::SUPER
        )));
        assert!(!is_palette_toggle(&key(KeyCode::Char('k'))));
        assert!(!is_palette_toggle(&ctrl('j')));
    }
}
