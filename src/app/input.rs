use crate::app::{
    action::Action,
    keymap::{is_force_quit, is_palette_toggle},
    state::AppState,
    ui,
};
use crate::components::header::nav_hit_test;
use crate::components::modals::command_palette::{hit_test, PaletteHit};
use crate::components::page_view::filter_button_at;
use crate::domain::models::SectionRow;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

/// Rows moved per mouse wheel notch.
pub const WHEEL_STEP: u16 = 3;

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match event {
        Event::Resize(width, height) => Some(Action::Resize(width, height)),

        // These work regardless of what else has focus
        Event::Key(key) if is_force_quit(&key) => Some(Action::Quit),
        Event::Key(key) if is_palette_toggle(&key) => Some(Action::TogglePalette),

        Event::Key(key) if app_state.palette.is_open => match key.code {
            KeyCode::Esc => Some(Action::ClosePalette),
            KeyCode::Down => Some(Action::PaletteNext),
            KeyCode::Up => Some(Action::PalettePrev),
            KeyCode::Enter => Some(Action::PaletteExecuteSelected),
            _ => Some(Action::PaletteInput(key)),
        },

        Event::Mouse(mouse) if app_state.palette.is_open => {
            let hit = hit_test(&app_state.palette, area, mouse.column, mouse.row);
            match (mouse.kind, hit) {
                (MouseEventKind::Moved, PaletteHit::Item(row)) => Some(Action::PaletteHover(row)),
                (MouseEventKind::Down(MouseButton::Left), PaletteHit::Item(row)) => app_state
                    .palette
                    .visible
                    .get(row)
                    .map(|&index| Action::PaletteExecute(index)),
                (MouseEventKind::Down(MouseButton::Left), PaletteHit::Backdrop) => {
                    Some(Action::ClosePalette)
                }
                _ => None,
            }
        }

        Event::Key(key) => {
            page_toggle_key(key, app_state).or_else(|| app_state.keymap.get_action(key))
        }

        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ScrollDown(WHEEL_STEP)),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp(WHEEL_STEP)),
            MouseEventKind::Down(MouseButton::Left) => {
                let layout = ui::get_layout(area);
                if mouse.row == layout.header.y {
                    return nav_hit_test(
                        &app_state.page.sections,
                        layout.header,
                        mouse.column,
                        mouse.row,
                    )
                    .map(Action::JumpToSection);
                }
                body_click(app_state, layout.body, mouse.column, mouse.row)
            }
            _ => None,
        },

        _ => None,
    }
}

/// Bindings whose action depends on the page: `e` steps through the
/// timeline, `f` through the skills filters.
fn page_toggle_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
        return None;
    }
    match key.code {
        KeyCode::Char('e') => app_state
            .page
            .next_timeline_entry()
            .map(Action::ToggleTimelineEntry),
        KeyCode::Char('f') => Some(Action::FilterSkills(app_state.page.next_skill_filter())),
        _ => None,
    }
}

fn body_click(app_state: &AppState<'_>, body: Rect, column: u16, row: u16) -> Option<Action> {
    if row < body.y || row >= body.bottom() {
        return None;
    }
    let content_row = app_state.page.scroll.saturating_add(row - body.y);
    match app_state.page.row_at(content_row)? {
        SectionRow::EntryHeader { index, .. } => Some(Action::ToggleTimelineEntry(index)),
        SectionRow::FilterBar => filter_button_at(body, column).map(Action::FilterSkills),
        _ => None,
    }
}
