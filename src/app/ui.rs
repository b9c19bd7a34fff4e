use crate::app::state::{AppState, HintPhase};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::command_palette::{palette_layout, CommandPaletteModal};
use crate::components::modals::hint_toast::HintToast;
use crate::components::page_view::PageView;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(0),    // Page
        Constraint::Length(1), // Footer
    ])
    .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = get_layout(area);
    if layout.body.height != app_state.page.viewport_height {
        app_state.page.set_viewport_height(layout.body.height);
    }
    if app_state.palette.is_open {
        let rows = palette_layout(area, app_state.palette.items.len()).list.height;
        app_state.palette.scroll_into_view(rows as usize);
    }

    let theme = &app_state.theme;

    f.render_widget(
        Header {
            sections: &app_state.page.sections,
            active: app_state.page.active_section(),
            owner: &app_state.owner,
            theme,
        },
        layout.header,
    );

    f.render_widget(
        PageView {
            page: &app_state.page,
            theme,
        },
        layout.body,
    );

    f.render_widget(
        Footer {
            palette_open: app_state.palette.is_open,
            owner: &app_state.owner,
            theme,
        },
        layout.footer,
    );

    if app_state.hint == HintPhase::Visible && !app_state.palette.is_open {
        f.render_widget(HintToast { theme }, layout.body);
    }

    if app_state.palette.is_open {
        f.render_widget(
            CommandPaletteModal {
                theme,
                state: &app_state.palette,
            },
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::reducer::update;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let area = buf.area;
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_layout_rows() {
        let layout = get_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.body, Rect::new(0, 1, 80, 22));
        assert_eq!(layout.footer, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_draw_syncs_viewport_height() {
        let mut state = AppState::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
        assert_eq!(state.page.viewport_height, 22);
        assert!(screen(&terminal).contains("FOLIO"));
    }

    #[test]
    fn test_draw_palette_over_page() {
        let mut state = AppState::default();
        update(&mut state, Action::OpenPalette);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("COMMAND PALETTE"));
        assert!(text.contains("Copy email address"));
    }

    #[test]
    fn test_draw_keeps_selection_in_short_palette() {
        let mut state = AppState::default();
        update(&mut state, Action::OpenPalette);
        update(&mut state, Action::PalettePrev);
        let mut terminal = Terminal::new(TestBackend::new(100, 8)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();

        assert_eq!(state.palette.list_offset, 3);
        assert!(screen(&terminal).contains("> Email"));
    }

    #[test]
    fn test_draw_hint_toast_when_visible() {
        let mut state = AppState::default();
        state.hint = HintPhase::Visible;
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
        assert!(screen(&terminal).contains("Tip: press Ctrl+K"));
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let mut state = AppState::default();
        update(&mut state, Action::OpenPalette);
        let mut terminal = Terminal::new(TestBackend::new(4, 2)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
    }
}
