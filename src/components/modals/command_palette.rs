use crate::app::state::CommandPaletteState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, dim_area, draw_drop_shadow};

pub const PALETTE_WIDTH_PERCENT: u16 = 60;
/// Borders, query row and separator.
const CHROME_ROWS: u16 = 4;
const PROMPT: &str = " > ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub modal: Rect,
    pub query: Rect,
    pub separator: Rect,
    pub list: Rect,
}

/// Sized for the full item list so the box does not jump while filtering.
#[must_use]
pub fn palette_layout(area: Rect, item_count: usize) -> PaletteLayout {
    let rows = u16::try_from(item_count.max(1)).unwrap_or(u16::MAX);
    let modal = centered_rect_fixed_height(
        PALETTE_WIDTH_PERCENT,
        rows.saturating_add(CHROME_ROWS),
        area,
    );
    let inner = modal.inner(Margin::new(1, 1));
    let parts = Layout::vertical([
        Constraint::Length(1), // Query input
        Constraint::Length(1), // Separator
        Constraint::Min(0),    // Results
    ])
    .split(inner);

    PaletteLayout {
        modal,
        query: parts[0],
        separator: parts[1],
        list: parts[2],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteHit {
    /// Row among the visible items.
    Item(usize),
    Inside,
    Backdrop,
}

#[must_use]
pub fn hit_test(state: &CommandPaletteState<'_>, area: Rect, column: u16, row: u16) -> PaletteHit {
    let layout = palette_layout(area, state.items.len());
    let pos = Position::new(column, row);

    if !layout.modal.contains(pos) {
        return PaletteHit::Backdrop;
    }
    if layout.list.contains(pos) {
        let visible_row = state.list_offset + (row - layout.list.y) as usize;
        if visible_row < state.visible.len() {
            return PaletteHit::Item(visible_row);
        }
    }
    PaletteHit::Inside
}

pub struct CommandPaletteModal<'a, 'b> {
    pub theme: &'a Theme,
    pub state: &'a CommandPaletteState<'b>,
}

impl Widget for CommandPaletteModal<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_area(buf, area);

        let layout = palette_layout(area, self.state.items.len());
        if layout.modal.width == 0 || layout.modal.height == 0 {
            return;
        }

        draw_drop_shadow(buf, layout.modal, area);
        Clear.render(layout.modal, buf);

        Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND PALETTE ", self.theme.header_logo),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(" ↑↓ select · enter run · esc close ").right_aligned())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .render(layout.modal, buf);

        if layout.query.height == 0 || layout.list.height == 0 {
            return;
        }

        // Query
        let prompt_width = (PROMPT.len() as u16).min(layout.query.width);
        buf.set_stringn(
            layout.query.x,
            layout.query.y,
            PROMPT,
            layout.query.width as usize,
            self.theme.query_prompt,
        );
        let field = Rect {
            x: layout.query.x + prompt_width,
            width: layout.query.width - prompt_width,
            ..layout.query
        };
        Widget::render(&self.state.input, field, buf);

        // Separator
        let separator = "─".repeat(layout.separator.width as usize);
        buf.set_string(
            layout.separator.x,
            layout.separator.y,
            separator,
            self.theme.border_focus,
        );

        // Results
        if self.state.visible.is_empty() {
            let no_results = Line::from(Span::styled("  No commands found.", self.theme.dimmed));
            buf.set_line(layout.list.x, layout.list.y, &no_results, layout.list.width);
            return;
        }

        let rows = self
            .state
            .visible
            .iter()
            .enumerate()
            .skip(self.state.list_offset)
            .take(layout.list.height as usize);

        for (y, (visible_row, &index)) in (layout.list.y..).zip(rows) {
            let Some(item) = self.state.items.get(index) else {
                continue;
            };
            let selected = visible_row == self.state.selected_index;
            let style = if selected {
                self.theme.list_selected
            } else {
                self.theme.list_item
            };
            let desc_style = if self.state.pending_restores.contains_key(&index) {
                self.theme.confirmation
            } else {
                self.theme.list_desc
            };

            let line = Line::from(vec![
                Span::styled(if selected { "> " } else { "  " }, style),
                Span::styled(format!("{:<14}", item.name), style),
                Span::styled(format!(" {}", item.description), desc_style),
            ]);
            buf.set_line(layout.list.x, y, &line, layout.list.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CommandItem;

    fn state() -> CommandPaletteState<'static> {
        let mut state = CommandPaletteState::new(vec![
            CommandItem::navigate("Home", "Go home", "#hero"),
            CommandItem::copy_email("Email", "Copy email"),
            CommandItem::navigate("About", "About me", "#about"),
        ]);
        state.open();
        state
    }

    #[test]
    fn test_layout_fits_all_items() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = palette_layout(area, 3);
        assert_eq!(layout.modal.height, 7);
        assert_eq!(layout.list.height, 3);
        assert_eq!(layout.query.y, layout.modal.y + 1);
        assert_eq!(layout.list.y, layout.modal.y + 3);
    }

    #[test]
    fn test_hover_on_scrolled_list_keeps_rows_still() {
        // Four list rows for seven items
        let area = Rect::new(0, 0, 100, 8);
        let mut state =
            CommandPaletteState::new(crate::app::command_palette::default_commands());
        state.open();
        let layout = palette_layout(area, state.items.len());
        let rows = layout.list.height as usize;
        assert_eq!(rows, 4);

        for _ in 0..5 {
            state.move_selection(1);
        }
        state.scroll_into_view(rows);
        assert_eq!(state.list_offset, 2);

        let top = layout.list.y;
        assert_eq!(hit_test(&state, area, layout.list.x, top), PaletteHit::Item(2));
        state.hover(2);
        state.scroll_into_view(rows);
        assert_eq!(state.list_offset, 2);
        assert_eq!(hit_test(&state, area, layout.list.x, top), PaletteHit::Item(2));

        // Moving above the window scrolls it back
        state.move_selection(-1);
        state.scroll_into_view(rows);
        assert_eq!(state.list_offset, 1);
    }

    #[test]
    fn test_hit_test_rows_and_backdrop() {
        let area = Rect::new(0, 0, 100, 30);
        let mut state = state();
        let layout = palette_layout(area, state.items.len());
        let x = layout.list.x + 2;

        assert_eq!(hit_test(&state, area, x, layout.list.y), PaletteHit::Item(0));
        assert_eq!(hit_test(&state, area, x, layout.list.y + 2), PaletteHit::Item(2));
        assert_eq!(hit_test(&state, area, x, layout.query.y), PaletteHit::Inside);
        assert_eq!(hit_test(&state, area, 0, 0), PaletteHit::Backdrop);

        // Rows past the filtered set are dead space
        state.set_query("copy");
        assert_eq!(hit_test(&state, area, x, layout.list.y), PaletteHit::Item(0));
        assert_eq!(hit_test(&state, area, x, layout.list.y + 1), PaletteHit::Inside);
    }

    #[test]
    fn test_render_marks_selection_and_confirmation() {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        let mut state = state();
        state.move_selection(1);
        state.show_transient_description(1, "✓ Copied to clipboard!");

        CommandPaletteModal {
            theme: &theme,
            state: &state,
        }
        .render(area, &mut buf);

        let layout = palette_layout(area, state.items.len());
        let row_text = |y: u16| -> String {
            (layout.list.x..layout.list.right())
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row_text(layout.list.y).starts_with("  Home"));
        assert!(row_text(layout.list.y + 1).starts_with("> Email"));
        assert!(row_text(layout.list.y + 1).contains("Copied to clipboard!"));
    }

    #[test]
    fn test_render_empty_filter() {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        let mut state = state();
        state.set_query("zzz");

        CommandPaletteModal {
            theme: &theme,
            state: &state,
        }
        .render(area, &mut buf);

        let layout = palette_layout(area, state.items.len());
        let text: String = (layout.list.x..layout.list.right())
            .map(|x| buf[(x, layout.list.y)].symbol().to_string())
            .collect();
        assert!(text.contains("No commands found."));
    }
}
