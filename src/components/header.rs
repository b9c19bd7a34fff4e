use crate::domain::models::{Section, SectionId};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const LOGO: &str = " FOLIO ";

fn tab_label(position: usize, section: &Section) -> String {
    format!(" {}:{} ", position + 1, section.title)
}

/// Column span `[start, end)` of each nav tab, in section order.
#[must_use]
pub fn tab_columns(sections: &[Section], area: Rect) -> Vec<(u16, u16)> {
    let mut x = area.x.saturating_add(LOGO.len() as u16 + 1);
    sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let width = Span::raw(tab_label(i, section)).width() as u16;
            let span = (x, x.saturating_add(width));
            x = span.1;
            span
        })
        .collect()
}

/// Section whose tab sits under the pointer.
#[must_use]
pub fn nav_hit_test(sections: &[Section], area: Rect, column: u16, row: u16) -> Option<SectionId> {
    if row != area.y || column >= area.right() {
        return None;
    }
    tab_columns(sections, area)
        .into_iter()
        .zip(sections)
        .find(|((start, end), _)| column >= *start && column < *end)
        .map(|(_, section)| section.id.clone())
}

pub struct Header<'a> {
    pub sections: &'a [Section],
    pub active: Option<&'a SectionId>,
    pub owner: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(LOGO, self.theme.header_logo),
            Span::styled(" ", self.theme.header),
        ];

        for (i, section) in self.sections.iter().enumerate() {
            let style = if self.active == Some(&section.id) {
                self.theme.nav_active
            } else {
                self.theme.nav_item
            };
            spans.push(Span::styled(tab_label(i, section), style));
        }

        let used: usize = spans.iter().map(Span::width).sum();
        let owner = format!(" {} ", self.owner);
        let padding = (area.width as usize).saturating_sub(used + owner.chars().count());
        if padding > 0 {
            spans.push(Span::styled(" ".repeat(padding), self.theme.header));
            spans.push(Span::styled(owner, self.theme.header));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
