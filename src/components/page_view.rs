use crate::app::state::PageState;
use crate::domain::models::{filter_slug, Category, SectionRow};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const BACK_TO_TOP: &str = " ↑ top (g) ";
const BODY_INDENT: &str = "  ";
const SKILL_LABEL_WIDTH: usize = 16;

fn filter_options() -> impl Iterator<Item = Option<Category>> {
    std::iter::once(None).chain(Category::ALL.into_iter().map(Some))
}

fn button_label(filter: Option<Category>) -> String {
    format!(" {} ", filter_slug(filter))
}

/// Column span `[start, end)` of each skills filter button.
#[must_use]
pub fn filter_buttons(area: Rect) -> Vec<(Option<Category>, u16, u16)> {
    let mut x = area.x.saturating_add(BODY_INDENT.len() as u16);
    filter_options()
        .map(|filter| {
            let start = x;
            let end = start.saturating_add(button_label(filter).len() as u16);
            x = end.saturating_add(1);
            (filter, start, end)
        })
        .collect()
}

/// Filter whose button covers `column`.
#[must_use]
pub fn filter_button_at(area: Rect, column: u16) -> Option<Option<Category>> {
    filter_buttons(area)
        .into_iter()
        .find(|(_, start, end)| column >= *start && column < *end)
        .map(|(filter, _, _)| filter)
}

pub struct PageView<'a> {
    pub page: &'a PageState,
    pub theme: &'a Theme,
}

impl PageView<'_> {
    fn row_line(&self, row: SectionRow<'_>) -> Line<'static> {
        let theme = self.theme;
        match row {
            SectionRow::Text(text) => {
                Line::from(Span::styled(format!("{BODY_INDENT}{text}"), theme.body_text))
            }
            SectionRow::EntryHeader {
                entry, expanded, ..
            } => Line::from(vec![
                Span::styled(
                    format!("{BODY_INDENT}{} ", if expanded { "▾" } else { "▸" }),
                    theme.section_title,
                ),
                Span::styled(
                    entry.role.clone(),
                    theme.body_text.add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" @ {}", entry.company), theme.body_text),
                Span::styled(format!("  {}", entry.period), theme.list_desc),
            ]),
            SectionRow::EntryDetail(text) => Line::from(Span::styled(
                format!("{BODY_INDENT}    {text}"),
                theme.list_desc,
            )),
            SectionRow::FilterBar => {
                let mut spans = vec![Span::raw(BODY_INDENT)];
                for filter in filter_options() {
                    let style = if self.page.view.skill_filter == filter {
                        theme.list_selected
                    } else {
                        theme.list_desc
                    };
                    spans.push(Span::styled(button_label(filter), style));
                    spans.push(Span::raw(" "));
                }
                Line::from(spans)
            }
            SectionRow::Blank => Line::default(),
            SectionRow::SkillGroup(group) => Line::from(vec![
                Span::styled(
                    format!("{BODY_INDENT}{:<SKILL_LABEL_WIDTH$}", group.category.label()),
                    theme.query_prompt,
                ),
                Span::styled(group.items.join(", "), theme.body_text),
            ]),
        }
    }

    /// One line per content row; matches `Section::height`.
    fn lines(&self) -> Vec<Line<'static>> {
        let active = self.page.active_section();
        let mut lines = Vec::with_capacity(self.page.content_height() as usize);

        for section in &self.page.sections {
            let title_style = if active == Some(&section.id) {
                self.theme.section_title_active
            } else {
                self.theme.section_title
            };
            lines.push(Line::from(vec![
                Span::styled("▌ ", self.theme.marker),
                Span::styled(section.title.to_uppercase(), title_style),
            ]));
            lines.extend(
                section
                    .rows(&self.page.view)
                    .into_iter()
                    .map(|row| self.row_line(row)),
            );
            lines.push(Line::default());
        }
        lines
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .scroll((self.page.scroll, 0))
            .render(area, buf);

        if self.page.show_back_to_top() && area.height > 0 {
            let width = Line::from(BACK_TO_TOP).width() as u16;
            let x = area.right().saturating_sub(width.saturating_add(1)).max(area.x);
            buf.set_stringn(
                x,
                area.bottom() - 1,
                BACK_TO_TOP,
                area.width as usize,
                self.theme.footer_key,
            );
        }
    }
}
