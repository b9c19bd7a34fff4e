use crate::theme::Theme;
use chrono::{Datelike, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

const PAGE_ITEMS: &[FooterItem] = &[
    FooterItem { key: "^K", desc: "commands" },
    FooterItem { key: "j/k", desc: "scroll" },
    FooterItem { key: "1-9", desc: "jump" },
    FooterItem { key: "g", desc: "top" },
    FooterItem { key: "e", desc: "expand" },
    FooterItem { key: "f", desc: "filter" },
    FooterItem { key: "q", desc: "quit" },
];

const PALETTE_ITEMS: &[FooterItem] = &[
    FooterItem { key: "↑/↓", desc: "select" },
    FooterItem { key: "Enter", desc: "run" },
    FooterItem { key: "Esc", desc: "close" },
];

pub struct Footer<'a> {
    pub palette_open: bool,
    pub owner: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items = if self.palette_open {
            PALETTE_ITEMS
        } else {
            PAGE_ITEMS
        };

        let mut spans = Vec::new();
        for item in items {
            spans.push(Span::styled(format!(" {} ", item.key), self.theme.footer_key));
            spans.push(Span::styled(format!("{} ", item.desc), self.theme.footer_val));
        }

        let copyright = format!("© {} {} ", Local::now().year(), self.owner);
        let used: usize = spans.iter().map(Span::width).sum();
        let padding = (area.width as usize).saturating_sub(used + copyright.chars().count());
        if padding > 0 {
            spans.push(Span::styled(" ".repeat(padding), self.theme.footer));
            spans.push(Span::styled(copyright, self.theme.footer));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}
