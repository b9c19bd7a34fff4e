use crate::app::state::hint::HINT_TEXT;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Bottom-right corner of `area`, sized to the hint.
#[must_use]
pub fn toast_rect(area: Rect) -> Rect {
    let width = (Line::from(HINT_TEXT).width() as u16)
        .saturating_add(4)
        .min(area.width);
    let height = 3u16.min(area.height);
    Rect {
        x: area.right().saturating_sub(width.saturating_add(1)).max(area.x),
        y: area.bottom().saturating_sub(height),
        width,
        height,
    }
}

pub struct HintToast<'a> {
    pub theme: &'a Theme,
}

impl Widget for HintToast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = toast_rect(area);
        if rect.width < 3 || rect.height < 3 {
            return;
        }
        Clear.render(rect, buf);
        Paragraph::new(Line::from(format!(" {HINT_TEXT}")))
            .style(self.theme.toast)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.border),
            )
            .render(rect, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_sits_in_bottom_right() {
        let area = Rect::new(0, 1, 100, 20);
        let rect = toast_rect(area);
        assert_eq!(rect.bottom(), area.bottom());
        assert!(rect.right() < area.right());
        assert_eq!(rect.height, 3);

        let tiny = toast_rect(Rect::new(0, 0, 10, 2));
        assert!(tiny.width <= 10 && tiny.height <= 2);
    }
}
