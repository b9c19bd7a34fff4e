use crate::domain::models::{Category, Section, SectionId, SectionRow, SectionView, TimelineEntry};
use std::time::{Duration, Instant};

pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(400);
/// Rows above a section's title at which it already counts as active.
pub const ACTIVE_SECTION_LEAD: u16 = 2;
pub const BACK_TO_TOP_THRESHOLD: u16 = 10;

/// Ease-out cubic over `[0, 1]`.
#[must_use]
pub fn ease_out(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub from: u16,
    pub to: u16,
    pub started: Instant,
    pub duration: Duration,
}

impl ScrollAnimation {
    /// Offset at `now` and whether the animation has finished.
    #[must_use]
    pub fn position(&self, now: Instant) -> (u16, bool) {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return (self.to, true);
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let delta = f64::from(self.to) - f64::from(self.from);
        let pos = f64::from(self.from) + delta * ease_out(progress);
        (pos.round().clamp(0.0, f64::from(u16::MAX)) as u16, false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub sections: Vec<Section>,
    pub scroll: u16,
    pub viewport_height: u16,
    pub animation: Option<ScrollAnimation>,
    pub view: SectionView,
}

impl PageState {
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            scroll: 0,
            viewport_height: 0,
            animation: None,
            view: SectionView::default(),
        }
    }

    #[must_use]
    pub fn content_height(&self) -> u16 {
        self.sections
            .iter()
            .fold(0u16, |acc, s| acc.saturating_add(s.height(&self.view)))
    }

    #[must_use]
    pub fn max_scroll(&self) -> u16 {
        self.content_height().saturating_sub(self.viewport_height)
    }

    /// Row at which the section's title is drawn.
    #[must_use]
    pub fn section_offset(&self, id: &SectionId) -> Option<u16> {
        let mut offset = 0u16;
        for section in &self.sections {
            if &section.id == id {
                return Some(offset);
            }
            offset = offset.saturating_add(section.height(&self.view));
        }
        None
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        self.scroll = self.scroll.min(max);
        if let Some(anim) = &mut self.animation {
            anim.to = anim.to.min(max);
        }
    }

    fn timeline(&self) -> Option<&[TimelineEntry]> {
        self.sections.iter().find_map(Section::timeline)
    }

    /// Expands the entry, collapsing any other; collapses it when already
    /// open. Returns the entry, or `None` for an unknown index.
    pub fn toggle_timeline_entry(&mut self, index: usize) -> Option<&TimelineEntry> {
        if index >= self.timeline()?.len() {
            return None;
        }
        self.view.expanded_entry = if self.view.expanded_entry == Some(index) {
            None
        } else {
            Some(index)
        };
        self.clamp_scroll();
        self.timeline()?.get(index)
    }

    /// Entry the keyboard toggle acts on: the one after the open entry, or
    /// the open entry itself when it is the last.
    #[must_use]
    pub fn next_timeline_entry(&self) -> Option<usize> {
        let count = self.timeline()?.len();
        match self.view.expanded_entry {
            None if count > 0 => Some(0),
            None => None,
            Some(i) if i + 1 < count => Some(i + 1),
            Some(i) => Some(i),
        }
    }

    pub fn set_skill_filter(&mut self, filter: Option<Category>) {
        self.view.skill_filter = filter;
        self.clamp_scroll();
    }

    /// All, then each category in order, then back to all.
    #[must_use]
    pub fn next_skill_filter(&self) -> Option<Category> {
        match self.view.skill_filter {
            None => Category::ALL.first().copied(),
            Some(current) => Category::ALL
                .iter()
                .skip_while(|c| **c != current)
                .nth(1)
                .copied(),
        }
    }

    /// Body row drawn at `content_row`; titles and spacers yield `None`.
    #[must_use]
    pub fn row_at(&self, content_row: u16) -> Option<SectionRow<'_>> {
        let mut offset = 0u16;
        for section in &self.sections {
            let height = section.height(&self.view);
            if content_row < offset.saturating_add(height) {
                let body_row = content_row.checked_sub(offset.saturating_add(1))?;
                return section.rows(&self.view).get(body_row as usize).copied();
            }
            offset = offset.saturating_add(height);
        }
        None
    }

    /// Manual scrolling; cancels a running animation.
    pub fn scroll_by(&mut self, delta: i32) {
        self.animation = None;
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = target as u16;
    }

    pub fn scroll_to(&mut self, offset: u16, now: Instant) {
        let to = offset.min(self.max_scroll());
        if to == self.scroll {
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.scroll,
            to,
            started: now,
            duration: SMOOTH_SCROLL_DURATION,
        });
    }

    /// Smooth-scrolls so the section's title lands on the top row.
    /// Returns `false`, leaving the page untouched, for unknown sections.
    pub fn scroll_to_section(&mut self, id: &SectionId, now: Instant) -> bool {
        match self.section_offset(id) {
            Some(offset) => {
                self.scroll_to(offset, now);
                true
            }
            None => false,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(anim) = self.animation {
            let (pos, done) = anim.position(now);
            self.scroll = pos.min(self.max_scroll());
            if done {
                self.animation = None;
            }
        }
    }

    /// Section to highlight in the navigation bar.
    #[must_use]
    pub fn active_section(&self) -> Option<&SectionId> {
        let max = self.max_scroll();
        if max > 0 && self.scroll >= max {
            return self.sections.last().map(|s| &s.id);
        }

        let mut offset = 0u16;
        for section in &self.sections {
            let top = offset.saturating_sub(ACTIVE_SECTION_LEAD);
            let bottom = offset
                .saturating_add(section.height(&self.view))
                .saturating_sub(ACTIVE_SECTION_LEAD);
            if self.scroll >= top && self.scroll < bottom {
                return Some(&section.id);
            }
            offset = offset.saturating_add(section.height(&self.view));
        }
        None
    }

    /// Percentage of the scrollable distance covered, `None` when nothing scrolls.
    #[must_use]
    pub fn scroll_percent(&self) -> Option<u8> {
        let max = self.max_scroll();
        if max == 0 {
            return None;
        }
        Some(((u32::from(self.scroll) * 100) / u32::from(max)).min(100) as u8)
    }

    #[must_use]
    pub fn show_back_to_top(&self) -> bool {
        self.scroll > BACK_TO_TOP_THRESHOLD
    }
}
