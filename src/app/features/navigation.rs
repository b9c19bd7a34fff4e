use crate::app::{
    action::{Action, UpdateResult},
    analytics::track_event,
    state::AppState,
};
use crate::domain::models::{filter_slug, TimelineEntry};
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ScrollDown(n) => {
            state.page.scroll_by(i32::from(*n));
            UpdateResult::Handled(None)
        }
        Action::ScrollUp(n) => {
            state.page.scroll_by(-i32::from(*n));
            UpdateResult::Handled(None)
        }
        Action::ScrollToTop => {
            state.page.scroll_to(0, Instant::now());
            UpdateResult::Handled(None)
        }
        Action::JumpToSection(id) => {
            if !state.page.scroll_to_section(id, Instant::now()) {
                tracing::warn!(section = %id, "unknown section");
            }
            UpdateResult::Handled(None)
        }
        Action::ToggleTimelineEntry(index) => {
            match state
                .page
                .toggle_timeline_entry(*index)
                .map(TimelineEntry::label)
            {
                Some(label) => track_event("Engagement", "expand_experience", &label),
                None => tracing::warn!(index, "unknown timeline entry"),
            }
            UpdateResult::Handled(None)
        }
        Action::FilterSkills(filter) => {
            state.page.set_skill_filter(*filter);
            track_event("Skills", "filter_tech_stack", filter_slug(*filter));
            UpdateResult::Handled(None)
        }
        Action::Resize(_, height) => {
            // Header and footer take one row each
            state.page.set_viewport_height(height.saturating_sub(2));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Category, SectionId};

    #[test]
    fn test_scroll_actions_respect_bounds() {
        let mut state = AppState::default();
        update(&mut state, &Action::Resize(80, 12));
        assert_eq!(state.page.viewport_height, 10);

        update(&mut state, &Action::ScrollUp(5));
        assert_eq!(state.page.scroll, 0);

        update(&mut state, &Action::ScrollDown(3));
        assert_eq!(state.page.scroll, 3);

        update(&mut state, &Action::ScrollDown(u16::MAX));
        assert_eq!(state.page.scroll, state.page.max_scroll());
    }

    #[test]
    fn test_jump_starts_animation() {
        let mut state = AppState::default();
        update(&mut state, &Action::Resize(80, 12));
        update(&mut state, &Action::JumpToSection(SectionId::parse("projects")));
        let anim = state.page.animation.expect("animation");
        assert_eq!(
            Some(anim.to),
            state.page.section_offset(&SectionId::parse("projects"))
        );

        update(&mut state, &Action::JumpToSection(SectionId::parse("nowhere")));
        assert_eq!(state.page.animation, Some(anim));
    }

    #[test]
    fn test_timeline_toggle_keeps_one_entry_open() {
        let mut state = AppState::default();
        update(&mut state, &Action::ToggleTimelineEntry(0));
        update(&mut state, &Action::ToggleTimelineEntry(1));
        assert_eq!(state.page.view.expanded_entry, Some(1));

        update(&mut state, &Action::ToggleTimelineEntry(1));
        assert_eq!(state.page.view.expanded_entry, None);

        update(&mut state, &Action::ToggleTimelineEntry(42));
        assert_eq!(state.page.view.expanded_entry, None);
    }

    #[test]
    fn test_filter_skills_then_all() {
        let mut state = AppState::default();
        let full = state.page.content_height();

        update(&mut state, &Action::FilterSkills(Some(Category::Languages)));
        assert_eq!(state.page.view.skill_filter, Some(Category::Languages));
        assert_eq!(state.page.content_height(), full - 2);

        update(&mut state, &Action::FilterSkills(None));
        assert_eq!(state.page.view.skill_filter, None);
        assert_eq!(state.page.content_height(), full);
    }
}
