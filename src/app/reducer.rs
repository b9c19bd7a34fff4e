use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::{
        hint::{HINT_VISIBLE_FOR, HintPhase},
        AppState,
    },
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    if let UpdateResult::Handled(cmd) = features::palette::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::navigation::update(state, &action) {
        return cmd;
    }

    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            let now = Instant::now();
            state.page.tick(now);
            if let Some(percent) = state.page.scroll_percent() {
                state.milestones.record_scroll_depth(percent);
            }
            state
                .milestones
                .record_time_on_page(now.saturating_duration_since(state.started_at));
        }
        Action::ShowHint => {
            if state.hint == HintPhase::Pending {
                state.hint = HintPhase::Visible;
                return Some(Command::After(HINT_VISIBLE_FOR, Box::new(Action::HideHint)));
            }
        }
        Action::HideHint => {
            if state.hint == HintPhase::Visible {
                state.hint = HintPhase::Done;
                return Some(Command::PersistHintSeen);
            }
        }
        _ => {}
    }
    None
}
