use std::time::Duration;

pub const HINT_DELAY: Duration = Duration::from_secs(2);
pub const HINT_VISIBLE_FOR: Duration = Duration::from_secs(5);
pub const HINT_TEXT: &str = "Tip: press Ctrl+K to open the command palette";

/// One-time keyboard hint. Only `Done` is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintPhase {
    Pending,
    Visible,
    Done,
}

impl HintPhase {
    #[must_use]
    pub fn initial(hint_seen: bool) -> Self {
        if hint_seen {
            HintPhase::Done
        } else {
            HintPhase::Pending
        }
    }
}
