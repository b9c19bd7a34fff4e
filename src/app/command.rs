use crate::app::action::Action;
use std::time::Duration;

/// Side effects requested by the reducer, run by the loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CopyToClipboard { index: usize, text: String },
    /// Dispatch the action once the delay has elapsed.
    After(Duration, Box<Action>),
    PersistHintSeen,
}
