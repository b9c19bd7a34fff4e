use crate::app::{
    action::{Action, UpdateResult},
    analytics::track_event,
    command::Command,
    state::{
        command_palette::{COPIED_MESSAGE, CONFIRMATION_DURATION},
        AppState, PaletteEffect,
    },
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TogglePalette => {
            state.palette.toggle();
            UpdateResult::Handled(None)
        }
        Action::OpenPalette => {
            state.palette.open();
            UpdateResult::Handled(None)
        }
        Action::ClosePalette => {
            state.palette.close();
            UpdateResult::Handled(None)
        }
        Action::PaletteInput(key) => {
            if state.palette.is_open {
                state.palette.input_key(*key);
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteNext => {
            state.palette.move_selection(1);
            UpdateResult::Handled(None)
        }
        Action::PalettePrev => {
            state.palette.move_selection(-1);
            UpdateResult::Handled(None)
        }
        Action::PaletteHover(row) => {
            state.palette.hover(*row);
            UpdateResult::Handled(None)
        }
        Action::PaletteExecute(index) => {
            UpdateResult::Handled(execute(state, Some(*index)))
        }
        Action::PaletteExecuteSelected => {
            let index = state.palette.selected_item();
            UpdateResult::Handled(execute(state, index))
        }
        Action::EmailCopied(index) => {
            let command = state
                .palette
                .show_transient_description(*index, COPIED_MESSAGE)
                .map(|generation| {
                    Command::After(
                        CONFIRMATION_DURATION,
                        Box::new(Action::RestoreDescription {
                            index: *index,
                            generation,
                        }),
                    )
                });
            UpdateResult::Handled(command)
        }
        Action::ClipboardFailed(reason) => {
            tracing::debug!(%reason, "copy-email left the palette unchanged");
            UpdateResult::Handled(None)
        }
        Action::RestoreDescription { index, generation } => {
            state.palette.restore_description(*index, *generation);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn execute(state: &mut AppState, index: Option<usize>) -> Option<Command> {
    let index = index?;
    let item = state.palette.items.get(index)?;
    let (name, kind) = (item.name.clone(), item.action.kind());
    let effect = state.palette.execute(index)?;
    track_event("Navigation", &format!("command_palette_{kind}"), &name);

    match effect {
        PaletteEffect::ScrollTo(target) => {
            if !state.page.scroll_to_section(&target, Instant::now()) {
                tracing::warn!(section = %target, command = %name, "navigation target not found");
            }
            None
        }
        PaletteEffect::CopyEmail { index } => Some(Command::CopyToClipboard {
            index,
            text: state.email.clone(),
        }),
    }
}
