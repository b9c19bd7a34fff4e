pub mod action;
pub mod analytics;
pub mod command;
pub mod command_palette;
pub mod features;
pub mod input;
pub mod keymap;
pub mod r#loop;
pub mod persistence;
pub mod reducer;
pub mod state;
pub mod ui;
