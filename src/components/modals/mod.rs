pub mod command_palette;
pub mod helpers;
pub mod hint_toast;
