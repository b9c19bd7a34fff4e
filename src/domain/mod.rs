pub mod clipboard;
pub mod content;
pub mod models;
