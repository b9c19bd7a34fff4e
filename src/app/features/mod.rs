pub mod effects;
pub mod navigation;
pub mod palette;
