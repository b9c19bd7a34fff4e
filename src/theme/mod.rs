use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header: Style,
    pub header_logo: Style,
    pub nav_item: Style,
    pub nav_active: Style,

    pub section_title: Style,
    pub section_title_active: Style,
    pub body_text: Style,
    pub marker: Style,

    pub list_item: Style,
    pub list_selected: Style,
    pub list_desc: Style,
    pub confirmation: Style,
    pub query_prompt: Style,

    pub footer: Style,
    pub footer_key: Style,
    pub footer_val: Style,

    pub toast: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    #[default]
    Nord,
    CatppuccinMocha,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::Nord => "Nord",
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Nord => Self::from_palette(&palette::NORD),
            PaletteType::CatppuccinMocha => Self::from_palette(&palette::CATPPUCCIN_MOCHA),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header: Style::default().fg(p.subtext0).bg(p.mantle),
            header_logo: Style::default()
                .fg(p.base)
                .bg(p.mauve)
                .add_modifier(Modifier::BOLD),
            nav_item: Style::default().fg(p.subtext0).bg(p.mantle),
            nav_active: Style::default()
                .fg(p.blue)
                .bg(p.mantle)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),

            section_title: Style::default().fg(p.peach).add_modifier(Modifier::BOLD),
            section_title_active: Style::default()
                .fg(p.yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            body_text: Style::default().fg(p.text),
            marker: Style::default().fg(p.base).bg(p.teal),

            list_item: Style::default().fg(p.text),
            list_selected: Style::default()
                .fg(p.base)
                .bg(p.blue)
                .add_modifier(Modifier::BOLD),
            list_desc: Style::default().fg(p.overlay0),
            confirmation: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            query_prompt: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),

            footer: Style::default().fg(p.subtext0).bg(p.mantle),
            footer_key: Style::default()
                .fg(p.peach)
                .bg(p.mantle)
                .add_modifier(Modifier::BOLD),
            footer_val: Style::default().fg(p.subtext0).bg(p.mantle),

            toast: Style::default()
                .fg(p.text)
                .bg(dim_color(p.blue, 0.35)),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::ITALIC),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::default())
    }
}
