use ratatui::style::Color;

pub struct Palette {
    pub base: Color,
    pub mantle: Color,
    pub text: Color,
    pub subtext0: Color,
    pub surface0: Color,
    pub surface2: Color,
    pub overlay0: Color,
    pub blue: Color,
    pub teal: Color,
    pub green: Color,
    pub yellow: Color,
    pub peach: Color,
    pub mauve: Color,
}

/// Scale an `Rgb` color's channels by `factor` (0.0 = black, 1.0 = unchanged).
/// Non-Rgb `Color` variants are returned as-is.
pub fn dim_color(c: Color, factor: f32) -> Color {
    if let Color::Rgb(r, g, b) = c {
        Color::Rgb(
            (f32::from(r) * factor) as u8,
            (f32::from(g) * factor) as u8,
            (f32::from(b) * factor) as u8,
        )
    } else {
        c
    }
}

pub const NORD: Palette = Palette {
    base: Color::Rgb(46, 52, 64),
    mantle: Color::Rgb(59, 66, 82),
    text: Color::Rgb(236, 239, 244),
    subtext0: Color::Rgb(216, 222, 233),
    surface0: Color::Rgb(76, 86, 106),
    surface2: Color::Rgb(67, 76, 94),
    overlay0: Color::Rgb(129, 161, 193),
    blue: Color::Rgb(136, 192, 208),
    teal: Color::Rgb(143, 188, 187),
    green: Color::Rgb(163, 190, 140),
    yellow: Color::Rgb(235, 203, 139),
    peach: Color::Rgb(208, 135, 112),
    mauve: Color::Rgb(180, 142, 173),
};

pub const CATPPUCCIN_MOCHA: Palette = Palette {
    base: Color::Rgb(30, 30, 46),
    mantle: Color::Rgb(24, 24, 37),
    text: Color::Rgb(205, 214, 244),
    subtext0: Color::Rgb(166, 173, 200),
    surface0: Color::Rgb(49, 50, 68),
    surface2: Color::Rgb(88, 91, 112),
    overlay0: Color::Rgb(108, 112, 134),
    blue: Color::Rgb(137, 180, 250),
    teal: Color::Rgb(148, 226, 213),
    green: Color::Rgb(166, 227, 161),
    yellow: Color::Rgb(249, 226, 175),
    peach: Color::Rgb(250, 179, 135),
    mauve: Color::Rgb(203, 166, 247),
};
