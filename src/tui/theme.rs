use ratatui::style::{Color, Style};

use crate::engine::DisplayStyle;

// Logo colors
pub const LOGO_CORAL: Color = Color::Rgb(232, 131, 136);     // #E88388
pub const LOGO_GOLD: Color = Color::Rgb(219, 171, 121);      // #DBAB79
pub const LOGO_LIGHT_BLUE: Color = Color::Rgb(124, 175, 194); // #7CAFC2
pub const LOGO_MINT: Color = Color::Rgb(161, 193, 129);       // #A1C181

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
pub const RESULT_BLUE: Color = Color::Rgb(59, 130, 246);      // #3B82F6

/// Style of the number display for each engine style.
pub fn number_style(style: DisplayStyle) -> Style {
    match style {
        DisplayStyle::Normal => Style::new().fg(TEXT_WHITE),
        DisplayStyle::Result => Style::new().fg(RESULT_BLUE).bold(),
    }
}

/// Border of the number display; emphasized once a result settles.
pub fn number_border_style(style: DisplayStyle) -> Style {
    match style {
        DisplayStyle::Normal => Style::new().fg(TEXT_DIM),
        DisplayStyle::Result => Style::new().fg(RESULT_BLUE),
    }
}
