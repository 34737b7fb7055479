//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `header` - Logo line
//! - `number_display` - The drawn number in large digits
//! - `controls` - Pick/stop button and the range field
//! - `options` - Instant mode and always-on-top checkboxes, exclusions
//! - `hotkeys` - Bottom hotkey bar
//! - `help_popup` - Help overlay with keybindings
//! - `about_popup` - Name and version

mod about_popup;
mod controls;
mod header;
mod help_popup;
mod hotkeys;
mod number_display;
mod options;

pub use about_popup::render_about_popup;
pub use controls::{render_range_field, render_toggle_button};
pub use header::render_logo;
pub use help_popup::render_help_popup;
pub use hotkeys::render_hotkeys;
pub use number_display::render_number_display;
pub use options::render_options;

use ratatui::layout::Rect;

/// Centered popup area of at most `width` x `height` inside `area`.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_area_centered() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(popup_area(area, 40, 10), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_popup_area_clamped_to_small_terminal() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(popup_area(area, 40, 10), Rect::new(0, 0, 20, 5));
    }
}
