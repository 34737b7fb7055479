//! Logo line.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme::*;

const LOGO: &str = "numpick";

/// Render the colorful "numpick" logo centered in the area.
pub fn render_logo(frame: &mut Frame, area: Rect) {
    let colors = [LOGO_CORAL, LOGO_GOLD, LOGO_LIGHT_BLUE, LOGO_MINT];
    let padding = (area.width.saturating_sub(LOGO.len() as u16)) / 2;

    let mut spans = vec![Span::raw(" ".repeat(padding as usize))];
    spans.extend(LOGO.chars().zip(colors.iter().cycle()).map(|(c, color)| {
        Span::styled(c.to_string(), Style::new().fg(*color).bold())
    }));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
