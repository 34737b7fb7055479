//! About popup component.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::tui::interaction::InteractiveRegion;
use crate::tui::theme::*;

use super::popup_area;

pub fn render_about_popup(frame: &mut Frame, area: Rect, app: &mut App) {
    let popup_area = popup_area(area, 34, 8);
    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::styled(
            format!("numpick v{}", env!("CARGO_PKG_VERSION")),
            Style::new().fg(TEXT_WHITE).bold(),
        ),
        Line::raw(""),
        Line::styled("Random number picker", Style::new().fg(TEXT_DIM)),
        Line::styled("for the classroom", Style::new().fg(TEXT_DIM)),
        Line::raw(""),
        Line::styled("Esc to close", Style::new().fg(TEXT_DIM)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" About ")
        .border_style(Style::new().fg(LOGO_GOLD))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, popup_area);

    app.interactions.register(
        InteractiveRegion::clickable("about_popup", area.into(), Action::ClosePopup).with_priority(10),
    );
}
