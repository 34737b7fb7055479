//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::tui::interaction::InteractiveRegion;
use crate::tui::theme::*;

use super::popup_area;

const PICKING_KEYS: &[(&str, &str)] = &[
    ("Space", "Pick / stop"),
    ("p", "Reveal with preview"),
    ("i", "Toggle instant result"),
    ("t", "Toggle always on top"),
];

const RANGE_KEYS: &[(&str, &str)] = &[
    ("+ / ↑", "Raise upper bound"),
    ("- / ↓", "Lower upper bound"),
    ("e", "Type upper bound"),
    ("Enter", "Apply typed bound"),
    ("Esc", "Discard typed bound"),
];

fn key_lines(keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    keys.iter()
        .map(|(key, description)| {
            Line::from(vec![
                Span::styled(format!("  {:<8}", key), Style::new().fg(TEXT_WHITE)),
                Span::styled(*description, Style::new().fg(TEXT_DIM)),
            ])
        })
        .collect()
}

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect, app: &mut App) {
    let popup_area = popup_area(area, 40, 22);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];

    lines.push(Line::from(vec![Span::styled(
        "Keyboard Shortcuts",
        Style::new().fg(TEXT_WHITE).bold(),
    )]));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Picking", Style::new().fg(LOGO_LIGHT_BLUE).bold()));
    lines.extend(key_lines(PICKING_KEYS));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Range", Style::new().fg(LOGO_MINT).bold()));
    lines.extend(key_lines(RANGE_KEYS));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("  a       ", Style::new().fg(TEXT_WHITE)),
        Span::styled("About", Style::new().fg(TEXT_DIM)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  q       ", Style::new().fg(TEXT_WHITE)),
        Span::styled("Quit", Style::new().fg(TEXT_DIM)),
    ]));
    lines.push(Line::raw(""));

    // Footer
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::new().fg(TEXT_DIM)),
        Span::styled("?", Style::new().fg(TEXT_WHITE)),
        Span::styled(" or ", Style::new().fg(TEXT_DIM)),
        Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
        Span::styled(" to close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_LIGHT_BLUE))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);

    // Any click closes the popup
    app.interactions.register(
        InteractiveRegion::clickable("help_popup", area.into(), Action::ClosePopup).with_priority(10),
    );
}
