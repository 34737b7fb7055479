//! Hotkey bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode};
use crate::tui::theme::*;

pub fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let hotkeys = match app.input_mode {
        InputMode::Normal => Line::from(vec![
            Span::styled("[Space]", Style::new().fg(TEXT_WHITE)),
            Span::styled(if app.is_running() { " stop • " } else { " pick • " }, Style::new().fg(TEXT_DIM)),
            Span::styled("[+/-]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" range • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[e]", Style::new().fg(TEXT_WHITE)),
            Span::styled("dit • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[i]", Style::new().fg(TEXT_WHITE)),
            Span::styled("nstant • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[?]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" help • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
            Span::styled("uit", Style::new().fg(TEXT_DIM)),
        ]),
        InputMode::EditRange => Line::from(vec![
            Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" apply • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[↑/↓]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" step • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" cancel", Style::new().fg(TEXT_DIM)),
        ]),
        InputMode::Help | InputMode::About => Line::from(vec![
            Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" close", Style::new().fg(TEXT_DIM)),
        ]),
    };

    frame.render_widget(Paragraph::new(hotkeys), area);
}
