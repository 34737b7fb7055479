//! Option checkboxes and the exclusion summary.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::events::Action;
use crate::tui::theme::*;

fn checkbox(checked: bool, label: &str) -> Line<'_> {
    let mark = if checked { "[x] " } else { "[ ] " };
    Line::from(vec![
        Span::styled(mark, Style::new().fg(if checked { LOGO_MINT } else { TEXT_DIM })),
        Span::styled(label, Style::new().fg(TEXT_WHITE)),
    ])
}

/// Render instant mode / always-on-top checkboxes and any excluded ids.
pub fn render_options(frame: &mut Frame, area: Rect, app: &mut App) {
    let [column] = Layout::horizontal([Constraint::Length(24)])
        .flex(Flex::Center)
        .areas(area);
    let [instant, on_top, excluded] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(column);

    frame.render_widget(
        Paragraph::new(checkbox(app.engine.instant_mode(), "Instant result")),
        instant,
    );
    frame.render_widget(
        Paragraph::new(checkbox(app.always_on_top, "Always on top")),
        on_top,
    );

    let exclusions = app.engine.exclusions();
    if !exclusions.is_empty() {
        let ids: Vec<String> = exclusions.iter().map(|id| id.to_string()).collect();
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!("Excluded: {}", ids.join(", ")),
                Style::new().fg(TEXT_DIM),
            )),
            excluded,
        );
    }

    app.interactions
        .register_click("instant_mode", instant.into(), Action::ToggleInstantMode);
    app.interactions
        .register_click("always_on_top", on_top.into(), Action::ToggleAlwaysOnTop);
}
