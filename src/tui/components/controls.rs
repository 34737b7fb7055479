//! Pick/stop button and range field.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode};
use crate::events::Action;
use crate::tui::interaction::InteractiveRegion;
use crate::tui::theme::*;

/// Render the toggle button and make it clickable.
pub fn render_toggle_button(frame: &mut Frame, area: Rect, app: &mut App) {
    let [button] = Layout::horizontal([Constraint::Length(14)])
        .flex(Flex::Center)
        .areas(area);

    let accent = if app.is_running() { LOGO_CORAL } else { LOGO_MINT };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(accent));
    let label = Paragraph::new(Line::styled(app.toggle_label(), Style::new().fg(TEXT_WHITE).bold()))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(label, button);

    app.interactions
        .register_click("toggle_button", button.into(), Action::Toggle);
}

/// Render "Range 1 – [-] 45 [+]" and register its click/scroll regions.
pub fn render_range_field(frame: &mut Frame, area: Rect, app: &mut App) {
    let [label, dec, field, inc] = Layout::horizontal([
        Constraint::Length(11),
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Length(3),
    ])
    .flex(Flex::Center)
    .areas(area);

    let editing = app.input_mode == InputMode::EditRange;
    let text = app.range_field_text();

    frame.render_widget(
        Paragraph::new(Line::styled("Range 1 – ", Style::new().fg(TEXT_DIM))),
        label,
    );
    frame.render_widget(
        Paragraph::new(Line::styled("[-]", Style::new().fg(LOGO_LIGHT_BLUE))),
        dec,
    );
    frame.render_widget(
        Paragraph::new(Line::styled("[+]", Style::new().fg(LOGO_LIGHT_BLUE))),
        inc,
    );

    let field_style = if editing {
        Style::new().fg(TEXT_WHITE).bg(ratatui::style::Color::DarkGray)
    } else {
        Style::new().fg(TEXT_WHITE).bold()
    };
    let visible: String = text.chars().take(field.width.saturating_sub(2) as usize).collect();
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(" "), Span::styled(visible.clone(), field_style)])),
        field,
    );

    if editing {
        let cursor_x = field.x + 1 + visible.chars().count() as u16;
        frame.set_cursor_position(Position::new(cursor_x.min(field.right().saturating_sub(1)), field.y));
    }

    app.interactions
        .register_click("range_decrement", dec.into(), Action::DecrementRange);
    app.interactions
        .register_click("range_increment", inc.into(), Action::IncrementRange);
    app.interactions.register(InteractiveRegion::interactive(
        "range_field",
        field.into(),
        if editing { Action::CommitRange } else { Action::EditRange },
        Action::IncrementRange,
        Action::DecrementRange,
    ));
}
