use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
};

use crate::app::{App, InputMode};
use super::components::*;

/// Width of the centered picker column
const COLUMN_WIDTH: u16 = 40;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.interactions.clear();

    // Main vertical layout: logo, content, hotkeys
    let [logo, content, hotkeys] = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Hotkeys
    ])
    .areas(area);

    render_logo(frame, logo);

    let [column] = Layout::horizontal([Constraint::Length(COLUMN_WIDTH)])
        .flex(Flex::Center)
        .areas(content);

    let [number, _, button, _, range, _, options] = Layout::vertical([
        Constraint::Length(9), // Number display
        Constraint::Length(1),
        Constraint::Length(3), // Pick/stop button
        Constraint::Length(1),
        Constraint::Length(1), // Range field
        Constraint::Length(1),
        Constraint::Length(3), // Options
    ])
    .flex(Flex::Start)
    .areas(column);

    render_number_display(frame, number, app);
    render_toggle_button(frame, button, app);
    render_range_field(frame, range, app);
    render_options(frame, options, app);

    render_hotkeys(frame, hotkeys, app);

    match app.input_mode {
        InputMode::Help => render_help_popup(frame, area, app),
        InputMode::About => render_about_popup(frame, area, app),
        InputMode::Normal | InputMode::EditRange => {}
    }
}
