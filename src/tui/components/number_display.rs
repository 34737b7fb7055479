//! Number display: the current draw in large block digits.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::engine::DisplayStyle;
use crate::tui::theme::{number_border_style, number_style};

/// Rows of each glyph
pub const GLYPH_HEIGHT: usize = 5;

const GLYPHS: [[&str; GLYPH_HEIGHT]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

/// Lay out `digits` as block glyphs, one string per row.
///
/// Returns `None` if `digits` contains anything but ASCII digits.
pub fn big_digits(digits: &str) -> Option<Vec<String>> {
    let glyphs: Vec<_> = digits
        .chars()
        .map(|c| c.to_digit(10).map(|d| &GLYPHS[d as usize]))
        .collect::<Option<_>>()?;

    Some(
        (0..GLYPH_HEIGHT)
            .map(|row| {
                glyphs
                    .iter()
                    .map(|glyph| glyph[row])
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect(),
    )
}

/// Render the number display.
pub fn render_number_display(frame: &mut Frame, area: Rect, app: &App) {
    let style = app.display.style;
    let text = app.display.value.unwrap_or(0).to_string();

    let title = if app.is_running() {
        " drawing "
    } else if style == DisplayStyle::Result {
        " result "
    } else {
        ""
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(number_border_style(style))
        .title(title)
        .title_alignment(Alignment::Center);

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let big = big_digits(&text).filter(|rows| {
        inner_height >= GLYPH_HEIGHT && rows[0].chars().count() <= inner_width
    });

    let mut lines: Vec<Line> = vec![];
    match big {
        Some(rows) => {
            let top = (inner_height - GLYPH_HEIGHT) / 2;
            lines.extend((0..top).map(|_| Line::raw("")));
            lines.extend(rows.into_iter().map(Line::raw));
        }
        // Too wide for block digits: plain text, vertically centered
        None => {
            lines.extend((0..inner_height / 2).map(|_| Line::raw("")));
            lines.push(Line::raw(text));
        }
    }

    let paragraph = Paragraph::new(lines)
        .style(number_style(style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
