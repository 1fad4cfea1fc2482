//! Terminal rendering logic

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use super::components::{render_footer, render_header, render_status_bar};
use super::utils::{severity_color, truncate_string};
use crate::app::App;
use crate::weather::FieldTag;

/// Two-column arrangement of the plain dashboard slots; the pressure
/// condition spans the full width below them.
const FIELD_GRID: [[FieldTag; 2]; 3] = [
    [FieldTag::Temperature, FieldTag::Pressure],
    [FieldTag::SeaLevelPressure, FieldTag::Altitude],
    [FieldTag::AtmosphereLayer, FieldTag::WeatherEstimation],
];

/// Renders the UI to the terminal
pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let width = width as usize;
    let height = height as usize;

    // Clear and move to top
    execute!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;

    // === HEADER ===
    render_header(stdout, width)?;

    // === STATUS BAR ===
    render_status_bar(stdout, app, width)?;

    execute!(stdout, Print("\r\n"))?;

    // === FIELD GRID ===
    let mut lines_used = 3;
    for row in FIELD_GRID {
        render_field_row(stdout, app, row, width)?;
        execute!(stdout, Print("\r\n"))?;
        lines_used += 2;
    }

    // === PRESSURE CONDITION (spans both columns) ===
    render_condition_row(stdout, app, width)?;
    lines_used += 1;

    // === FOOTER ===
    // Pad down so the footer sits on the last row.
    for _ in lines_used..height.saturating_sub(1) {
        execute!(stdout, Print("\r\n"))?;
    }
    render_footer(stdout, app, width)?;

    stdout.flush()
}

/// Renders one two-column row of the field grid
fn render_field_row(
    stdout: &mut io::Stdout,
    app: &App,
    row: [FieldTag; 2],
    width: usize,
) -> io::Result<()> {
    let col_width = width.saturating_sub(2) / 2;
    let left = truncate_string(&app.field(row[0]).text, col_width.saturating_sub(2));
    let right = truncate_string(&app.field(row[1]).text, col_width.saturating_sub(2));

    execute!(
        stdout,
        Print(format!(
            " {:col$}{}\r\n",
            left,
            right,
            col = col_width
        ))
    )
}

/// Renders the pressure condition in its severity color
fn render_condition_row(stdout: &mut io::Stdout, app: &App, width: usize) -> io::Result<()> {
    let slot = app.field(FieldTag::PressureCondition);
    let text = truncate_string(&slot.text, width.saturating_sub(2));

    execute!(
        stdout,
        SetForegroundColor(severity_color(slot.severity)),
        Print(format!(" {}\r\n", text)),
        ResetColor
    )
}
