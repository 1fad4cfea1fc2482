//! Header, status bar, and footer components

use std::io;

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use super::utils::status_color;
use crate::app::App;
use crate::constants::DISPLAY_NAME;

/// Renders the application header bar.
pub fn render_header(stdout: &mut io::Stdout, width: usize) -> io::Result<()> {
    execute!(
        stdout,
        SetBackgroundColor(Color::DarkBlue),
        SetForegroundColor(Color::White),
        Print(format!("{:width$}", format!(" {}", DISPLAY_NAME), width = width)),
        ResetColor,
        Print("\r\n")
    )
}

/// Renders the connection status line.
///
/// Shows the port identity, connection state, and how many field
/// updates have arrived since startup.
pub fn render_status_bar(stdout: &mut io::Stdout, app: &App, width: usize) -> io::Result<()> {
    let port_str = format!("Port: {} @ {} baud", app.port_name, app.baud_rate);
    let updates_str = format!("Updates: {}", app.updates_received);

    execute!(
        stdout,
        SetForegroundColor(Color::Cyan),
        Print(format!(" {}  |  ", port_str)),
        SetForegroundColor(status_color(app.connection)),
        Print(app.connection.label()),
        SetForegroundColor(Color::Cyan),
        Print(format!("  |  {}", updates_str)),
        ResetColor,
        Print(format!(
            "{:pad$}\r\n",
            "",
            pad = width
                .saturating_sub(port_str.len() + app.connection.label().len() + updates_str.len() + 10)
        ))
    )
}

/// Renders the footer with key hints.
pub fn render_footer(stdout: &mut io::Stdout, app: &App, width: usize) -> io::Result<()> {
    let hints = " q/Esc: Quit";
    let refresh_str = format!("Refresh: {}ms ", app.refresh_interval_ms);
    let spacing = width.saturating_sub(hints.len() + refresh_str.len());

    execute!(
        stdout,
        SetBackgroundColor(Color::DarkGrey),
        SetForegroundColor(Color::White),
        Print(hints),
        Print(format!("{:spacing$}", "", spacing = spacing)),
        Print(refresh_str),
        ResetColor
    )
}
