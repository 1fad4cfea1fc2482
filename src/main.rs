//! CLI Weather Monitoring Dashboard
//!
//! A command-line dashboard that reads newline-delimited readings from a
//! serial-attached SPL06-007 weather sensor and displays temperature,
//! pressure, altitude, and two derived classifications (atmospheric
//! layer, pressure condition).
//!
//! A background thread owns the serial port and forwards classified
//! updates over a channel; this thread owns the terminal and applies
//! them, so no display state is ever touched from the reader.
//!
//! Controls:
//! - q / Esc: Quit
//! - Ctrl+C: Quit

mod app;
mod constants;
mod serial;
mod ui;
mod weather;

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen},
};

use app::{parse_args, App};
use serial::spawn_reader;
use ui::render;

fn main() -> io::Result<()> {
    // Logging goes to stderr so it never corrupts the dashboard;
    // redirect with `2>weather.log` to capture diagnostics.
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = parse_args();

    // Create app state
    let mut app = App::new(args.port.clone(), args.baud, args.refresh);

    // Start the background reader before touching the terminal
    let shutdown = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel();
    let reader = spawn_reader(args.port, args.baud, tx, Arc::clone(&shutdown));

    // Set up terminal
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, DisableLineWrap, Hide)?;

    let refresh_interval = Duration::from_millis(app.refresh_interval_ms);

    // Main loop
    loop {
        // Apply everything the reader has produced since the last turn
        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }

        // Render current state
        render(&mut stdout, &app)?;

        // Wait for a key press (with timeout so updates keep flowing)
        if event::poll(refresh_interval)? {
            if let Event::Key(key_event) = event::read()? {
                // Only handle key PRESS events, ignore Release and Repeat
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }

                if should_quit(key_event.code, key_event.modifiers) {
                    break;
                }
            }
        }
    }

    // Signal the reader and wait for it to wind down
    shutdown.store(true, Ordering::Relaxed);
    drop(rx);
    let _ = reader.join();

    // Restore terminal
    execute!(stdout, Show, EnableLineWrap, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    println!("Weather dashboard closed.");
    Ok(())
}

/// Returns true if the key combination should exit the application
fn should_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => true,
        _ => false,
    }
}
