//! Command-line argument parsing (manual implementation)

use std::env;
use std::process;

use crate::constants::{
    APP_NAME, APP_VERSION, DEFAULT_BAUD, DEFAULT_PORT, DEFAULT_REFRESH_MS, MAX_REFRESH_MS,
    MIN_REFRESH_MS,
};

/// Parsed command-line arguments
#[derive(Debug)]
pub struct Args {
    /// Serial port to read from
    pub port: String,
    /// Baud rate for the serial connection
    pub baud: u32,
    /// UI refresh interval in milliseconds
    pub refresh: u64,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            baud: DEFAULT_BAUD,
            refresh: DEFAULT_REFRESH_MS,
        }
    }
}

/// Print help message and exit
fn print_help() {
    println!(
        "{} {}
A command-line weather dashboard for serial-attached SPL06-007 sensors.

USAGE:
    {} [OPTIONS]

OPTIONS:
    -p, --port <PORT>      Serial port to read from [default: {}]
    -b, --baud <RATE>      Baud rate [default: {}]
    -r, --refresh <MS>     UI refresh interval in milliseconds [default: {}]
                           Range: {}-{}
    -h, --help             Print help information
    -V, --version          Print version information

EXAMPLES:
    {}                          Start with default settings
    {} -p /dev/ttyACM0          Read from a different port
    {} -p COM3 -b 9600          Custom port and baud rate

CONTROLS:
    q / Esc   Quit
    Ctrl+C    Quit

Diagnostics are logged to stderr; set RUST_LOG=debug for more detail.",
        APP_NAME,
        APP_VERSION,
        APP_NAME,
        DEFAULT_PORT,
        DEFAULT_BAUD,
        DEFAULT_REFRESH_MS,
        MIN_REFRESH_MS,
        MAX_REFRESH_MS,
        APP_NAME,
        APP_NAME,
        APP_NAME
    );
    process::exit(0);
}

/// Print version and exit
fn print_version() {
    println!("{} {}", APP_NAME, APP_VERSION);
    process::exit(0);
}

/// Print error message and exit
fn print_error(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    eprintln!("For more information, try '--help'");
    process::exit(1);
}

/// Parse baud rate from string
fn parse_baud(s: &str) -> Result<u32, String> {
    match s.parse::<u32>() {
        Ok(rate) if rate > 0 => Ok(rate),
        Ok(_) => Err(format!("baud rate must be positive, got '{}'", s)),
        Err(_) => Err(format!("invalid baud rate '{}'. Must be a number", s)),
    }
}

/// Parse refresh interval from string
fn parse_refresh(s: &str) -> Result<u64, String> {
    match s.parse::<u64>() {
        Ok(ms) if (MIN_REFRESH_MS..=MAX_REFRESH_MS).contains(&ms) => Ok(ms),
        Ok(ms) => Err(format!(
            "refresh interval {} is out of range. Must be between {} and {} ms",
            ms, MIN_REFRESH_MS, MAX_REFRESH_MS
        )),
        Err(_) => Err(format!("invalid refresh interval '{}'. Must be a number", s)),
    }
}

/// Parse command-line arguments
pub fn parse_args() -> Args {
    let mut args = Args::default();
    let mut argv: Vec<String> = env::args().skip(1).collect();

    while !argv.is_empty() {
        let arg = argv.remove(0);

        match arg.as_str() {
            "-h" | "--help" => print_help(),
            "-V" | "--version" => print_version(),

            "-p" | "--port" => {
                if argv.is_empty() {
                    print_error("--port requires a value");
                }
                args.port = argv.remove(0);
            }

            "-b" | "--baud" => {
                if argv.is_empty() {
                    print_error("--baud requires a value");
                }
                args.baud = parse_baud(&argv.remove(0)).unwrap_or_else(|e| print_error(&e));
            }

            "-r" | "--refresh" => {
                if argv.is_empty() {
                    print_error("--refresh requires a value");
                }
                args.refresh = parse_refresh(&argv.remove(0)).unwrap_or_else(|e| print_error(&e));
            }

            // Handle --key=value syntax
            s if s.starts_with("--") && s.contains('=') => {
                let parts: Vec<&str> = s.splitn(2, '=').collect();
                let key = parts[0];
                let value = parts[1];

                match key {
                    "--port" => args.port = value.to_string(),
                    "--baud" => {
                        args.baud = parse_baud(value).unwrap_or_else(|e| print_error(&e))
                    }
                    "--refresh" => {
                        args.refresh = parse_refresh(value).unwrap_or_else(|e| print_error(&e))
                    }
                    _ => print_error(&format!("unknown option '{}'", key)),
                }
            }

            s if s.starts_with('-') => {
                print_error(&format!("unknown option '{}'", s));
            }

            s => {
                print_error(&format!("unexpected argument '{}'", s));
            }
        }
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_baud() {
        assert_eq!(parse_baud("115200"), Ok(115_200));
        assert_eq!(parse_baud("9600"), Ok(9600));
        assert!(parse_baud("0").is_err());
        assert!(parse_baud("fast").is_err());
    }

    #[test]
    fn test_parse_refresh() {
        assert_eq!(parse_refresh("250"), Ok(250));
        assert!(parse_refresh("10").is_err(), "Below minimum");
        assert!(parse_refresh("99999").is_err(), "Above maximum");
        assert!(parse_refresh("soon").is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::default();
        assert_eq!(args.baud, DEFAULT_BAUD);
        assert_eq!(args.refresh, DEFAULT_REFRESH_MS);
        assert_eq!(args.port, DEFAULT_PORT);
    }
}
