//! Byte-to-line assembly for the serial stream
//!
//! Serial reads return arbitrary chunks, so complete lines must be
//! reassembled before decoding. Bytes accumulate until a `\n` arrives;
//! each complete line is decoded as UTF-8 and trimmed of the terminator
//! and surrounding whitespace.

use super::error::{LineError, LineResult};

/// Accumulates raw serial bytes and yields complete decoded lines.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk of raw bytes from the port
    pub fn push(&mut self, bytes: &[u8]) {
        self.pending.extend_from_slice(bytes);
    }

    /// Pops the next complete line, if one has arrived.
    ///
    /// Returns `None` while no full line is buffered. A line whose bytes
    /// are not valid UTF-8 yields `Some(Err(..))` and is consumed, so a
    /// single garbled line never wedges the stream.
    pub fn next_line(&mut self) -> Option<LineResult<String>> {
        let pos = self.pending.iter().position(|&b| b == b'\n')?;
        let raw: Vec<u8> = self.pending.drain(..=pos).collect();

        match String::from_utf8(raw) {
            Ok(text) => Some(Ok(text.trim().to_string())),
            Err(e) => Some(Err(LineError::Decode {
                valid_up_to: e.utf8_error().valid_up_to(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_complete_line() {
        let mut buf = LineBuffer::new();
        buf.push(b"Temperature: 23.5 C\n");
        assert_eq!(buf.next_line(), Some(Ok("Temperature: 23.5 C".to_string())));
        assert_eq!(buf.next_line(), None);
    }

    #[test]
    fn test_line_split_across_chunks() {
        let mut buf = LineBuffer::new();
        buf.push(b"Pressure: 10");
        assert_eq!(buf.next_line(), None, "Partial line must be retained");
        buf.push(b"12.5 hPa\n");
        assert_eq!(buf.next_line(), Some(Ok("Pressure: 1012.5 hPa".to_string())));
    }

    #[test]
    fn test_multiple_lines_in_one_chunk() {
        let mut buf = LineBuffer::new();
        buf.push(b"Altitude: 120 m\nWeather Estimation: Sunny\n");
        assert_eq!(buf.next_line(), Some(Ok("Altitude: 120 m".to_string())));
        assert_eq!(
            buf.next_line(),
            Some(Ok("Weather Estimation: Sunny".to_string()))
        );
        assert_eq!(buf.next_line(), None);
    }

    #[test]
    fn test_crlf_is_stripped() {
        let mut buf = LineBuffer::new();
        buf.push(b"Temperature: 23.5 C\r\n");
        assert_eq!(buf.next_line(), Some(Ok("Temperature: 23.5 C".to_string())));
    }

    #[test]
    fn test_invalid_utf8_is_consumed_not_stuck() {
        let mut buf = LineBuffer::new();
        buf.push(b"Temp\xff\xfe garbage\nPressure: 1000.0 hPa\n");

        match buf.next_line() {
            Some(Err(LineError::Decode { valid_up_to })) => assert_eq!(valid_up_to, 4),
            other => panic!("Expected decode error, got {:?}", other),
        }

        // The garbled line is gone; the next line decodes normally.
        assert_eq!(
            buf.next_line(),
            Some(Ok("Pressure: 1000.0 hPa".to_string()))
        );
    }

    #[test]
    fn test_empty_line_yields_empty_string() {
        let mut buf = LineBuffer::new();
        buf.push(b"\n");
        assert_eq!(buf.next_line(), Some(Ok(String::new())));
    }
}
