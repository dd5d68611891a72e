//! NDJSON output helpers.
//!
//! - `events`: typed events, one per line
//! - `write_typed_event`: serialize one event plus newline

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write + ?Sized>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use events::*;

    #[test]
    fn write_typed_event_writes_valid_json() {
        let mut buffer = Vec::new();

        write_typed_event(&mut buffer, &WarningEvent::new("careful")).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(parsed["event"], "warning");
        assert_eq!(parsed["message"], "careful");
    }

    #[test]
    fn write_typed_event_writes_ndjson_format() {
        let mut buffer = Vec::new();

        write_typed_event(&mut buffer, &WarningEvent::new("one")).unwrap();
        write_typed_event(&mut buffer, &ErrorEvent::new("two")).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(serde_json::from_str::<serde_json::Value>(line).is_ok());
        }
    }
}
