use std::io::{self, Write};

use crate::domain::stage::EventRecord;

/// Writes the event log as CSV with a `stage,cumulative_minutes` header,
/// one row per record in log order.
pub fn write_event_log_csv<W: Write>(writer: &mut W, event_log: &[EventRecord]) -> io::Result<()> {
    writeln!(writer, "stage,cumulative_minutes")?;
    for record in event_log {
        writeln!(writer, "{},{}", record.stage.label(), record.cumulative_minutes)?;
    }
    writer.flush()
}

pub fn write_event_log_csv_file(path: &str, event_log: &[EventRecord]) -> io::Result<()> {
    let mut buffer = Vec::new();
    write_event_log_csv(&mut buffer, event_log)?;
    std::fs::write(path, buffer)
}
