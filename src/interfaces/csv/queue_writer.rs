use crate::domain::entry::Entry;
use crate::error::Result;
use std::io::Write;

/// Writes waiting entries as CSV (`serial_number,priority`).
///
/// This writer wraps `csv::Writer`; the header row is derived from `Entry`'s
/// field names on the first record.
pub struct QueueWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QueueWriter<W> {
    /// Creates a new `QueueWriter` over any `Write` sink (e.g., Stdout, a file).
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new().from_writer(sink);
        Self { writer }
    }

    /// Writes every entry in the given order and flushes the sink.
    pub fn write_entries<'a>(&mut self, entries: impl IntoIterator<Item = &'a Entry>) -> Result<()> {
        for entry in entries {
            self.writer.serialize(entry)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::{Priority, SerialNumber};

    #[test]
    fn test_writer_emits_header_and_rows() {
        let entries = [
            Entry::new(SerialNumber(2), Priority(1)),
            Entry::new(SerialNumber(1), Priority(4)),
        ];
        let mut out = Vec::new();
        QueueWriter::new(&mut out).write_entries(&entries).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "serial_number,priority\n2,1\n1,4\n");
    }
}
