use std::io::Write;

pub const HEADER_MARKER: u8 = b'>';

/// A single FASTA record with its sequence already joined onto one line.
///
/// # Fields
///
/// * `header` - The header line without the leading `>`, kept verbatim
/// * `seq` - The concatenated sequence lines, without any line terminators
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub header: Vec<u8>,
    pub seq: Vec<u8>,
}

impl Record {
    pub fn new(header: impl Into<Vec<u8>>) -> Self {
        Record {
            header: header.into(),
            seq: Vec::new(),
        }
    }

    pub fn push_fragment(&mut self, fragment: &[u8]) {
        self.seq.extend_from_slice(fragment);
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Writes a record as a header line followed by a single sequence line.
///
/// # Arguments
///
/// * `writer` - Anything implementing `std::io::Write`. A `Vec<u8>` or `std::io::Cursor` is fine
///   for tests.
/// * `record` - The record to write.
pub fn write_record(writer: &mut impl Write, record: &Record) -> std::io::Result<()> {
    writer.write_all(&[HEADER_MARKER])?;
    writer.write_all(&record.header)?;
    writer.write_all(b"\n")?;
    writer.write_all(&record.seq)?;
    writer.write_all(b"\n")
}
