use std::io::BufRead;

/// Reads physical lines from a buffered source, one at a time, reusing a single buffer.
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    lines: u64,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            lines: 0,
        }
    }

    /// Returns the next line with its terminator (`\n` or `\r\n`) removed, or `None` at EOF.
    /// A last line without a terminator is still returned.
    pub fn next_line(&mut self) -> std::io::Result<Option<&[u8]>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.lines += 1;
        Ok(Some(trim_newline(&self.buf)))
    }

    /// The number of lines consumed so far; equal to the 1-based number of the last line returned.
    pub fn lines(&self) -> u64 {
        self.lines
    }
}

pub fn trim_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
