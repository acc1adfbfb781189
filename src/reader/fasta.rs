use super::bytes::LineReader;
use crate::error::FastaError;
use crate::record::{Record, HEADER_MARKER};
use std::io::BufRead;

/// Lazily parses FASTA records from a buffered source.
///
/// Each header line starts a new record; every following non-header line is appended to it
/// until the next header or end of input. Empty and whitespace-only lines are skipped. Other data
/// appearing before the first header is reported as [`FastaError::Malformed`].
///
/// Once an error has been yielded the iterator is exhausted.
pub struct FastaReader<R> {
    lines: LineReader<R>,
    current: Option<Record>,
    sequence_lines: u64,
    eof: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader),
            current: None,
            sequence_lines: 0,
            eof: false,
        }
    }

    /// Physical lines consumed so far.
    pub fn lines(&self) -> u64 {
        self.lines.lines()
    }

    /// Non-empty sequence lines consumed so far.
    pub fn sequence_lines(&self) -> u64 {
        self.sequence_lines
    }

    fn fail(&mut self, err: FastaError) -> Option<Result<Record, FastaError>> {
        self.eof = true;
        self.current = None;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<Record, FastaError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.eof {
            return None;
        }

        loop {
            let line = match self.lines.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    // flush whatever was being accumulated
                    self.eof = true;
                    return self.current.take().map(Ok);
                }
                Err(e) => return self.fail(e.into()),
            };

            if is_blank(line) {
                continue;
            }

            match line.first() {
                None => continue,
                Some(&HEADER_MARKER) => {
                    let next = Record::new(&line[1..]);
                    if let Some(finished) = self.current.replace(next) {
                        return Some(Ok(finished));
                    }
                }
                Some(_) => match self.current.as_mut() {
                    Some(rec) => {
                        rec.push_fragment(line);
                        self.sequence_lines += 1;
                    }
                    None => {
                        let content = line.to_vec();
                        let err = FastaError::malformed(self.lines.lines(), &content);
                        return self.fail(err);
                    }
                },
            }
        }
    }
}

/// Lines made only of ASCII whitespace carry no residues.
fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, ErrorKind, Read};

    fn parse(input: &[u8]) -> Vec<Record> {
        FastaReader::new(input)
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    fn rec(header: &str, seq: &str) -> Record {
        Record {
            header: header.as_bytes().to_vec(),
            seq: seq.as_bytes().to_vec(),
        }
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(parse(b"").is_empty());
        assert!(parse(b"\n\n").is_empty());
    }

    #[test]
    fn joins_multi_line_sequences() {
        let records = parse(b">seq1\nACGT\nACGT\n>seq2\nTTTT\n");
        assert_eq!(records, vec![rec("seq1", "ACGTACGT"), rec("seq2", "TTTT")]);
    }

    #[test]
    fn keeps_header_whitespace_and_case() {
        let records = parse(b">  chr1\tdescription here  \nacGT\nNNnn\n");
        assert_eq!(records, vec![rec("  chr1\tdescription here  ", "acGTNNnn")]);
    }

    #[test]
    fn handles_crlf_and_missing_final_newline() {
        let records = parse(b">a\r\nAC\r\nGT\r\n>b\r\nTT");
        assert_eq!(records, vec![rec("a", "ACGT"), rec("b", "TT")]);
    }

    #[test]
    fn header_without_sequence() {
        let records = parse(b">a\n>b\nAC\n>c\n");
        assert_eq!(records, vec![rec("a", ""), rec("b", "AC"), rec("c", "")]);
    }

    #[test]
    fn skips_blank_lines() {
        let records = parse(b"\n>a\nAC\n\nGT\n\n>b\nT\n");
        assert_eq!(records, vec![rec("a", "ACGT"), rec("b", "T")]);
    }

    #[test]
    fn skips_whitespace_only_lines() {
        let records = parse(b"  \n\t\n>a\nAC\n   \nGT\n \t \n>b\nT T\n");
        assert_eq!(records, vec![rec("a", "ACGT"), rec("b", "T T")]);
    }

    #[test]
    fn counts_lines() {
        let mut reader = FastaReader::new(&b">a\nAC\nGT\n\n>b\nT\n"[..]);
        while let Some(r) = reader.next() {
            r.unwrap();
        }
        assert_eq!(reader.lines(), 6);
        assert_eq!(reader.sequence_lines(), 3);
    }

    #[test]
    fn sequence_before_header_is_malformed() {
        let mut reader = FastaReader::new(&b"\nACGT\n>a\nAC\n"[..]);
        match reader.next() {
            Some(Err(FastaError::Malformed { line, content })) => {
                assert_eq!(line, 2);
                assert_eq!(content, "ACGT");
            }
            other => panic!("expected a malformed error, got {other:?}"),
        }
        assert!(reader.next().is_none());
    }

    struct FailingRead;

    impl Read for FailingRead {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn read_errors_are_surfaced() {
        let mut reader = FastaReader::new(BufReader::new(FailingRead));
        assert!(matches!(reader.next(), Some(Err(FastaError::Io(_)))));
        assert!(reader.next().is_none());
    }
}
