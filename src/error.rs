use thiserror::Error;

#[derive(Error, Debug)]
pub enum FastaError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(
        "sequence data found before any header:
line {line}
    `{content}`
suggestion: every record must start with a line beginning with `>`"
    )]
    Malformed { line: u64, content: String },
}

impl FastaError {
    pub fn malformed(line: u64, content: &[u8]) -> Self {
        FastaError::Malformed {
            line,
            content: String::from_utf8_lossy(content).into_owned(),
        }
    }
}
