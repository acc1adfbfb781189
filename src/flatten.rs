use crate::error::FastaError;
use crate::filter::{filter, FilterOpts};
use crate::reader::FastaReader;
use crate::record::write_record;

use serde::Serialize;
use std::io::prelude::*;

/// Counters collected over a single pass through a FASTA stream.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlattenStats {
    /// records parsed from the input
    pub records_read: usize,
    /// records written to the output
    pub records_written: usize,
    /// records dropped by a filter
    pub filtered: usize,
    /// residues written to the output
    pub bases_written: usize,
    /// non-empty sequence lines consumed from the input
    pub sequence_lines: u64,
}

/// Rewrites every record of `input` onto two lines of `writer`: the header, then the full
/// sequence with its line breaks removed. Records are written in input order.
///
/// # Errors
///
/// * `FastaError::Io` if reading `input` or writing to `writer` fails.
/// * `FastaError::Malformed` if sequence data appears before the first header. Records before
///   the error have already been written when this is returned.
pub fn flatten(input: impl BufRead, writer: &mut impl Write) -> Result<FlattenStats, FastaError> {
    flatten_where(input, writer, |_| true)
}

/// Like [`flatten`], but only writes records accepted by `opts`.
pub fn size_filter(
    input: impl BufRead,
    writer: &mut impl Write,
    opts: &FilterOpts,
) -> Result<FlattenStats, FastaError> {
    flatten_where(input, writer, |rec| filter(rec, opts))
}

/// Number of records in `input`, parsed the same way [`flatten`] parses them but not written.
pub fn count(input: impl BufRead) -> Result<usize, FastaError> {
    let mut n = 0;
    for rec in FastaReader::new(input) {
        rec?;
        n += 1;
    }
    Ok(n)
}

fn flatten_where<F>(
    input: impl BufRead,
    writer: &mut impl Write,
    mut keep: F,
) -> Result<FlattenStats, FastaError>
where
    F: FnMut(&crate::record::Record) -> bool,
{
    let mut stats = FlattenStats::default();
    let mut reader = FastaReader::new(input);

    for rec in reader.by_ref() {
        let rec = rec?;
        stats.records_read += 1;

        if !keep(&rec) {
            stats.filtered += 1;
            continue;
        }

        write_record(writer, &rec)?;
        stats.records_written += 1;
        stats.bases_written += rec.len();
    }

    stats.sequence_lines = reader.sequence_lines();
    writer.flush()?;

    debug!(
        "Read {} lines, {} of them sequence",
        reader.lines(),
        stats.sequence_lines
    );
    Ok(stats)
}
