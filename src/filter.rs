use crate::record::Record;

pub struct FilterOpts {
    /// records with fewer residues than this are dropped
    pub min_len: usize,
    /// drop records whose sequence contains a space
    pub reject_spaces: bool,
}

impl FilterOpts {
    pub fn min_len(min_len: usize) -> Self {
        FilterOpts {
            min_len,
            reject_spaces: true,
        }
    }
}

pub fn filter(record: &Record, opts: &FilterOpts) -> bool {
    if opts.reject_spaces && record.seq.contains(&b' ') {
        warn!(
            "Dropping `{}`: sequence contains spaces",
            String::from_utf8_lossy(&record.header)
        );
        return false;
    }
    record.len() >= opts.min_len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(seq: &str) -> Record {
        let mut r = Record::new("r");
        r.push_fragment(seq.as_bytes());
        r
    }

    #[test]
    fn cutoff_is_inclusive() {
        let opts = FilterOpts::min_len(4);
        assert!(!filter(&rec("ACG"), &opts));
        assert!(filter(&rec("ACGT"), &opts));
        assert!(filter(&rec("ACGTA"), &opts));
    }

    #[test]
    fn spaces_are_rejected_unless_allowed() {
        let mut opts = FilterOpts::min_len(0);
        assert!(!filter(&rec("AC GT"), &opts));

        opts.reject_spaces = false;
        assert!(filter(&rec("AC GT"), &opts));
    }
}
