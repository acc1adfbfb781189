pub mod bytes;
pub mod fasta;

pub use fasta::FastaReader;
