#[macro_use]
extern crate log;

pub mod cli;
pub mod error;
pub mod filter;
pub mod flatten;
pub mod io;
pub mod reader;
pub mod record;
pub mod summary;

pub use error::FastaError;
pub use flatten::{count, flatten, size_filter, FlattenStats};
pub use reader::FastaReader;
pub use record::{write_record, Record};
