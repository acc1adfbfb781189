use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::{Args, Parser, Subcommand};

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
fastaflat version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   put multi-line FASTA records back on a single line";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    flatten_help = true,
    styles = STYLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct Verbosity {
    /// show debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// only show warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Verbosity {
    pub fn filter(&self) -> &'static str {
        match (self.verbose, self.quiet) {
            (true, _) => "debug",
            (_, true) => "warn",
            _ => "info",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flatten a FASTA file, i.e. remove line breaks from the sequence data
    #[command(arg_required_else_help = true)]
    Flatten {
        /// the input .fasta file
        #[arg(short, long)]
        input: String,

        /// the output .fasta file
        #[arg(short, long)]
        output: String,

        /// write a JSON summary of the run to this file
        #[arg(long)]
        summary: Option<String>,
    },

    /// Print every record of a FASTA file to standard output, one line per sequence
    #[command(arg_required_else_help = true)]
    Print {
        /// the input .fasta file, or `-` for standard input
        input: String,
    },

    /// Count the sequences in a FASTA file
    #[command(arg_required_else_help = true)]
    Count {
        /// the input .fasta file, or `-` for standard input
        input: String,
    },

    /// Flatten a FASTA file, keeping only sequences at least CUTOFF residues long.
    /// sequences containing spaces are dropped.
    #[command(arg_required_else_help = true, verbatim_doc_comment)]
    SizeFilter {
        /// the minimum sequence length to keep (inclusive)
        cutoff: usize,

        /// the input .fasta file, or `-` for standard input
        input: String,

        /// the output .fasta file (defaults to standard output)
        #[arg(short, long)]
        output: Option<String>,

        /// write a JSON summary of the run to this file
        #[arg(long)]
        summary: Option<String>,
    },
}
