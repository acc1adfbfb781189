use anyhow::{ensure, Context, Result};
use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Path used on the command line to mean standard input or output.
pub const STDIO_PATH: &str = "-";

/// Opens `input` for buffered reading. `-` reads from standard input.
///
/// # Errors
///
/// Returns an error naming the file if it cannot be opened.
pub fn get_reader(input: &str) -> Result<Box<dyn BufRead>> {
    if input == STDIO_PATH {
        return Ok(Box::new(stdin().lock()));
    }

    let file =
        File::open(Path::new(input)).with_context(|| format!("Unable to open file {input}"))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Creates a `BufWriter` for the given output option. This allows for an output file to be passed
/// or otherwise will default to using standard output.
///
/// The returned writer must be flushed by the caller so that write errors are not lost on drop.
pub fn get_writer(output: Option<&str>) -> Result<BufWriter<Box<dyn Write>>> {
    // get output as a BufWriter - equal to stdout if None
    let writer = BufWriter::new(match output {
        Some(x) if x != STDIO_PATH => {
            let file = File::create(Path::new(x))
                .with_context(|| format!("Unable to create output file {x}"))?;
            Box::new(file) as Box<dyn Write>
        }
        _ => Box::new(stdout().lock()) as Box<dyn Write>,
    });
    Ok(writer)
}

/// Fails if `output` names the same file as `input`, since creating the output would truncate
/// the input before it is read. An output that does not exist yet is always distinct.
pub fn ensure_distinct(input: &str, output: &str) -> Result<()> {
    if input == STDIO_PATH || output == STDIO_PATH {
        return Ok(());
    }

    let Ok(output_path) = std::fs::canonicalize(output) else {
        return Ok(());
    };
    let input_path =
        std::fs::canonicalize(input).with_context(|| format!("Unable to open file {input}"))?;

    ensure!(
        input_path != output_path,
        "Output file {output} is the same file as input {input}, refusing to overwrite it"
    );
    Ok(())
}
