extern crate env_logger;
#[macro_use]
extern crate log;

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use fastaflat::cli::{Cli, Commands};
use fastaflat::filter::FilterOpts;
use fastaflat::io::{ensure_distinct, get_reader, get_writer, STDIO_PATH};
use fastaflat::summary::RunSummary;
use fastaflat::FlattenStats;

fn report(stats: &FlattenStats, start: Instant) -> f64 {
    let elapsed = start.elapsed().as_secs_f64();
    info!(
        "{}",
        indoc::formatdoc! {"
            Completed successfully.
              records read:    {}
              records written: {}
              filtered:        {}
              bases written:   {}
              runtime:         {:.2}s",
            stats.records_read,
            stats.records_written,
            stats.filtered,
            stats.bases_written,
            elapsed
        }
    );
    elapsed
}

fn try_main(cli: Cli) -> Result<()> {
    let start = Instant::now();

    match &cli.command {
        Commands::Flatten {
            input,
            output,
            summary,
        } => {
            info!("Flattening {input} into {output}");
            let reader = get_reader(input)?;
            ensure_distinct(input, output)?;
            let mut writer = get_writer(Some(output.as_str()))?;

            let stats = fastaflat::flatten(reader, &mut writer)
                .with_context(|| format!("Could not flatten {input}"))?;
            writer.flush()?;

            let elapsed = report(&stats, start);
            if let Some(path) = summary {
                RunSummary::new("flatten", input, output, stats, elapsed).write_to(path)?;
            }
        }
        Commands::Print { input } => {
            debug!("Printing {input}");
            let reader = get_reader(input)?;
            let mut writer = get_writer(None)?;

            let stats = fastaflat::flatten(reader, &mut writer)
                .with_context(|| format!("Could not read {input}"))?;
            writer.flush()?;

            report(&stats, start);
        }
        Commands::Count { input } => {
            let reader = get_reader(input)?;
            let n = fastaflat::count(reader).with_context(|| format!("Could not read {input}"))?;

            println!(" There are {n} sequences in: {input}");
            debug!("Counted in {:.2}s", start.elapsed().as_secs_f64());
        }
        Commands::SizeFilter {
            cutoff,
            input,
            output,
            summary,
        } => {
            info!("Working on {input}, dropping all sequences shorter than {cutoff}");
            let reader = get_reader(input)?;
            if let Some(output) = output {
                ensure_distinct(input, output)?;
            }
            let mut writer = get_writer(output.as_deref())?;

            let stats = fastaflat::size_filter(reader, &mut writer, &FilterOpts::min_len(*cutoff))
                .with_context(|| format!("Could not filter {input}"))?;
            writer.flush()?;

            let elapsed = report(&stats, start);
            if let Some(path) = summary {
                let output = output.as_deref().unwrap_or(STDIO_PATH);
                RunSummary::new("size-filter", input, output, stats, elapsed).write_to(path)?;
            }
        }
    };
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.verbosity.filter()),
    )
    .format_target(false)
    .init();

    if let Err(err) = try_main(cli) {
        if log_enabled!(log::Level::Error) {
            error!("{}", err);

            // report any errors that are produced
            err.chain()
                .skip(1)
                .for_each(|cause| error!("  because: {}", cause));
        } else {
            // logging is switched off, but failures still go to stderr
            eprintln!("Error: {:#}", err);
        }

        std::process::exit(1);
    }
}
