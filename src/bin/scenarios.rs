use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use elementary_sort::scenarios::{self, Options};
use elementary_sort::{demo, patterns, Result};

/// Times the elementary sorts against merge, quick, heap and the standard library sort on
/// ascending, mostly ascending, descending and random inputs.
#[derive(Debug, Parser)]
#[command(name = "scenarios")]
struct Cli {
    /// Input sizes to measure.
    #[arg(long, value_delimiter = ',', default_values_t = [100usize, 1_000, 10_000])]
    sizes: Vec<usize>,

    /// Samples per combination, the median is reported.
    #[arg(long, default_value_t = scenarios::MIN_REPETITIONS)]
    repetitions: usize,

    /// Quadratic sorts are skipped for sizes above this.
    #[arg(long, default_value_t = 10_000)]
    max_quadratic_len: usize,

    /// Write the full report as JSON to this file.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<()> {
    let options = Options {
        sizes: cli.sizes,
        repetitions: cli.repetitions,
        max_quadratic_len: cli.max_quadratic_len,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Seed: {}\n", patterns::random_init_seed())?;

    let report = scenarios::run(&options, &scenarios::default_methods(), &mut out)?;
    scenarios::write_summary(&mut out, &report)?;

    if let Some(path) = cli.output {
        fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        writeln!(out, "\nWrote report to {}", path.display())?;
    }

    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    demo::init_logging();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("scenario comparison failed: {err}");
            ExitCode::FAILURE
        }
    }
}
