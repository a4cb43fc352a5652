//! The fixed-input programs behind the `bubble`, `insertion` and `selection` binaries.
//!
//! Each writes to any [`Write`] so the exact console output can be checked in tests.

use std::io::Write;

use crate::{bubble, insertion, selection, Result};

pub const BUBBLE_INPUT: [i32; 7] = [1, 4, 2, 3, 5, 8, 6];
pub const INSERTION_INPUT: [i32; 5] = [70, 15, 2, 51, 60];
pub const SELECTION_INPUT: [i32; 5] = [64, 25, 12, 22, 11];

pub const BEFORE_LABEL: &str = "Antes: ";
pub const AFTER_LABEL: &str = "Después: ";

/// Writes every element followed by a single space, e.g. `1 2 3 `.
pub fn write_elements<W: Write>(out: &mut W, v: &[i32]) -> Result<()> {
    for val in v {
        write!(out, "{val} ")?;
    }

    Ok(())
}

/// Sorts [`BUBBLE_INPUT`] and prints the result without a trailing newline.
pub fn run_bubble<W: Write>(out: &mut W) -> Result<()> {
    let mut v = BUBBLE_INPUT;
    let stats = bubble::sort_with_stats(&mut v);
    log::debug!(
        "bubble sort finished after {} passes with {} swaps",
        stats.passes,
        stats.swaps
    );

    write_elements(out, &v)?;
    out.flush()?;

    Ok(())
}

/// Prints [`INSERTION_INPUT`], sorts it and prints it again, one line each.
pub fn run_insertion<W: Write>(out: &mut W) -> Result<()> {
    let mut v = INSERTION_INPUT;

    out.write_all(BEFORE_LABEL.as_bytes())?;
    write_elements(out, &v)?;
    writeln!(out)?;

    insertion::sort(&mut v);

    out.write_all(AFTER_LABEL.as_bytes())?;
    write_elements(out, &v)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

/// Sorts [`SELECTION_INPUT`] and prints the result without a trailing newline.
pub fn run_selection<W: Write>(out: &mut W) -> Result<()> {
    let mut v = SELECTION_INPUT;
    selection::sort(&mut v);

    write_elements(out, &v)?;
    out.flush()?;

    Ok(())
}

/// Sets up logging for the demo and scenario binaries. `RUST_LOG` overrides the default `warn`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
