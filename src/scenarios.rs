//! Compares the elementary sorts against each other, the *O*(*n* \* log(*n*)) sorts and the
//! standard library across input sizes and input shapes.
//!
//! Every (size, scenario, method) combination is sampled `repetitions` times and reduced to its
//! median. Quadratic methods are skipped above `max_quadratic_len`. Within each (size, scenario)
//! group the methods are ranked by median time, skipped entries last, and the ranks are folded
//! into a per-method summary. Per size, a bar chart scaled to the slowest median shows the
//! medians side by side.

use std::collections::HashMap;
use std::hint::black_box;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::measure::{measure_duration, median};
use crate::{
    bubble, heap, insertion, merge, patterns, quick, rust_std, selection, Error, Result, Sort,
};

/// Percentage of positions swapped in [`Scenario::MostlyAscending`].
const MOSTLY_ASCENDING_SWAP_PERCENT: f64 = 5.0;

/// Width of the longest bar in the per-size chart.
const CHART_WIDTH: usize = 48;

/// Fewer samples make the median meaningless.
pub const MIN_REPETITIONS: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Ascending,
    MostlyAscending,
    Descending,
    Random,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Ascending,
        Scenario::MostlyAscending,
        Scenario::Descending,
        Scenario::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Ascending => "ascending",
            Scenario::MostlyAscending => "mostly_ascending",
            Scenario::Descending => "descending",
            Scenario::Random => "random",
        }
    }

    pub fn generate(self, len: usize) -> Vec<i32> {
        match self {
            Scenario::Ascending => patterns::ascending(len),
            Scenario::MostlyAscending => {
                patterns::mostly_ascending(len, MOSTLY_ASCENDING_SWAP_PERCENT)
            }
            Scenario::Descending => patterns::descending(len),
            Scenario::Random => patterns::random(len),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    Error,
    Skipped,
}

/// A sort taking part in the comparison.
#[derive(Clone, Debug)]
pub struct Method {
    pub name: String,
    /// Quadratic methods are skipped for sizes above [`Options::max_quadratic_len`].
    pub quadratic: bool,
    pub sort: fn(&mut [i32]),
}

impl Method {
    pub fn from_sort<S: Sort>(quadratic: bool) -> Self {
        Self {
            name: S::name(),
            quadratic,
            sort: S::sort::<i32>,
        }
    }
}

/// The standard library sort as reference, the three *O*(*n* \* log(*n*)) sorts and the three
/// elementary sorts.
pub fn default_methods() -> Vec<Method> {
    vec![
        Method::from_sort::<rust_std::SortImpl>(false),
        Method::from_sort::<merge::SortImpl>(false),
        Method::from_sort::<quick::SortImpl>(false),
        Method::from_sort::<heap::SortImpl>(false),
        Method::from_sort::<bubble::SortImpl>(true),
        Method::from_sort::<insertion::SortImpl>(true),
        Method::from_sort::<selection::SortImpl>(true),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub sizes: Vec<usize>,
    pub repetitions: usize,
    pub max_quadratic_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sizes: vec![100, 1_000, 10_000],
            repetitions: MIN_REPETITIONS,
            max_quadratic_len: 10_000,
        }
    }
}

impl Options {
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidArgument("at least one size is required".into()));
        }

        if self.sizes.contains(&0) {
            return Err(Error::InvalidArgument("sizes must be positive".into()));
        }

        if self.repetitions < MIN_REPETITIONS {
            return Err(Error::InvalidArgument(format!(
                "at least {MIN_REPETITIONS} repetitions are required, got {}",
                self.repetitions
            )));
        }

        Ok(())
    }
}

/// One timed repetition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Starts at 1.
    pub repetition: usize,
    pub secs: f64,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub len: usize,
    pub scenario: Scenario,
    pub method: String,
    /// Empty for skipped measurements.
    pub samples: Vec<Sample>,
    pub median_secs: Option<f64>,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub len: usize,
    pub scenario: Scenario,
    pub method: String,
    pub median_secs: Option<f64>,
    pub status: Status,
    pub rank: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodSummary {
    pub method: String,
    pub wins: usize,
    pub mean_rank: Option<f64>,
    pub mean_secs: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub measurements: Vec<Measurement>,
    pub ranking: Vec<RankingEntry>,
    pub summary: Vec<MethodSummary>,
}

/// Runs every combination. Writes one progress line per repetition and one with the median per
/// measurement to `out`.
pub fn run<W: Write>(options: &Options, methods: &[Method], out: &mut W) -> Result<Report> {
    options.validate()?;

    let mut measurements = Vec::new();

    for &len in &options.sizes {
        for scenario in Scenario::ALL {
            for method in methods {
                let measurement = if method.quadratic && len > options.max_quadratic_len {
                    log::debug!("Skipping {} for len {len}", method.name);
                    Measurement {
                        len,
                        scenario,
                        method: method.name.clone(),
                        samples: Vec::new(),
                        median_secs: None,
                        status: Status::Skipped,
                    }
                } else {
                    measure_method(out, method, len, scenario, options.repetitions)?
                };

                write_measurement(out, &measurement)?;
                measurements.push(measurement);
            }
        }
    }

    let ranking = rank(&measurements);
    let method_names = methods.iter().map(|m| m.name.as_str()).collect::<Vec<_>>();
    let summary = summarize(&method_names, &ranking);

    Ok(Report {
        measurements,
        ranking,
        summary,
    })
}

fn measure_method<W: Write>(
    out: &mut W,
    method: &Method,
    len: usize,
    scenario: Scenario,
    repetitions: usize,
) -> Result<Measurement> {
    let mut durations = Vec::with_capacity(repetitions);
    let mut samples = Vec::with_capacity(repetitions);

    for repetition in 1..=repetitions {
        let mut input = scenario.generate(len);
        let mut expected = input.clone();
        expected.sort();

        let duration = measure_duration(|| (method.sort)(black_box(input.as_mut_slice())));
        durations.push(duration);

        let status = if input == expected {
            Status::Ok
        } else {
            log::warn!(
                "{} produced wrong output for {} len {len} in repetition {repetition}",
                method.name,
                scenario.name()
            );
            Status::Error
        };

        let sample = Sample {
            repetition,
            secs: duration.as_secs_f64(),
            status,
        };
        writeln!(
            out,
            "len={len} scenario={} method={} repetition={} time={:.6}s status={}",
            scenario.name(),
            method.name,
            sample.repetition,
            sample.secs,
            status_name(sample.status)
        )?;
        samples.push(sample);
    }

    let status = if samples.iter().all(|sample| sample.status == Status::Ok) {
        Status::Ok
    } else {
        Status::Error
    };

    Ok(Measurement {
        len,
        scenario,
        method: method.name.clone(),
        samples,
        median_secs: median(&mut durations).map(|d| d.as_secs_f64()),
        status,
    })
}

/// Ranks the methods within every (len, scenario) group by median time, fastest first. Entries
/// without a time rank last. Groups keep the order in which they first appear.
pub fn rank(measurements: &[Measurement]) -> Vec<RankingEntry> {
    let mut group_order = Vec::new();
    let mut groups: HashMap<(usize, Scenario), Vec<&Measurement>> = HashMap::new();

    for measurement in measurements {
        let key = (measurement.len, measurement.scenario);
        groups
            .entry(key)
            .or_insert_with(|| {
                group_order.push(key);
                Vec::new()
            })
            .push(measurement);
    }

    let mut ranking = Vec::with_capacity(measurements.len());
    for key in group_order {
        let mut group = groups.remove(&key).unwrap_or_default();
        // Stable sort, ties keep measurement order.
        group.sort_by(|a, b| {
            let a_secs = a.median_secs.unwrap_or(f64::INFINITY);
            let b_secs = b.median_secs.unwrap_or(f64::INFINITY);
            a_secs.total_cmp(&b_secs)
        });

        ranking.extend(group.into_iter().enumerate().map(|(i, m)| RankingEntry {
            len: m.len,
            scenario: m.scenario,
            method: m.method.clone(),
            median_secs: m.median_secs,
            status: m.status,
            rank: i + 1,
        }));
    }

    ranking
}

/// Folds the ranking into one summary per method, in the order of `methods`.
pub fn summarize(methods: &[&str], ranking: &[RankingEntry]) -> Vec<MethodSummary> {
    methods
        .iter()
        .map(|&method| {
            let entries = ranking
                .iter()
                .filter(|entry| entry.method == method)
                .collect::<Vec<_>>();

            let wins = entries.iter().filter(|entry| entry.rank == 1).count();
            let mean_rank = mean(entries.iter().map(|entry| entry.rank as f64));
            let mean_secs = mean(entries.iter().filter_map(|entry| entry.median_secs));

            MethodSummary {
                method: method.to_owned(),
                wins,
                mean_rank,
                mean_secs,
            }
        })
        .collect()
}

fn mean(vals: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = vals.fold((0.0, 0usize), |(sum, count), val| (sum + val, count + 1));

    (count > 0).then(|| sum / count as f64)
}

fn write_measurement<W: Write>(out: &mut W, m: &Measurement) -> Result<()> {
    match m.median_secs {
        Some(secs) => writeln!(
            out,
            "len={} scenario={} method={} median={secs:.6}s status={}",
            m.len,
            m.scenario.name(),
            m.method,
            status_name(m.status)
        )?,
        None => writeln!(
            out,
            "[skipped] len={} scenario={} method={}",
            m.len,
            m.scenario.name(),
            m.method
        )?,
    }

    Ok(())
}

/// Writes the top 3 of every ranking group, a bar chart per size and the per-method summary
/// table.
pub fn write_summary<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    writeln!(out, "\nTop 3 per size and scenario:\n")?;

    let mut current_group = None;
    for entry in &report.ranking {
        let group = (entry.len, entry.scenario);
        if current_group != Some(group) {
            writeln!(out, "len={} scenario={}:", entry.len, entry.scenario.name())?;
            current_group = Some(group);
        }

        if entry.rank > 3 {
            continue;
        }

        let time = entry
            .median_secs
            .map(|secs| format!("{secs:.6}s"))
            .unwrap_or_else(|| "skipped".into());

        writeln!(
            out,
            "  rank {}: {:20} time={time} status={}",
            entry.rank,
            entry.method,
            status_name(entry.status)
        )?;
    }

    write_charts(out, &report.measurements)?;

    writeln!(out, "\nSummary per method:")?;
    writeln!(
        out,
        "{:20} | {:>4} | {:>9} | {:>14}",
        "method", "wins", "mean_rank", "mean_time(s)"
    )?;

    for summary in &report.summary {
        let mean_rank = summary
            .mean_rank
            .map(|rank| format!("{rank:.2}"))
            .unwrap_or_else(|| "N/A".into());
        let mean_secs = summary
            .mean_secs
            .map(|secs| format!("{secs:.6}"))
            .unwrap_or_else(|| "N/A".into());

        writeln!(
            out,
            "{:20} | {:>4} | {:>9} | {:>14}",
            summary.method, summary.wins, mean_rank, mean_secs
        )?;
    }

    Ok(())
}

/// One chart per size, sizes in order of appearance. Bars are scaled to the slowest median of
/// their size and never shorter than one mark.
fn write_charts<W: Write>(out: &mut W, measurements: &[Measurement]) -> Result<()> {
    let mut sizes = Vec::new();
    for m in measurements {
        if !sizes.contains(&m.len) {
            sizes.push(m.len);
        }
    }

    for len in sizes {
        writeln!(out, "\nChart len={len}:")?;

        let mut group = measurements
            .iter()
            .filter(|m| m.len == len)
            .collect::<Vec<_>>();
        group.sort_by(|a, b| (&a.method, a.scenario.name()).cmp(&(&b.method, b.scenario.name())));

        let max_secs = group
            .iter()
            .filter_map(|m| m.median_secs)
            .fold(0.0, f64::max);

        for m in group {
            match m.median_secs {
                Some(secs) => {
                    let bar_len = if max_secs > 0.0 {
                        ((secs / max_secs) * CHART_WIDTH as f64) as usize
                    } else {
                        0
                    };
                    writeln!(
                        out,
                        "{:20} | {:16} | {} {secs:.6}s",
                        m.method,
                        m.scenario.name(),
                        "#".repeat(bar_len.max(1))
                    )?;
                }
                None => writeln!(
                    out,
                    "{:20} | {:16} | (skipped)",
                    m.method,
                    m.scenario.name()
                )?,
            }
        }
    }

    Ok(())
}

fn status_name(status: Status) -> &'static str {
    match status {
        Status::Ok => "ok",
        Status::Error => "error",
        Status::Skipped => "skipped",
    }
}
