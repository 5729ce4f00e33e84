//! Common utilities for growbuf-cmd

use anyhow::Result;
use growbuf_stopwatch::ThreadTimesStopwatch;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// One timed (group, strategy) pair.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub group: String,
    pub name: String,
    pub iterations: usize,
    pub ns_per_op: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reallocations_per_op: Option<f64>,
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs `f` `iterations` times and returns the thread CPU time per call in
/// nanoseconds.
pub fn measure<F: FnMut()>(iterations: usize, mut f: F) -> f64 {
    let mut stopwatch = ThreadTimesStopwatch::start_new();
    for _ in 0..iterations {
        f();
    }
    stopwatch.stop();
    per_op(stopwatch.elapsed().total_ns(), iterations)
}

pub fn per_op(total: u64, iterations: usize) -> f64 {
    if iterations == 0 {
        0.0
    } else {
        total as f64 / iterations as f64
    }
}

/// Formats a nanosecond figure with a unit suited to its magnitude.
pub fn format_ns(ns: f64) -> String {
    if ns >= 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.1} ns")
    }
}

pub fn print_report(report: &[Measurement], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let width = report
        .iter()
        .map(|m| m.group.len() + m.name.len() + 1)
        .max()
        .unwrap_or(0);
    for m in report {
        let label = format!("{}/{}", m.group, m.name);
        match m.reallocations_per_op {
            Some(reallocations) => println!(
                "{label:<width$}  {:>12}/op  {reallocations:>8.2} reallocs/op",
                format_ns(m.ns_per_op)
            ),
            None => println!("{label:<width$}  {:>12}/op", format_ns(m.ns_per_op)),
        }
    }
    Ok(())
}
