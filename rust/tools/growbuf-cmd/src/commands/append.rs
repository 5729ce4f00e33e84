//! Append command implementation

use std::hint::black_box;

use anyhow::{Context, Result};
use growbuf_stopwatch::ThreadTimesStopwatch;
use growbuf_workloads::{AppendInput, AppendStrategy, SliceAppendCase};

use crate::commands::verify_iterations;
use crate::utils::{Measurement, per_op};

/// Runs the slice-append workloads for string and record elements.
///
/// `custom` replaces the default case matrix with a single
/// `(base_len, tail_len)` case.
pub fn run(
    iterations: usize,
    seed: u64,
    custom: Option<(usize, usize)>,
    base_capacity: usize,
    rounds: usize,
) -> Result<Vec<Measurement>> {
    verify_iterations(iterations)?;
    let cases = match custom {
        Some((base_len, tail_len)) => vec![SliceAppendCase::new(
            base_len,
            base_capacity,
            tail_len,
            rounds,
        )],
        None => SliceAppendCase::default_cases(),
    };

    let mut report = Vec::new();
    for case in cases {
        log::info!("running {}", case.name());

        let strings = AppendInput::strings(case, seed)
            .with_context(|| format!("invalid case {}", case.name()))?;
        measure_input(&mut report, "string", &strings, iterations);
        let records = AppendInput::records(case, seed)
            .with_context(|| format!("invalid case {}", case.name()))?;
        measure_input(&mut report, "record", &records, iterations);
    }
    Ok(report)
}

fn measure_input<T: Clone>(
    report: &mut Vec<Measurement>,
    element: &str,
    input: &AppendInput<T>,
    iterations: usize,
) {
    for strategy in AppendStrategy::ALL {
        let mut stopwatch = ThreadTimesStopwatch::new();
        let mut reallocations = 0;
        for _ in 0..iterations {
            // Building and dropping the base is kept out of the measurement.
            let base = input.make_base();
            stopwatch.start();
            let (out, run) = strategy.run(base, &input.tail, input.case.rounds);
            stopwatch.stop();
            reallocations += run.reallocations;
            drop(black_box(out));
        }
        log::trace!(
            "{} {element} {strategy}: {reallocations} reallocations",
            input.case.name()
        );
        report.push(Measurement {
            group: input.case.name(),
            name: format!("{strategy}/{element}"),
            iterations,
            ns_per_op: per_op(stopwatch.elapsed().total_ns(), iterations),
            reallocations_per_op: Some(reallocations as f64 / iterations as f64),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reallocation_counts() {
        let report = run(3, 1, Some((0, 4)), 0, 256).unwrap();
        let by_name = |name: &str| {
            report
                .iter()
                .find(|m| m.name == name)
                .and_then(|m| m.reallocations_per_op)
                .unwrap()
        };
        assert_eq!(by_name("exact_fit/string"), 256.0);
        assert_eq!(by_name("doubling/record"), 9.0);
    }

    #[test]
    fn test_default_matrix() {
        let report = run(1, 1, None, 0, 1).unwrap();
        assert_eq!(
            report.len(),
            SliceAppendCase::default_cases().len() * 2 * AppendStrategy::ALL.len()
        );
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(run(1, 1, Some((1, 1)), 0, 0).is_err());
    }

    #[test]
    fn test_overflowing_case_rejected() {
        let err = run(1, 1, Some((0, 1 << 63)), 0, 2).unwrap_err();
        assert!(err.to_string().starts_with("invalid case"));
    }
}
