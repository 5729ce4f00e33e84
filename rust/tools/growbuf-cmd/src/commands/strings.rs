//! Strings command implementation

use std::collections::HashSet;
use std::hint::black_box;

use anyhow::{Context, Result};
use growbuf_workloads::{ConcatStrategy, ResetStrategy, SegmentSet, StringBuildCase};

use crate::commands::verify_iterations;
use crate::utils::{Measurement, measure};

/// Runs the concatenation and reset workloads.
///
/// `custom` replaces the default case matrix with a single
/// `(num_segments, segment_length)` case.
pub fn run(
    iterations: usize,
    seed: u64,
    custom: Option<(usize, usize)>,
    clear_frequency: usize,
) -> Result<Vec<Measurement>> {
    verify_iterations(iterations)?;
    let cases = match custom {
        Some((num_segments, segment_length)) => vec![StringBuildCase::new(
            num_segments,
            segment_length,
            clear_frequency,
        )],
        None => StringBuildCase::default_cases(),
    };

    let mut report = Vec::new();
    let mut concat_groups = HashSet::new();
    for case in cases {
        case.validate()
            .with_context(|| format!("invalid case {}", case.reset_name()))?;
        let set = SegmentSet::generate(case.num_segments, case.segment_length, seed);
        let hint = case.size_hint();

        let group = case.concat_name();
        if concat_groups.insert(group.clone()) {
            log::info!("running {group}");
            for strategy in ConcatStrategy::ALL {
                let ns_per_op = measure(iterations, || {
                    black_box(strategy.build(black_box(set.as_slice()), hint));
                });
                report.push(Measurement {
                    group: group.clone(),
                    name: strategy.name().to_string(),
                    iterations,
                    ns_per_op,
                    reallocations_per_op: None,
                });
            }
        }

        let group = case.reset_name();
        log::info!("running {group}");
        for strategy in ResetStrategy::ALL {
            let ns_per_op = measure(iterations, || {
                black_box(strategy.run(black_box(set.as_slice()), case.clear_frequency));
            });
            report.push(Measurement {
                group: group.clone(),
                name: strategy.name().to_string(),
                iterations,
                ns_per_op,
                reallocations_per_op: None,
            });
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matrix_groups() {
        let report = run(2, 1, None, 2).unwrap();
        let concat = report
            .iter()
            .filter(|m| !m.group.contains("clearsFrequency"))
            .count();
        let reset = report.len() - concat;
        // Two distinct (segments, length) pairs, six reset cases.
        assert_eq!(concat, 2 * ConcatStrategy::ALL.len());
        assert_eq!(reset, 6 * ResetStrategy::ALL.len());
    }

    #[test]
    fn test_custom_case() {
        let report = run(1, 1, Some((3, 4)), 5).unwrap();
        assert!(
            report
                .iter()
                .any(|m| m.group == "segments_3__segmentLength_4__clearsFrequency_5")
        );
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(run(0, 1, None, 2).is_err());
        assert!(run(1, 1, Some((3, 4)), 0).is_err());
        assert!(run(1, 1, Some((0, 4)), 2).is_err());
    }
}
