//! Timer command implementation

use anyhow::Result;
use growbuf_stopwatch::ThreadTimesStopwatch;
use growbuf_workloads::TimerWorkload;

use crate::commands::verify_iterations;
use crate::utils::{Measurement, per_op};

pub fn run(iterations: usize) -> Result<Vec<Measurement>> {
    verify_iterations(iterations)?;
    let mut report = Vec::new();
    let mut buf = String::new();
    for workload in TimerWorkload::ALL {
        let mut stopwatch = ThreadTimesStopwatch::start_new();
        let written = workload.run(&mut buf, iterations, &mut stopwatch);
        stopwatch.stop();
        log::debug!("{workload}: wrote {written} bytes");
        report.push(Measurement {
            group: "timer_stop_starting".to_string(),
            name: workload.name().to_string(),
            iterations,
            ns_per_op: per_op(stopwatch.elapsed().total_ns(), iterations),
            reallocations_per_op: None,
        });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_both_workloads() {
        let report = run(10).unwrap();
        let names: Vec<_> = report.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["builder_without_timer", "builder_with_timer"]);
        assert!(run(0).is_err());
    }
}
