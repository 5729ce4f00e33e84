use std::fmt;

use growbuf_stopwatch::ThreadTimesStopwatch;

const PAYLOAD: &str = "123123123123123";

/// Measures what pausing and resuming the timer inside a hot loop costs.
///
/// Both variants write a short payload into a reused builder and clear it;
/// `WithTimer` additionally stops and restarts the stopwatch every iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerWorkload {
    WithoutTimer,
    WithTimer,
}

impl TimerWorkload {
    pub const ALL: [TimerWorkload; 2] = [TimerWorkload::WithoutTimer, TimerWorkload::WithTimer];

    pub fn name(self) -> &'static str {
        match self {
            TimerWorkload::WithoutTimer => "builder_without_timer",
            TimerWorkload::WithTimer => "builder_with_timer",
        }
    }

    /// Runs `iterations` loop bodies and returns the number of bytes written.
    ///
    /// The stopwatch is left running if it was running on entry.
    pub fn run(
        self,
        buf: &mut String,
        iterations: usize,
        stopwatch: &mut ThreadTimesStopwatch,
    ) -> usize {
        let mut written = 0;
        for _ in 0..iterations {
            buf.push_str(PAYLOAD);
            written += buf.len();
            buf.clear();
            if self == TimerWorkload::WithTimer {
                let running = stopwatch.is_running();
                stopwatch.stop();
                if running {
                    stopwatch.start();
                }
            }
        }
        written
    }
}

impl fmt::Display for TimerWorkload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_counts_bytes_and_keeps_stopwatch_state() {
        for workload in TimerWorkload::ALL {
            let mut buf = String::new();
            let mut stopwatch = ThreadTimesStopwatch::start_new();
            let written = workload.run(&mut buf, 10, &mut stopwatch);
            assert_eq!(written, 10 * PAYLOAD.len());
            assert!(buf.is_empty());
            assert!(stopwatch.is_running());

            stopwatch.stop();
            workload.run(&mut buf, 3, &mut stopwatch);
            assert!(!stopwatch.is_running());
        }
    }
}
